//! Contact form
//!
//! Field validation and the simulated submission cycle of the contact page.
//!
//! A field is validated when it loses focus. Once a field is invalid it is
//! re-validated on every edit, so the error disappears as soon as the value
//! becomes acceptable. Submitting validates the fields in order and stops at
//! the first invalid one; a valid form is "sent" after a fixed delay.
//!
//! ```text
//!   Editing ──submit (all valid)──► Sending ──tick (delay elapsed)──► Sent
//!      ▲                                                               │
//!      └──────────────────────────── reset ────────────────────────────┘
//! ```

pub mod error;

pub use error::ValidationError;

use crate::search::Deferred;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

/// Default time the simulated send takes
pub const DEFAULT_SEND_DELAY: Duration = Duration::from_millis(1500);

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.][^\s@]*$").ok());

fn is_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

/// Contact form fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Message => 2,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validate one field value
///
/// The value is trimmed first. Lengths count characters, not bytes.
///
/// # Errors
///
/// Returns the `ValidationError` describing the first rule the value breaks.
pub fn validate(field: Field, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let len = value.chars().count();

    match field {
        Field::Name if value.is_empty() => Err(ValidationError::NameRequired),
        Field::Name if len < 2 => Err(ValidationError::NameTooShort),
        Field::Email if value.is_empty() => Err(ValidationError::EmailRequired),
        Field::Email if !is_email(value) => Err(ValidationError::EmailInvalid),
        Field::Message if value.is_empty() => Err(ValidationError::MessageRequired),
        Field::Message if len < 10 => Err(ValidationError::MessageTooShort),
        _ => Ok(()),
    }
}

/// Validation state of one field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Not validated yet
    #[default]
    Pristine,
    Valid,
    Invalid(ValidationError),
}

impl FieldStatus {
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Message to show next to the field, if any
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Invalid(error) => Some(error.to_string()),
            _ => None,
        }
    }
}

/// Submission phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Sending,
    /// The confirmation is shown in place of the form
    Sent,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field failed; focus belongs on it
    Invalid(ValidationError),
    /// All fields passed and the send has started
    Sending,
    /// A send is already in flight, or the confirmation is showing
    Ignored,
}

/// Contact form state
#[derive(Debug, Clone)]
pub struct ContactForm {
    values: [String; 3],
    statuses: [FieldStatus; 3],
    phase: FormPhase,
    send: Deferred,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(DEFAULT_SEND_DELAY)
    }
}

impl ContactForm {
    #[must_use]
    pub fn new(send_delay: Duration) -> Self {
        Self {
            values: Default::default(),
            statuses: Default::default(),
            phase: FormPhase::Editing,
            send: Deferred::new(send_delay),
        }
    }

    /// Replace a field's value, re-validating it if it is currently invalid
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
        if self.status(field).is_invalid() {
            self.validate_field(field);
        }
    }

    /// Validate a field that lost focus
    pub fn blur(&mut self, field: Field) -> &FieldStatus {
        self.validate_field(field);
        self.status(field)
    }

    /// Validate all fields and start sending if they pass
    ///
    /// Fields are checked in form order and checking stops at the first
    /// failure, so later fields keep their previous status.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if self.phase != FormPhase::Editing {
            log::debug!("ignoring contact submit while {:?}", self.phase);
            return SubmitOutcome::Ignored;
        }

        for field in Field::ALL {
            if let FieldStatus::Invalid(error) = self.validate_field(field) {
                return SubmitOutcome::Invalid(error.clone());
            }
        }

        self.phase = FormPhase::Sending;
        self.send.schedule(now);
        log::info!("sending contact message");
        SubmitOutcome::Sending
    }

    /// Complete a due send; returns `true` when the send just finished
    ///
    /// Completion clears every value and status and shows the confirmation.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.send.fire_if_due(now) {
            return false;
        }
        self.values = Default::default();
        self.statuses = Default::default();
        self.phase = FormPhase::Sent;
        log::debug!("contact message sent");
        true
    }

    /// Leave the confirmation and return to an empty form
    pub fn reset(&mut self) {
        if self.phase == FormPhase::Sent {
            self.phase = FormPhase::Editing;
        }
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    #[must_use]
    pub fn status(&self, field: Field) -> &FieldStatus {
        &self.statuses[field.index()]
    }

    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.phase == FormPhase::Sending
    }

    fn validate_field(&mut self, field: Field) -> &FieldStatus {
        let status = match validate(field, self.value(field)) {
            Ok(()) => FieldStatus::Valid,
            Err(error) => FieldStatus::Invalid(error),
        };
        self.statuses[field.index()] = status;
        &self.statuses[field.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Clock, ManualClock};

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.input(Field::Name, "Ada Lovelace");
        form.input(Field::Email, "ada@example.com");
        form.input(Field::Message, "Do you take reservations?");
        form
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(validate(Field::Name, "   "), Err(ValidationError::NameRequired));
        assert_eq!(validate(Field::Name, " A "), Err(ValidationError::NameTooShort));
        assert_eq!(validate(Field::Name, "Al"), Ok(()));
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate(Field::Email, ""), Err(ValidationError::EmailRequired));
        for bad in ["ada", "ada@", "ada@example", "ada@example.", "a da@example.com"] {
            assert_eq!(
                validate(Field::Email, bad),
                Err(ValidationError::EmailInvalid),
                "{bad} should be rejected"
            );
        }
        assert_eq!(validate(Field::Email, "ada@example.com"), Ok(()));
        assert_eq!(validate(Field::Email, "  ada@mail.example.co.uk "), Ok(()));
    }

    #[test]
    fn test_message_rules() {
        assert_eq!(validate(Field::Message, ""), Err(ValidationError::MessageRequired));
        assert_eq!(validate(Field::Message, "too short"), Err(ValidationError::MessageTooShort));
        assert_eq!(validate(Field::Message, "long enough"), Ok(()));
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(validate(Field::Name, "É"), Err(ValidationError::NameTooShort));
        assert_eq!(validate(Field::Name, "Éa"), Ok(()));
    }

    #[test]
    fn test_validate_on_blur_only() {
        let mut form = ContactForm::default();
        form.input(Field::Name, "A");
        assert_eq!(form.status(Field::Name), &FieldStatus::Pristine);

        let status = form.blur(Field::Name).clone();
        assert_eq!(status, FieldStatus::Invalid(ValidationError::NameTooShort));
        assert_eq!(
            status.message().as_deref(),
            Some("Name must be at least 2 characters.")
        );
    }

    #[test]
    fn test_live_revalidation_once_invalid() {
        let mut form = ContactForm::default();
        form.blur(Field::Email);
        assert!(form.status(Field::Email).is_invalid());

        form.input(Field::Email, "ada@");
        assert_eq!(
            form.status(Field::Email),
            &FieldStatus::Invalid(ValidationError::EmailInvalid)
        );

        form.input(Field::Email, "ada@example.com");
        assert_eq!(form.status(Field::Email), &FieldStatus::Valid);

        form.input(Field::Email, "broken");
        assert_eq!(form.status(Field::Email), &FieldStatus::Valid);
    }

    #[test]
    fn test_submit_stops_at_first_invalid() {
        let mut form = ContactForm::default();
        form.input(Field::Name, "Ada");
        let clock = ManualClock::new();

        let outcome = form.submit(clock.now());
        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::EmailRequired));
        assert_eq!(form.status(Field::Name), &FieldStatus::Valid);
        assert_eq!(form.status(Field::Message), &FieldStatus::Pristine);
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_send_cycle() {
        let clock = ManualClock::new();
        let mut form = filled_form();

        assert_eq!(form.submit(clock.now()), SubmitOutcome::Sending);
        assert!(form.is_sending());
        assert_eq!(form.submit(clock.now()), SubmitOutcome::Ignored);

        clock.advance(Duration::from_millis(1499));
        assert!(!form.tick(clock.now()));
        assert_eq!(form.value(Field::Name), "Ada Lovelace");

        clock.advance(Duration::from_millis(1));
        assert!(form.tick(clock.now()));
        assert_eq!(form.phase(), FormPhase::Sent);
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
            assert_eq!(form.status(field), &FieldStatus::Pristine);
        }

        assert_eq!(form.submit(clock.now()), SubmitOutcome::Ignored);
        form.reset();
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_custom_send_delay() {
        let clock = ManualClock::new();
        let mut form = ContactForm::new(Duration::from_millis(10));
        form.input(Field::Name, "Ada Lovelace");
        form.input(Field::Email, "ada@example.com");
        form.input(Field::Message, "Table for two on Friday");

        form.submit(clock.now());
        clock.advance(Duration::from_millis(10));
        assert!(form.tick(clock.now()));
    }

    #[test]
    fn test_reset_while_editing_is_noop() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.value(Field::Name), "Ada Lovelace");
    }
}
