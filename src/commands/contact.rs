//! Contact command - validate and "send" a contact form

use crate::{
    MenufindError,
    config::MenufindConfig,
    contact::{ContactForm, Field, SubmitOutcome, ValidationError, validate},
    search::{Clock, SystemClock},
    ui::OutputWriter,
};
use std::thread;
use std::time::Duration;

type Result<T> = std::result::Result<T, MenufindError>;

/// Every field that fails validation, in form order
#[must_use]
pub fn check(name: &str, email: &str, message: &str) -> Vec<ValidationError> {
    [(Field::Name, name), (Field::Email, email), (Field::Message, message)]
        .into_iter()
        .filter_map(|(field, value)| validate(field, value).err())
        .collect()
}

/// Execute the contact command
///
/// All fields are checked so every problem is reported at once. A valid form
/// goes through the same send cycle as the page, including its delay.
///
/// # Errors
///
/// Returns `MenufindError::ValidationError` with the first failing field.
pub fn execute(
    name: &str,
    email: &str,
    message: &str,
    config: &MenufindConfig,
    output: &impl OutputWriter,
) -> Result<()> {
    let errors = check(name, email, message);
    for error in &errors {
        output.error(&format!("{}: {error}", error.field()));
    }
    if let Some(first) = errors.into_iter().next() {
        return Err(first.into());
    }

    let clock = SystemClock;
    let mut form = ContactForm::new(config.contact_send_delay());
    form.input(Field::Name, name);
    form.input(Field::Email, email);
    form.input(Field::Message, message);

    match form.submit(clock.now()) {
        SubmitOutcome::Sending => output.info("Sending…"),
        SubmitOutcome::Invalid(error) => return Err(error.into()),
        SubmitOutcome::Ignored => return Ok(()),
    }

    while !form.tick(clock.now()) {
        thread::sleep(Duration::from_millis(25));
    }

    output.success("Thanks! Your message has been sent.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MemoryWriter, MessageLevel};

    #[test]
    fn test_check_reports_every_field() {
        let errors = check("A", "nope", "");
        assert_eq!(
            errors,
            vec![
                ValidationError::NameTooShort,
                ValidationError::EmailInvalid,
                ValidationError::MessageRequired,
            ]
        );
    }

    #[test]
    fn test_execute_valid_form() {
        let config = MenufindConfig {
            contact_send_delay_ms: 0,
            ..MenufindConfig::default()
        };
        let output = MemoryWriter::new();
        let result = execute(
            "Ada Lovelace",
            "ada@example.com",
            "A table for four, please.",
            &config,
            &output,
        );
        assert!(result.is_ok());
        assert_eq!(
            output.texts(MessageLevel::Success),
            vec!["Thanks! Your message has been sent.".to_string()]
        );
    }

    #[test]
    fn test_execute_invalid_form() {
        let output = MemoryWriter::new();
        let result = execute(
            "Ada",
            "",
            "A table for four, please.",
            &MenufindConfig::default(),
            &output,
        );
        assert_eq!(
            output.texts(MessageLevel::Error),
            vec!["email: Email address is required.".to_string()]
        );
        assert!(matches!(
            result,
            Err(MenufindError::ValidationError(ValidationError::EmailRequired))
        ));
    }
}
