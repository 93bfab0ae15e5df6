//! Contact form validation errors
//!
//! The display text of each variant is the message shown next to the field.

use super::Field;
use thiserror::Error;

/// A field value that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full name is required.")]
    NameRequired,

    #[error("Name must be at least 2 characters.")]
    NameTooShort,

    #[error("Email address is required.")]
    EmailRequired,

    #[error("Please enter a valid email address.")]
    EmailInvalid,

    #[error("Please write us a message before sending.")]
    MessageRequired,

    #[error("Message must be at least 10 characters.")]
    MessageTooShort,
}

impl ValidationError {
    /// The field this error belongs to
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::NameRequired | Self::NameTooShort => Field::Name,
            Self::EmailRequired | Self::EmailInvalid => Field::Email,
            Self::MessageRequired | Self::MessageTooShort => Field::Message,
        }
    }
}
