//! Form input errors.
//!
//! These are the user-facing failures of the age core. They are independent
//! of infrastructure concerns (HTTP, storage) and their display text is
//! exactly what gets shown to the user.

use thiserror::Error;

use crate::config::{MSG_INVALID_BIRTHDATE, MSG_MISSING_BIRTHDATE, MSG_MISSING_NAME};

/// Errors raised while turning form fields into an age message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Birthdate field absent or empty
    #[error("{}", MSG_MISSING_BIRTHDATE)]
    MissingInput,

    /// Birthdate unparseable or after today
    #[error("{0}")]
    InvalidInput(String),

    /// Name field absent or empty
    #[error("{}", MSG_MISSING_NAME)]
    MissingName,
}

impl FormError {
    /// Create an invalid input error with a specific reason
    pub fn invalid(reason: impl Into<String>) -> Self {
        FormError::InvalidInput(reason.into())
    }

    /// Invalid input because the text is not a calendar date
    pub fn unparseable() -> Self {
        FormError::invalid(MSG_INVALID_BIRTHDATE)
    }
}
