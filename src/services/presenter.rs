//! Message presenter - Turns a result into the text the user sees.

use crate::domain::{AgeInYears, DisplayMessage, FormError};

/// Stateless renderer for success and error messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessagePresenter;

impl MessagePresenter {
    pub fn new() -> Self {
        Self
    }

    /// Success message for `name` at `age`.
    ///
    /// The name is used as entered.
    ///
    /// # Errors
    /// `MissingName` when the name is empty or blank.
    pub fn present(&self, name: &str, age: AgeInYears) -> Result<DisplayMessage, FormError> {
        if name.trim().is_empty() {
            return Err(FormError::MissingName);
        }

        Ok(DisplayMessage::success(format!(
            "{}, you are {} years old!",
            name, age
        )))
    }

    /// Error message carrying the error's text verbatim.
    pub fn present_error(&self, error: &dyn std::fmt::Display) -> DisplayMessage {
        DisplayMessage::error(error.to_string())
    }
}
