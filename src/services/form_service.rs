//! Form service - Handles one birthdate form submission.
//!
//! Validation order matches the form: the birthdate is checked before the
//! name. Every failure ends up as an error message; nothing propagates.

use crate::domain::{DisplayMessage, FormError, FormSubmission};

use super::{AgeCalculator, MessagePresenter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Form submission service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait FormService: Send + Sync {
    /// Compute and present the message for one submission
    fn submit(&self, submission: FormSubmission) -> DisplayMessage;
}

/// Concrete implementation of FormService.
#[derive(Debug, Clone)]
pub struct FormHandler {
    calculator: AgeCalculator,
    presenter: MessagePresenter,
}

impl FormHandler {
    pub fn new(calculator: AgeCalculator) -> Self {
        Self {
            calculator,
            presenter: MessagePresenter::new(),
        }
    }

    fn evaluate(&self, submission: &FormSubmission) -> Result<DisplayMessage, FormError> {
        let age = self.calculator.compute_age(submission.dob.as_deref())?;
        self.presenter
            .present(submission.name.as_deref().unwrap_or_default(), age)
    }
}

impl FormService for FormHandler {
    fn submit(&self, submission: FormSubmission) -> DisplayMessage {
        match self.evaluate(&submission) {
            Ok(message) => {
                tracing::debug!(dob = ?submission.dob, "Age computed");
                message
            }
            Err(e) => {
                tracing::info!(error = %e, "Form submission rejected");
                self.presenter.present_error(&e)
            }
        }
    }
}
