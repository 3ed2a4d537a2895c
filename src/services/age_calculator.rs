//! Age calculator - Birthdate field text to completed years.

use std::sync::Arc;

use super::Clock;
use crate::domain::{age_on, AgeInYears, DateOfBirth, FormError};

/// Computes ages against an injected clock.
#[derive(Clone)]
pub struct AgeCalculator {
    clock: Arc<dyn Clock>,
}

impl AgeCalculator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Age in whole years for the raw birthdate field value.
    ///
    /// # Errors
    /// * `MissingInput` - value absent or blank
    /// * `InvalidInput` - not a calendar date, or after today
    pub fn compute_age(&self, dob: Option<&str>) -> Result<AgeInYears, FormError> {
        let birth = DateOfBirth::parse(dob)?;
        age_on(birth, self.clock.today())
    }
}

impl std::fmt::Debug for AgeCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgeCalculator").finish_non_exhaustive()
    }
}
