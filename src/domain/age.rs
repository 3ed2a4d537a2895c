//! Age in whole completed years.
//!
//! A year counts as completed only once the birthday has been reached in
//! the current year:
//!
//! ```text
//! years = today.year - birth.year
//! if (today.month, today.day) < (birth.month, birth.day) { years -= 1 }
//! ```
//!
//! A 29 February birthday is reached on 1 March in non-leap years.

use chrono::{Datelike, NaiveDate};

use super::{DateOfBirth, FormError};
use crate::config::MSG_FUTURE_BIRTHDATE;

/// Non-negative count of completed years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgeInYears(u32);

impl AgeInYears {
    pub fn new(years: u32) -> Self {
        Self(years)
    }

    pub fn years(&self) -> u32 {
        self.0
    }
}

impl From<u32> for AgeInYears {
    fn from(years: u32) -> Self {
        Self(years)
    }
}

impl std::fmt::Display for AgeInYears {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Age of someone born on `birth` as of the calendar day `today`.
///
/// # Errors
/// `InvalidInput` when `birth` is after `today`.
pub fn age_on(birth: DateOfBirth, today: NaiveDate) -> Result<AgeInYears, FormError> {
    let birth = birth.date();
    if birth > today {
        return Err(FormError::invalid(MSG_FUTURE_BIRTHDATE));
    }

    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }

    // birth <= today keeps this non-negative
    u32::try_from(years)
        .map(AgeInYears)
        .map_err(|_| FormError::invalid(MSG_FUTURE_BIRTHDATE))
}
