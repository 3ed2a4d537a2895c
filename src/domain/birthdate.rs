//! Date of birth value object.
//!
//! A birthdate is a calendar date, not an instant: it is never shifted
//! between time zones. Timestamps are accepted only for convenience and
//! contribute the date exactly as written.

use chrono::{DateTime, NaiveDate};

use super::FormError;
use crate::config::BIRTHDATE_FORMATS;

/// Calendar date parsed from a form's birthdate field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    /// Wrap an already known calendar date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse the raw field value.
    ///
    /// # Errors
    /// `MissingInput` for an absent or blank value, `InvalidInput` when no
    /// accepted format matches.
    pub fn parse(text: Option<&str>) -> Result<Self, FormError> {
        let text = match text.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return Err(FormError::MissingInput),
        };

        BIRTHDATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
            .or_else(|| {
                DateTime::parse_from_rfc3339(text)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
            .map(Self)
            .ok_or_else(FormError::unparseable)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateOfBirth {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl std::fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_html_date_input() {
        let dob = DateOfBirth::parse(Some("2000-06-15")).unwrap();
        assert_eq!(dob.date(), ymd(2000, 6, 15));
    }

    #[test]
    fn test_parse_us_and_slashed_formats() {
        assert_eq!(
            DateOfBirth::parse(Some("06/15/2000")).unwrap().date(),
            ymd(2000, 6, 15)
        );
        assert_eq!(
            DateOfBirth::parse(Some("2000/06/15")).unwrap().date(),
            ymd(2000, 6, 15)
        );
    }

    #[test]
    fn test_timestamp_keeps_written_date() {
        // Just before midnight at -10:00 is already the 16th in UTC
        let dob = DateOfBirth::parse(Some("2000-06-15T23:30:00-10:00")).unwrap();
        assert_eq!(dob.date(), ymd(2000, 6, 15));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert!(DateOfBirth::parse(Some("  2000-06-15\n")).is_ok());
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(DateOfBirth::parse(None), Err(FormError::MissingInput));
        assert_eq!(DateOfBirth::parse(Some("")), Err(FormError::MissingInput));
        assert_eq!(DateOfBirth::parse(Some("   ")), Err(FormError::MissingInput));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            DateOfBirth::parse(Some("not a date")),
            Err(FormError::unparseable())
        );
        assert_eq!(
            DateOfBirth::parse(Some("2001-02-29")),
            Err(FormError::unparseable())
        );
    }

    #[test]
    fn test_display_is_iso() {
        assert_eq!(DateOfBirth::new(ymd(1999, 1, 2)).to_string(), "1999-01-02");
    }
}
