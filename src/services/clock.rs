//! Clock - Source of "today" for age calculation.
//!
//! Only the calendar day matters. The system clock resolves it in the
//! configured time zone; birthdates are never converted.

use chrono::{Local, NaiveDate, Utc};

use crate::config::TodayTimezone;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Provides the current calendar date.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in local time or UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: TodayTimezone,
}

impl SystemClock {
    pub fn new(timezone: TodayTimezone) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.timezone {
            TodayTimezone::Local => Local::now().date_naive(),
            TodayTimezone::Utc => Utc::now().date_naive(),
        }
    }
}

/// Clock pinned to one day (CLI `--today`, tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(FixedClock::new(day).today(), day);
    }

    #[test]
    fn test_utc_clock_matches_utc_date() {
        let before = Utc::now().date_naive();
        let today = SystemClock::new(TodayTimezone::Utc).today();
        let after = Utc::now().date_naive();
        assert!(today == before || today == after);
    }
}
