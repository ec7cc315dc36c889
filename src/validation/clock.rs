//! Wall-clock abstraction so age checks can be tested against a fixed date

use chrono::{Local, NaiveDate};

/// Source of the current calendar date
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Today's date in the user's local time zone
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
