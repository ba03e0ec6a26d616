// Clock source
// "Today" must be the user's local calendar day, not UTC

use chrono::{Local, NaiveDate};

/// Supplies the current calendar day for date-only rules like the
/// past-date check. Hoisted behind a trait so those rules can be tested
/// against a fixed day.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

impl Clock for NaiveDate {
    fn today(&self) -> NaiveDate {
        *self
    }
}
