//! Calendar clock abstraction.
//!
//! Date-relative queries ("expiring within N days") read "today" through a
//! [`Clock`] so tests can pin the date instead of depending on wall time.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock {
    /// Today's date. Time of day is never observed.
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date from the system clock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

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

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(FixedClock::new(date).today(), date);
    }

    #[test]
    fn system_clock_matches_local_date() {
        // Straddling midnight would make this flaky by one day at most.
        let before = Local::now().date_naive();
        let today = SystemClock.today();
        assert!(today >= before);
        assert!(today <= Local::now().date_naive());
    }
}
