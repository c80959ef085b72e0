//! Working-day oracle: weekday arithmetic over the public-holiday set plus
//! any locally configured non-working dates.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use shared_types::{EngineError, HolidaySet};

use crate::bank_holidays::PublicHolidayCache;
use crate::config;

/// Answers "is this date a working day?" for one immutable holiday
/// snapshot. Same inputs always give the same answer; no wall clock.
#[derive(Debug, Clone)]
pub struct WorkingDayIndicator {
    public_holidays: Arc<HolidaySet>,
    non_working_days: HolidaySet,
}

impl WorkingDayIndicator {
    pub fn new(public_holidays: Arc<HolidaySet>, non_working_days: HolidaySet) -> Self {
        Self {
            public_holidays,
            non_working_days,
        }
    }

    /// Build from the holiday cache and the configured extra non-working
    /// dates. Fails if the cache has never been filled — the oracle must
    /// not exist without holiday data.
    pub fn from_cache(cache: &PublicHolidayCache) -> Result<Self, EngineError> {
        let non_working =
            HolidaySet::from_dates(config::config().holidays.non_working_days.iter().copied());
        Ok(Self::new(cache.snapshot()?, non_working))
    }

    /// Check if a date is a Saturday or Sunday.
    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// A date is a working day iff it is not a weekend, not a public
    /// holiday, and not a configured non-working date.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !Self::is_weekend(date)
            && !self.public_holidays.contains(date)
            && !self.non_working_days.contains(date)
    }

    /// The first working day at or after `date`.
    pub fn next_working_day(&self, date: NaiveDate) -> NaiveDate {
        let mut current = date;
        while !self.is_working_day(current) {
            current = current.succ_opt().unwrap_or(current);
        }
        current
    }
}
