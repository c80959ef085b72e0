use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ── Feed payload ────────────────────────────────────────────────────

/// Payload of the public bank-holidays feed (gov.uk JSON shape): one
/// division per jurisdiction, each carrying a flat list of events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankHolidays {
    #[serde(rename = "england-and-wales")]
    pub england_and_wales: HolidayDivision,
    #[serde(rename = "scotland", default)]
    pub scotland: Option<HolidayDivision>,
    #[serde(rename = "northern-ireland", default)]
    pub northern_ireland: Option<HolidayDivision>,
}

/// One jurisdiction's section of the feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HolidayDivision {
    pub division: String,
    pub events: Vec<BankHolidayEvent>,
}

/// A single bank-holiday entry as published by the feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankHolidayEvent {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub bunting: bool,
}

// ── Holiday set ─────────────────────────────────────────────────────

/// Ordered, deduplicated set of non-working dates. Immutable once built;
/// the cache swaps whole sets rather than mutating one in place.
///
/// Only the england-and-wales division feeds the set: civil claims are an
/// England & Wales jurisdiction and the other divisions' holidays must not
/// push deadlines.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Build from a feed payload, keeping the england-and-wales events.
    pub fn from_feed(feed: &BankHolidays) -> Self {
        Self::from_dates(feed.england_and_wales.events.iter().map(|e| e.date))
    }

    /// Build from a plain list of dates (duplicates collapse).
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}
