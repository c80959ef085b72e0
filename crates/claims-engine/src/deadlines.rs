//! Statutory deadline computation.
//!
//! Every operation is a pure function of its arguments and the holiday
//! snapshot behind the working-day indicator. Periods are calendar-based
//! with a 16:00 filing cutoff: a timestamp at exactly 16:00 counts as
//! after the cutoff. Landing on a weekend or holiday rolls forward to the
//! next working day where the rule says so, and only there.

use chrono::{Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use shared_types::{AllocatedTrack, CaseData, EngineError};

use crate::working_day::WorkingDayIndicator;

/// Court deadlines land at 16:00 unless a rule says midnight.
pub fn end_of_business_day() -> NaiveTime {
    NaiveTime::from_hms_opt(16, 0, 0).unwrap()
}

/// Deadline calculator over one working-day snapshot.
#[derive(Debug, Clone)]
pub struct DeadlinesCalculator {
    working_day: WorkingDayIndicator,
}

impl DeadlinesCalculator {
    pub fn new(working_day: WorkingDayIndicator) -> Self {
        Self { working_day }
    }

    /// Add calendar months (clamping to the last valid day of the target
    /// month, so Jul 31 + 4 months is Nov 30 and Oct 30 + 4 months lands
    /// on Feb 28/29), roll forward to the next working day, midnight.
    pub fn add_months_to_next_working_day_at_midnight(
        &self,
        months: u32,
        date: NaiveDate,
    ) -> NaiveDateTime {
        let due = self.working_day.next_working_day(date + Months::new(months));
        due.and_time(NaiveTime::MIN)
    }

    /// Add calendar months, 16:00. No working-day roll: this variant may
    /// land on a weekend.
    pub fn add_months_at_end_of_business_day(&self, months: u32, date: NaiveDate) -> NaiveDateTime {
        (date + Months::new(months)).and_time(end_of_business_day())
    }

    /// Add calendar days with the 16:00 cutoff: filing at or after 16:00
    /// consumes the day, so the count starts one day later. The result
    /// rolls forward to the next working day, at 16:00.
    pub fn plus_days_at_4pm_deadline(&self, days: i64, start: NaiveDateTime) -> NaiveDateTime {
        let base = Self::effective_start_date(start);
        let due = self.working_day.next_working_day(base + Duration::days(days));
        due.and_time(end_of_business_day())
    }

    pub fn plus_14_days_at_4pm_deadline(&self, start: NaiveDateTime) -> NaiveDateTime {
        self.plus_days_at_4pm_deadline(14, start)
    }

    pub fn plus_28_days_at_4pm_deadline(&self, start: NaiveDateTime) -> NaiveDateTime {
        self.plus_days_at_4pm_deadline(28, start)
    }

    /// Applicant's deadline to state an intention after the defence:
    /// 14 days on the small-claims track, 28 on the others.
    pub fn calculate_applicant_response_deadline(
        &self,
        start: NaiveDateTime,
        track: AllocatedTrack,
    ) -> NaiveDateTime {
        self.plus_days_at_4pm_deadline(track.response_days(), start)
    }

    /// Specified-money-claims variant: 28 days whatever the track.
    pub fn calculate_applicant_response_deadline_spec(
        &self,
        start: NaiveDateTime,
        _track: AllocatedTrack,
    ) -> NaiveDateTime {
        self.plus_days_at_4pm_deadline(28, start)
    }

    /// Date an admitted amount must be paid by. A response filed before
    /// 16:00 allows seven calendar days; at or after, the response date
    /// itself has effectively moved on a day and six remain. Not rolled
    /// to a working day.
    pub fn calculate_when_to_be_paid(&self, start: NaiveDateTime) -> NaiveDate {
        let days = if Self::is_4pm_or_after(start) { 6 } else { 7 };
        start.date() + Duration::days(days)
    }

    /// Walk forward counting only working days. Zero is the identity even
    /// when `date` is a weekend or holiday.
    pub fn plus_working_days(&self, date: NaiveDate, days: u32) -> NaiveDate {
        let mut current = date;
        let mut remaining = days;
        while remaining > 0 {
            current = current.succ_opt().unwrap_or(current);
            if self.working_day.is_working_day(current) {
                remaining -= 1;
            }
        }
        current
    }

    /// Deadline to apply to set aside or vary an order: five working days
    /// from the order, counted from the next day when the order lands at
    /// or after 16:00, and from the first working day when it lands on a
    /// non-working date.
    pub fn get_order_set_aside_or_varied_application_deadline(
        &self,
        start: NaiveDateTime,
    ) -> NaiveDate {
        let base = Self::effective_start_date(start);
        self.plus_working_days(self.working_day.next_working_day(base), 5)
    }

    /// Earliest of the given deadlines, ignoring unset entries.
    pub fn next_deadline(deadlines: &[Option<NaiveDateTime>]) -> Option<NaiveDateTime> {
        deadlines.iter().flatten().copied().min()
    }

    /// Date service-level tracking begins for a case: issue date plus a
    /// track-dependent number of weeks (30/50/80). The track comes from
    /// `allocated_track`, falling back to parsing `response_claim_track`.
    pub fn get_sla_start_date(&self, case: &CaseData) -> Result<NaiveDate, EngineError> {
        let track = match case.allocated_track {
            Some(track) => track,
            None => match case.response_claim_track.as_deref() {
                Some(raw) => raw.parse::<AllocatedTrack>()?,
                None => {
                    return Err(EngineError::invalid_case_data("Allocated track cannot be null"))
                }
            },
        };

        let issue_date = case
            .issue_date
            .ok_or_else(|| EngineError::invalid_case_data("Case issue data cannot be null"))?;

        Ok(issue_date + Duration::weeks(track.sla_weeks()))
    }

    fn is_4pm_or_after(timestamp: NaiveDateTime) -> bool {
        timestamp.time() >= end_of_business_day()
    }

    /// The date a period counts from: the filing date, or the next day for
    /// filings at or after the 16:00 cutoff.
    fn effective_start_date(timestamp: NaiveDateTime) -> NaiveDate {
        if Self::is_4pm_or_after(timestamp) {
            timestamp.date() + Duration::days(1)
        } else {
            timestamp.date()
        }
    }
}
