//! Availability checks against an [`UnavailabilityTable`].
//!
//! Checks are hour-granular and inclusive at both ends: every whole hour
//! from the start hour through the end hour must be free, so a span ending
//! at `14:00` is refused when 14:00-15:00 is blocked even though it never
//! enters that hour.
//!
//! Grid interactions use [`AvailabilityService::is_day_span_available`],
//! which keeps a span on one date and treats a midnight end as the close of
//! hour 23.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::models::availability::UnavailabilityTable;

/// Read-only availability queries over one table.
pub struct AvailabilityService<'a> {
    table: &'a UnavailabilityTable,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(table: &'a UnavailabilityTable) -> Self {
        Self { table }
    }

    /// Whether `[start.hour, end.hour]` avoids every blocked hour of
    /// `start`'s weekday.
    ///
    /// A span whose end hour is earlier than its start hour (it crossed
    /// midnight) checks no hours and is reported available.
    pub fn is_slot_available(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        let day = start.weekday().num_days_from_sunday();
        (start.hour()..=end.hour()).all(|hour| !self.table.is_blocked(day, hour))
    }

    /// Like [`is_slot_available`](Self::is_slot_available) for a span that
    /// must stay on `start`'s date.
    ///
    /// An end at the following midnight closes hour 23, so hours through 23
    /// are checked. Any later end, or a start before the previous day's
    /// close, is refused.
    pub fn is_day_span_available(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        let next_midnight = start.date().and_time(NaiveTime::MIN) + Duration::days(1);
        if end > next_midnight || end <= start {
            return false;
        }
        if end == next_midnight {
            return self.is_slot_available(start, end - Duration::minutes(1));
        }
        self.is_slot_available(start, end)
    }

    /// Availability of the one-hour slot starting at `hour` on `date`.
    pub fn is_hour_available(&self, date: NaiveDate, hour: u32) -> bool {
        let start = date.and_time(NaiveTime::MIN) + Duration::hours(hour as i64);
        self.is_day_span_available(start, start + Duration::hours(1))
    }

    /// Dates with at least one available one-hour slot among `hours`.
    pub fn available_days<I>(&self, dates: &[NaiveDate], hours: I) -> Vec<NaiveDate>
    where
        I: IntoIterator<Item = u32> + Clone,
    {
        dates
            .iter()
            .copied()
            .filter(|date| {
                hours
                    .clone()
                    .into_iter()
                    .any(|hour| self.is_hour_available(*date, hour))
            })
            .collect()
    }
}
