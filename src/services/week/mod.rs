//! Week navigation.
//!
//! The displayed range is seven consecutive days anchored at a week-start
//! date. Stepping moves the anchor by a single day so the range can be
//! scrubbed; jumping snaps it back to a Sunday.

use chrono::{Duration, NaiveDate};

use crate::utils::date::{format_week_range, start_of_week};

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekNavigator {
    week_start: NaiveDate,
}

impl WeekNavigator {
    pub fn new(week_start: NaiveDate) -> Self {
        Self { week_start }
    }

    /// Navigator for the Sunday-anchored week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self::new(start_of_week(date))
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    /// Move the anchor by `days` (usually ±1). Returns the new week-start.
    pub fn shift_day(&mut self, days: i64) -> NaiveDate {
        self.week_start += Duration::days(days);
        log::debug!("Week start shifted by {} day(s) to {}", days, self.week_start);
        self.week_start
    }

    /// Re-anchor on the Sunday on or before `date`.
    ///
    /// Returns `Some(new_start)` only when the anchor actually moved.
    pub fn jump_to_week_containing(&mut self, date: NaiveDate) -> Option<NaiveDate> {
        let target = start_of_week(date);
        if target == self.week_start {
            return None;
        }
        log::debug!("Jumping from week of {} to week of {}", self.week_start, target);
        self.week_start = target;
        Some(target)
    }

    pub fn visible_dates(&self) -> [NaiveDate; DAYS_PER_WEEK] {
        std::array::from_fn(|i| self.week_start + Duration::days(i as i64))
    }

    /// Header label such as `Dec 22 - Dec 28, 2024`.
    pub fn range_label(&self) -> String {
        format_week_range(self.week_start)
    }
}
