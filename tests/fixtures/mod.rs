// Test fixtures - reusable grid geometry and dates
// Shared by the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use week_scheduler::models::availability::UnavailabilityTable;
use week_scheduler::services::time_snap::{GridMetrics, TimeSnapper};

/// Sunday, Dec 22 2024: the week most fixtures are laid out on
pub fn week_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 22).unwrap()
}

/// Date of column `day_index` in the fixture week
pub fn day(day_index: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 22 + day_index).unwrap()
}

pub fn at(day_index: u32, hour: u32, minute: u32) -> NaiveDateTime {
    day(day_index).and_hms_opt(hour, minute, 0).unwrap()
}

/// Default 60px hours under a 40px header, snapping to `interval` minutes
pub fn snapper(interval: u32) -> TimeSnapper {
    TimeSnapper::new(GridMetrics::default(), interval)
}

/// Column offset of `hour:minute` with default metrics
pub fn offset(hour: u32, minute: u32) -> f32 {
    40.0 + (hour as f32 - 7.0) * 60.0 + minute as f32
}

/// Only Monday 13:00-16:00 blocked
pub fn monday_afternoon_blocked() -> UnavailabilityTable {
    UnavailabilityTable::from_entries([(1, vec![13, 14, 15])]).unwrap()
}
