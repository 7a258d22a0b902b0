// Date utility functions

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// First day of `date`'s month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Clock time as `9:30 AM` or `09:30`.
pub fn format_time(time: NaiveTime, use_24_hour: bool) -> String {
    if use_24_hour {
        time.format("%H:%M").to_string()
    } else {
        time.format("%-I:%M %p").to_string()
    }
}

/// Hour axis label: `7am`, `12pm` or `07:00`.
pub fn format_hour_label(hour: u32, use_24_hour: bool) -> String {
    if use_24_hour {
        format!("{:02}:00", hour)
    } else {
        let display = if hour % 12 == 0 { 12 } else { hour % 12 };
        let suffix = if hour < 12 { "am" } else { "pm" };
        format!("{}{}", display, suffix)
    }
}

/// `Dec 22 - Dec 28, 2024` for the seven days starting at `start`.
pub fn format_week_range(start: NaiveDate) -> String {
    let end = start + Duration::days(6);
    format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
}

/// `Monday, December 23, 2024`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// `Monday, December 23, 2024, 9:00 AM - 10:00 AM`
pub fn format_slot_range(start: NaiveDateTime, end: NaiveDateTime, use_24_hour: bool) -> String {
    format!(
        "{}, {} - {}",
        format_long_date(start.date()),
        format_time(start.time(), use_24_hour),
        format_time(end.time(), use_24_hour)
    )
}
