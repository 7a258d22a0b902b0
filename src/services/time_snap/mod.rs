//! Pointer-to-time mapping for the week grid.
//!
//! The grid is a day header followed by one cell per displayed hour. A
//! vertical pixel offset inside a day column maps linearly to minutes past
//! the first displayed hour, rounded to the snap interval.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Fixed pixel geometry of the week grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Height of one hour cell in pixels.
    pub hour_height: f32,
    /// Height of the day header above the first hour cell.
    pub header_height: f32,
    /// First hour shown in the grid.
    pub day_start_hour: u32,
    /// Last hour shown in the grid (inclusive).
    pub day_end_hour: u32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            hour_height: 60.0,
            header_height: 40.0,
            day_start_hour: 7,
            day_end_hour: 23,
        }
    }
}

impl GridMetrics {
    pub fn minutes_per_pixel(&self) -> f32 {
        60.0 / self.hour_height
    }

    pub fn pixels_per_minute(&self) -> f32 {
        self.hour_height / 60.0
    }

    /// Displayed hours, top to bottom.
    pub fn hours(&self) -> impl Iterator<Item = u32> + Clone {
        self.day_start_hour..=self.day_end_hour
    }

    pub fn hour_count(&self) -> u32 {
        self.day_end_hour + 1 - self.day_start_hour
    }

    /// Total column height: header plus every hour cell.
    pub fn column_height(&self) -> f32 {
        self.header_height + self.hour_count() as f32 * self.hour_height
    }

    /// Offset from the column top at which `time` is drawn.
    pub fn offset_for_time(&self, time: NaiveTime) -> f32 {
        let minutes = (time.hour() as i64 - self.day_start_hour as i64) * 60 + time.minute() as i64;
        self.header_height + minutes as f32 * self.pixels_per_minute()
    }

    /// Pixel height of a span.
    pub fn height_for(&self, duration: Duration) -> f32 {
        duration.num_minutes() as f32 * self.pixels_per_minute()
    }
}

/// Converts pointer offsets into snapped timestamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSnapper {
    metrics: GridMetrics,
    interval_minutes: u32,
}

impl TimeSnapper {
    pub fn new(metrics: GridMetrics, interval_minutes: u32) -> Self {
        Self {
            metrics,
            interval_minutes: interval_minutes.max(1),
        }
    }

    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    pub fn interval(&self) -> Duration {
        Duration::minutes(self.interval_minutes as i64)
    }

    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    /// Snap a pixel offset measured from the top of a day column.
    ///
    /// Offsets above the first hour cell or below the last one are not
    /// clamped and may land outside the displayed hours.
    pub fn snap(&self, offset_y: f32, day_index: usize, week_start: NaiveDate) -> NaiveDateTime {
        let relative_y = offset_y - self.metrics.header_height;
        let interval = self.interval_minutes as f32;
        let raw_minutes = relative_y * self.metrics.minutes_per_pixel();
        // Halves round up
        let minutes = ((raw_minutes / interval + 0.5).floor() * interval) as i64;

        let day_origin = (week_start + Duration::days(day_index as i64))
            .and_time(NaiveTime::MIN)
            + Duration::hours(self.metrics.day_start_hour as i64);

        day_origin + Duration::minutes(minutes)
    }
}
