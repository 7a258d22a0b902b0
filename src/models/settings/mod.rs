// Settings module

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::availability::UnavailabilityTable;

/// Snap intervals that divide an hour evenly.
pub const VALID_SNAP_INTERVALS: [u32; 12] = [1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30, 60];

const VALID_THEMES: [&str; 3] = ["dark", "light", "system"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsValidationError {
    #[error("snap interval {0} does not divide an hour evenly")]
    InvalidSnapInterval(u32),
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),
    #[error("unknown theme '{0}' (expected dark, light or system)")]
    UnknownTheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "dark", "light" or "system"
    pub theme: String,
    pub use_24_hour: bool,
    pub snap_interval_minutes: u32,
    /// First displayed day on launch; the current week's Sunday when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_week_start: Option<NaiveDate>,
    pub host_name: String,
    pub host_subtitle: String,
    pub meeting_duration_label: String,
    pub meeting_location_label: String,
    /// IANA name, shown as-is in the sidebar.
    pub timezone: String,
    pub unavailable_hours: UnavailabilityTable,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            use_24_hour: false,
            snap_interval_minutes: 30,
            initial_week_start: None,
            host_name: "kasey".to_string(),
            host_subtitle: "for just an hour".to_string(),
            meeting_duration_label: "1h".to_string(),
            meeting_location_label: "Cal Video".to_string(),
            timezone: "America/Chicago".to_string(),
            unavailable_hours: UnavailabilityTable::sample(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if !VALID_SNAP_INTERVALS.contains(&self.snap_interval_minutes) {
            return Err(SettingsValidationError::InvalidSnapInterval(
                self.snap_interval_minutes,
            ));
        }

        if self.timezone.parse::<chrono_tz::Tz>().is_err() {
            return Err(SettingsValidationError::UnknownTimezone(
                self.timezone.clone(),
            ));
        }

        if !VALID_THEMES.contains(&self.theme.to_lowercase().as_str()) {
            return Err(SettingsValidationError::UnknownTheme(self.theme.clone()));
        }

        Ok(())
    }
}
