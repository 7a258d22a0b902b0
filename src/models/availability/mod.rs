//! Unavailability table model.
//!
//! Maps a day of the week (0 = Sunday .. 6 = Saturday) to the set of
//! hours of the day during which no slot may start or span. The table is
//! loaded from configuration and stays immutable for the session.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

const DAY_KEYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Errors raised while building an [`UnavailabilityTable`] from raw data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityTableError {
    #[error("unknown day '{0}' (use 0-6 or a weekday name)")]
    InvalidDay(String),
    #[error("hour {hour} on day {day} is outside 0-23")]
    InvalidHour { day: u32, hour: u32 },
}

/// Per-weekday set of blocked hours.
///
/// Serialized as a map keyed by lowercase weekday name, e.g.
/// `monday = [13, 14, 15]`. Numeric keys `"0"`..`"6"` are accepted on input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<u32>>", into = "BTreeMap<String, Vec<u32>>")]
pub struct UnavailabilityTable {
    days: BTreeMap<u32, BTreeSet<u32>>,
}

impl UnavailabilityTable {
    /// An empty table: every hour of every day is available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(day, hours)` pairs, validating ranges.
    pub fn from_entries<I, H>(entries: I) -> Result<Self, AvailabilityTableError>
    where
        I: IntoIterator<Item = (u32, H)>,
        H: IntoIterator<Item = u32>,
    {
        let mut table = Self::new();
        for (day, hours) in entries {
            for hour in hours {
                table.block(day, hour)?;
            }
        }
        Ok(table)
    }

    /// Mark `hour` on `day` as unavailable.
    pub fn block(&mut self, day: u32, hour: u32) -> Result<(), AvailabilityTableError> {
        if day > 6 {
            return Err(AvailabilityTableError::InvalidDay(day.to_string()));
        }
        if hour > 23 {
            return Err(AvailabilityTableError::InvalidHour { day, hour });
        }
        self.days.entry(day).or_default().insert(hour);
        Ok(())
    }

    pub fn is_blocked(&self, day: u32, hour: u32) -> bool {
        self.days
            .get(&day)
            .map(|hours| hours.contains(&hour))
            .unwrap_or(false)
    }

    /// The sample schedule shipped with the application.
    pub fn sample() -> Self {
        let mut table = Self::new();
        let entries: [(u32, &[u32]); 7] = [
            (0, &[9, 10, 11]),
            (1, &[13, 14, 15]),
            (2, &[16, 17]),
            (3, &[12, 13]),
            (4, &[18, 19, 20]),
            (5, &[8, 9, 10]),
            (6, &[21, 22, 23]),
        ];
        for (day, hours) in entries {
            table.days.insert(day, hours.iter().copied().collect());
        }
        table
    }
}

fn parse_day_key(key: &str) -> Result<u32, AvailabilityTableError> {
    let normalized = key.trim().to_lowercase();
    if let Ok(day) = normalized.parse::<u32>() {
        return if day <= 6 {
            Ok(day)
        } else {
            Err(AvailabilityTableError::InvalidDay(key.to_string()))
        };
    }
    DAY_KEYS
        .iter()
        .position(|name| *name == normalized || name[..3] == normalized)
        .map(|idx| idx as u32)
        .ok_or_else(|| AvailabilityTableError::InvalidDay(key.to_string()))
}

impl TryFrom<BTreeMap<String, Vec<u32>>> for UnavailabilityTable {
    type Error = AvailabilityTableError;

    fn try_from(raw: BTreeMap<String, Vec<u32>>) -> Result<Self, Self::Error> {
        let mut table = Self::new();
        for (key, hours) in raw {
            let day = parse_day_key(&key)?;
            for hour in hours {
                table.block(day, hour)?;
            }
        }
        Ok(table)
    }
}

impl From<UnavailabilityTable> for BTreeMap<String, Vec<u32>> {
    fn from(table: UnavailabilityTable) -> Self {
        table
            .days
            .into_iter()
            .filter(|(_, hours)| !hours.is_empty())
            .map(|(day, hours)| (DAY_KEYS[day as usize].to_string(), hours.into_iter().collect()))
            .collect()
    }
}
