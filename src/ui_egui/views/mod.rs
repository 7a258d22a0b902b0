use chrono::NaiveDate;

mod palette;
pub mod week_view;

pub use palette::TimeGridPalette;

/// Intents the week view reports back to the app after a frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekViewResponse {
    /// Week start the view wants shown because the selected date moved
    /// outside the displayed week.
    pub week_change: Option<NaiveDate>,
    /// Dates of the displayed week with at least one open hour, reported
    /// whenever the week start changes.
    pub available_days: Option<Vec<NaiveDate>>,
}
