// Property-based tests for snapping, dragging and week navigation
// Random pointer offsets and dates must keep the grid invariants

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::{Datelike, Duration, NaiveDate, Timelike};
use fixtures::{offset, snapper, week_start};
use proptest::prelude::*;
use week_scheduler::models::availability::UnavailabilityTable;
use week_scheduler::models::settings::VALID_SNAP_INTERVALS;
use week_scheduler::services::week::WeekNavigator;
use week_scheduler::ui_egui::selection::{SelectionContext, SelectionController};

fn interval_strategy() -> impl Strategy<Value = u32> {
    prop::sample::select(VALID_SNAP_INTERVALS.to_vec())
}

proptest! {
    /// Property: snapped minutes are always a multiple of the interval
    #[test]
    fn prop_snap_minutes_multiple_of_interval(
        offset_y in 0.0f32..1100.0,
        day_index in 0usize..7,
        interval in interval_strategy(),
    ) {
        let time = snapper(interval).snap(offset_y, day_index, week_start());
        prop_assert_eq!(time.minute() % interval, 0);
        prop_assert_eq!(time.second(), 0);
    }

    /// Property: a drag never ends at or before its start
    #[test]
    fn prop_drag_end_after_start(
        start_y in 40.0f32..1060.0,
        moves in prop::collection::vec(0.0f32..1100.0, 1..20),
        day_index in 0usize..7,
    ) {
        let table = UnavailabilityTable::sample();
        let snapper = snapper(30);
        let cx = SelectionContext { week_start: week_start(), snapper: &snapper, table: &table };

        let mut selection = SelectionController::new();
        selection.pointer_pressed(&cx, day_index, start_y);
        for y in moves {
            selection.pointer_moved(&cx, day_index, y);
            if let Some(slot) = selection.state().slot() {
                prop_assert!(slot.end > slot.start);
            }
        }
    }

    /// Property: every dragged slot stays on its own date and clear of
    /// blocked hours, including drags to the bottom edge of the column
    #[test]
    fn prop_dragged_slot_is_available(
        start_hour in 7u32..=23,
        moves in prop::collection::vec(0.0f32..=1060.0, 1..12),
        day_index in 0usize..7,
    ) {
        let table = UnavailabilityTable::sample();
        let snapper = snapper(30);
        let cx = SelectionContext { week_start: week_start(), snapper: &snapper, table: &table };

        let mut selection = SelectionController::new();
        selection.pointer_pressed(&cx, day_index, offset(start_hour, 0));
        for y in moves {
            selection.pointer_moved(&cx, day_index, y);
        }
        selection.pointer_released();

        if let Some(slot) = selection.state().selected() {
            let date = slot.start.date();
            let next_midnight = date.and_hms_opt(0, 0, 0).unwrap() + Duration::days(1);
            prop_assert!(slot.end <= next_midnight);

            let last_hour = if slot.end == next_midnight { 23 } else { slot.end.hour() };
            let weekday = date.weekday().num_days_from_sunday();
            for hour in slot.start.hour()..=last_hour {
                prop_assert!(
                    !table.is_blocked(weekday, hour),
                    "slot {} - {} covers blocked hour {}",
                    slot.start,
                    slot.end,
                    hour
                );
            }
        }
    }

    /// Property: one day forward then back restores the week start
    #[test]
    fn prop_shift_day_round_trip(days_from_epoch in 0i64..40_000) {
        let start = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Duration::days(days_from_epoch);
        let mut nav = WeekNavigator::new(start);
        nav.shift_day(1);
        nav.shift_day(-1);
        prop_assert_eq!(nav.week_start(), start);
    }

    /// Property: jumping always lands on the Sunday at most six days back
    #[test]
    fn prop_jump_lands_on_containing_sunday(days_from_epoch in 0i64..40_000) {
        let date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Duration::days(days_from_epoch);
        let mut nav = WeekNavigator::new(date);
        nav.jump_to_week_containing(date);
        prop_assert!(nav.visible_dates().contains(&date));
        prop_assert_eq!(nav.week_start().format("%a").to_string(), "Sun");
    }
}
