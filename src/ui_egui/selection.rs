//! Pointer-driven slot selection for the week grid.
//!
//! [`SelectionController`] owns the single [`SlotSelection`] value of the
//! week view and applies pointer events to it. Events that would produce an
//! unavailable or empty slot leave the state untouched.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::availability::UnavailabilityTable;
use crate::models::slot::{HoveredSlot, Slot, SlotSelection};
use crate::services::availability::AvailabilityService;
use crate::services::time_snap::TimeSnapper;

/// Everything a pointer event needs to turn a pixel offset into a slot.
#[derive(Clone, Copy)]
pub struct SelectionContext<'a> {
    pub week_start: NaiveDate,
    pub snapper: &'a TimeSnapper,
    pub table: &'a UnavailabilityTable,
}

impl SelectionContext<'_> {
    fn column_date(&self, day_index: usize) -> NaiveDate {
        self.week_start + Duration::days(day_index as i64)
    }

    /// The span must start on its column's date and end by the next midnight.
    fn span_available(&self, day_index: usize, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start.date() == self.column_date(day_index)
            && AvailabilityService::new(self.table).is_day_span_available(start, end)
    }
}

/// Window-wide pointer-release listener, alive only while a drag is.
///
/// A drag can leave the grid before the button is released, so the host
/// polls for releases anywhere while one of these exists.
#[derive(Debug)]
pub struct ReleaseSubscription {
    day_index: usize,
}

impl ReleaseSubscription {
    fn subscribe(day_index: usize) -> Self {
        log::debug!("Listening for pointer release (drag on day {})", day_index);
        Self { day_index }
    }
}

impl Drop for ReleaseSubscription {
    fn drop(&mut self) {
        log::debug!("Release listener for day {} dropped", self.day_index);
    }
}

#[derive(Debug, Default)]
pub struct SelectionController {
    state: SlotSelection,
    release: Option<ReleaseSubscription>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SlotSelection {
        &self.state
    }

    /// Whether the host should route window-wide releases here.
    pub fn wants_global_release(&self) -> bool {
        self.release.is_some()
    }

    /// Pointer moved over column `day_index` at `offset_y` from its top.
    pub fn pointer_moved(&mut self, cx: &SelectionContext<'_>, day_index: usize, offset_y: f32) {
        match self.state {
            SlotSelection::Dragging(slot) => {
                let end = cx.snapper.snap(offset_y, slot.day_index, cx.week_start);
                if end > slot.start && cx.span_available(slot.day_index, slot.start, end) {
                    self.state = SlotSelection::Dragging(Slot { end, ..slot });
                }
            }
            SlotSelection::Selected(_) => {}
            SlotSelection::Idle | SlotSelection::Hovering(_) => {
                let time = cx.snapper.snap(offset_y, day_index, cx.week_start);
                let end = time + cx.snapper.interval();
                self.state = if cx.span_available(day_index, time, end) {
                    SlotSelection::Hovering(HoveredSlot { day_index, time })
                } else {
                    SlotSelection::Idle
                };
            }
        }
    }

    /// Primary button went down over column `day_index`.
    pub fn pointer_pressed(&mut self, cx: &SelectionContext<'_>, day_index: usize, offset_y: f32) {
        if !matches!(self.state, SlotSelection::Idle | SlotSelection::Hovering(_)) {
            return;
        }

        let start = cx.snapper.snap(offset_y, day_index, cx.week_start);
        let end = start + cx.snapper.interval();
        if !cx.span_available(day_index, start, end) {
            return;
        }

        log::debug!("Drag started on day {} at {}", day_index, start);
        self.state = SlotSelection::Dragging(Slot::new(day_index, start, end));
        self.release = Some(ReleaseSubscription::subscribe(day_index));
    }

    /// Primary button released, inside or outside the grid.
    pub fn pointer_released(&mut self) {
        self.release = None;
        match self.state {
            SlotSelection::Dragging(slot) => {
                log::info!("Selected slot {} - {}", slot.start, slot.end);
                self.state = SlotSelection::Selected(slot);
            }
            SlotSelection::Hovering(_) => self.state = SlotSelection::Idle,
            SlotSelection::Idle | SlotSelection::Selected(_) => {}
        }
    }

    /// Pointer left the grid columns. Only a hover is cleared.
    pub fn pointer_left(&mut self) {
        if let SlotSelection::Hovering(_) = self.state {
            self.state = SlotSelection::Idle;
        }
    }

    /// The booking dialog closed, whether submitted or cancelled.
    pub fn close(&mut self) {
        if let SlotSelection::Selected(_) = self.state {
            self.state = SlotSelection::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::time_snap::GridMetrics;
    use chrono::{NaiveDateTime, Timelike};
    use pretty_assertions::assert_eq;

    const MONDAY: usize = 1;

    struct Fixture {
        snapper: TimeSnapper,
        table: UnavailabilityTable,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                snapper: TimeSnapper::new(GridMetrics::default(), 30),
                table: UnavailabilityTable::from_entries([(1, vec![13, 14, 15])]).unwrap(),
            }
        }

        fn cx(&self) -> SelectionContext<'_> {
            SelectionContext {
                week_start: NaiveDate::from_ymd_opt(2024, 12, 22).unwrap(),
                snapper: &self.snapper,
                table: &self.table,
            }
        }
    }

    /// Column offset of `hour:minute` with the default 60px hours and 40px header.
    fn y(hour: u32, minute: u32) -> f32 {
        40.0 + ((hour as f32 - 7.0) * 60.0) + minute as f32
    }

    fn monday(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 23)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_hover_over_available_cell() {
        let fx = Fixture::new();
        let mut ctrl = SelectionController::new();

        ctrl.pointer_moved(&fx.cx(), MONDAY, y(10, 5));
        assert_eq!(
            ctrl.state(),
            &SlotSelection::Hovering(HoveredSlot {
                day_index: MONDAY,
                time: monday(10, 0)
            })
        );
    }

    #[test]
    fn test_hover_over_blocked_cell_clears_hover() {
        let fx = Fixture::new();
        let mut ctrl = SelectionController::new();

        ctrl.pointer_moved(&fx.cx(), MONDAY, y(10, 0));
        ctrl.pointer_moved(&fx.cx(), MONDAY, y(14, 0));
        assert_eq!(ctrl.state(), &SlotSelection::Idle);
    }

    #[test]
    fn test_press_starts_drag_with_one_interval() {
        let fx = Fixture::new();
        let mut ctrl = SelectionController::new();

        ctrl.pointer_moved(&fx.cx(), MONDAY, y(9, 0));
        ctrl.pointer_pressed(&fx.cx(), MONDAY, y(9, 0));

        assert_eq!(
            ctrl.state(),
            &SlotSelection::Dragging(Slot::new(MONDAY, monday(9, 0), monday(9, 30)))
        );
        assert!(ctrl.wants_global_release());
    }

    #[test]
    fn test_press_on_blocked_start_is_ignored() {
        let fx = Fixture::new();
        let mut ctrl = SelectionController::new();

        ctrl.pointer_pressed(&fx.cx(), MONDAY, y(12, 30));
        assert_eq!(ctrl.state(), &SlotSelection::Idle);
        assert!(!ctrl.wants_global_release());
    }

    #[test]
    fn test_drag_extension_stops_before_blocked_hours() {
        let fx = Fixture::new();
        let mut ctrl = SelectionController::new();

        ctrl.pointer_pressed(&fx.cx(), MONDAY, y(11, 30));
        ctrl.pointer_moved(&fx.cx(), MONDAY, y(12, 30));
        assert_eq!(ctrl.state().slot().map(|s| s.end), Some(monday(12, 30)));

        // 13:00 and 13:30 both reach the blocked 13:00 hour
        ctrl.pointer_moved(&fx.cx(), MONDAY, y(13, 0));
        assert_eq!(ctrl.state().slot().map(|s| s.end), Some(monday(12, 30)));
        ctrl.pointer_moved(&fx.cx(), MONDAY, y(13, 30));
        assert_eq!(ctrl.state().slot().map(|s| s.end), Some(monday(12, 30)));
    }

    #[test]
    fn test_drag_to_grid_bottom_cannot_skip_blocked_hours() {
        let fx = Fixture::new();
        let mut ctrl = SelectionController::new();

        ctrl.pointer_pressed(&fx.cx(), MONDAY, y(10, 0));
        ctrl.pointer_moved(&fx.cx(), MONDAY, y(12, 30));
        // Bottom edge snaps to 24:00, the next day's midnight
        ctrl.pointer_moved(&fx.cx(), MONDAY, 1055.0);
        ctrl.pointer_released();

        assert_eq!(
            ctrl.state(),
            &SlotSelection::Selected(Slot::new(MONDAY, monday(10, 0), monday(12, 30)))
        );
    }

    #[test]
    fn test_drag_may_end_at_midnight_when_evening_is_free() {
        let fx = Fixture::new();
        let mut ctrl = SelectionController::new();
        let tuesday_midnight = monday(0, 0) + Duration::days(2);

        ctrl.pointer_pressed(&fx.cx(), 2, y(22, 0));
        ctrl.pointer_moved(&fx.cx(), 2, 1055.0);
        assert_eq!(ctrl.state().slot().map(|s| s.end), Some(tuesday_midnight));

        // Nothing past midnight
        ctrl.pointer_moved(&fx.cx(), 2, 1100.0);
        assert_eq!(ctrl.state().slot().map(|s| s.end), Some(tuesday_midnight));
    }

    #[test]
    fn test_press_below_grid_does_not_start_on_next_day() {
        let fx = Fixture::new();
        let mut ctrl = SelectionController::new();

        ctrl.pointer_pressed(&fx.cx(), 6, 1060.0);
        assert_eq!(ctrl.state(), &SlotSelection::Idle);
        ctrl.pointer_moved(&fx.cx(), 6, 1060.0);
        assert_eq!(ctrl.state(), &SlotSelection::Idle);
    }

    #[test]
    fn test_drag_never_moves_end_to_or_before_start() {
        let fx = Fixture::new();
        let mut ctrl = SelectionController::new();

        ctrl.pointer_pressed(&fx.cx(), MONDAY, y(9, 0));
        ctrl.pointer_moved(&fx.cx(), MONDAY, y(9, 0));
        ctrl.pointer_moved(&fx.cx(), MONDAY, y(8, 0));

        let slot = ctrl.state().slot().copied().unwrap();
        assert_eq!(slot.end, monday(9, 30));
        assert!(slot.end > slot.start);
    }

    #[test]
    fn test_drag_over_other_column_extends_on_own_day() {
        let fx = Fixture::new();
        let mut ctrl = SelectionController::new();

        ctrl.pointer_pressed(&fx.cx(), MONDAY, y(9, 0));
        ctrl.pointer_moved(&fx.cx(), 4, y(11, 0));

        let slot = ctrl.state().slot().copied().unwrap();
        assert_eq!(slot.day_index, MONDAY);
        assert_eq!(slot.end, monday(11, 0));
    }

    #[test]
    fn test_release_selects_and_drops_listener() {
        let fx = Fixture::new();
        let mut ctrl = SelectionController::new();

        ctrl.pointer_pressed(&fx.cx(), MONDAY, y(9, 0));
        ctrl.pointer_moved(&fx.cx(), MONDAY, y(10, 0));
        ctrl.pointer_released();

        assert_eq!(
            ctrl.state(),
            &SlotSelection::Selected(Slot::new(MONDAY, monday(9, 0), monday(10, 0)))
        );
        assert!(!ctrl.wants_global_release());
    }

    #[test]
    fn test_selected_state_ignores_pointer_until_closed() {
        let fx = Fixture::new();
        let mut ctrl = SelectionController::new();

        ctrl.pointer_pressed(&fx.cx(), MONDAY, y(9, 0));
        ctrl.pointer_released();
        let selected = *ctrl.state();

        ctrl.pointer_moved(&fx.cx(), 2, y(10, 0));
        ctrl.pointer_pressed(&fx.cx(), 2, y(10, 0));
        ctrl.pointer_left();
        assert_eq!(ctrl.state(), &selected);

        ctrl.close();
        assert_eq!(ctrl.state(), &SlotSelection::Idle);
    }

    #[test]
    fn test_leaving_grid_clears_hover_but_not_drag() {
        let fx = Fixture::new();
        let mut ctrl = SelectionController::new();

        ctrl.pointer_moved(&fx.cx(), MONDAY, y(9, 0));
        ctrl.pointer_left();
        assert_eq!(ctrl.state(), &SlotSelection::Idle);

        ctrl.pointer_pressed(&fx.cx(), MONDAY, y(9, 0));
        ctrl.pointer_left();
        assert!(ctrl.state().is_dragging());
    }

    #[test]
    fn test_release_without_drag_clears_hover() {
        let fx = Fixture::new();
        let mut ctrl = SelectionController::new();

        ctrl.pointer_moved(&fx.cx(), MONDAY, y(9, 0));
        ctrl.pointer_released();
        assert_eq!(ctrl.state(), &SlotSelection::Idle);
    }

    #[test]
    fn test_snapped_times_have_zero_seconds() {
        let fx = Fixture::new();
        let mut ctrl = SelectionController::new();

        ctrl.pointer_pressed(&fx.cx(), 3, y(16, 17));
        let slot = ctrl.state().slot().copied().unwrap();
        assert_eq!(slot.start.second(), 0);
        assert_eq!(slot.start.minute() % 30, 0);
    }
}
