//! Week grid rendering and pointer routing.
//!
//! Draws a time axis plus seven day columns (day header, then one cell per
//! displayed hour), forwards pointer activity to the [`SelectionController`]
//! and paints the hover preview and the dragged/selected slot on top.

use chrono::{Datelike, NaiveDate};
use egui::{Align2, CursorIcon, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::TimeGridPalette;
use super::WeekViewResponse;
use crate::models::availability::UnavailabilityTable;
use crate::models::slot::SlotSelection;
use crate::services::availability::AvailabilityService;
use crate::services::time_snap::{GridMetrics, TimeSnapper};
use crate::services::week::{WeekNavigator, DAYS_PER_WEEK};
use crate::ui_egui::selection::{SelectionContext, SelectionController};
use crate::utils::date::{format_hour_label, format_time, start_of_week};

const TIME_AXIS_WIDTH: f32 = 64.0;
const MIN_COLUMN_WIDTH: f32 = 80.0;
const DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Inputs the host passes down each frame.
pub struct WeekViewProps<'a> {
    pub week_start: NaiveDate,
    /// Date picked in the mini calendar, tinted in the grid.
    pub selected_date: Option<NaiveDate>,
    pub use_24_hour: bool,
    pub snapper: &'a TimeSnapper,
    pub table: &'a UnavailabilityTable,
    pub palette: &'a TimeGridPalette,
}

/// What the view has already reported to its host, plus a pending
/// mini-calendar jump.
#[derive(Debug, Default)]
pub struct WeekViewState {
    availability_reported_for: Option<NaiveDate>,
    pending_jump: Option<NaiveDate>,
}

impl WeekViewState {
    /// Ask for the week containing `date` on the next frame. Every call
    /// counts, even for the date already selected.
    pub fn request_jump(&mut self, date: NaiveDate) {
        self.pending_jump = Some(date);
    }

    /// Work out which host notifications are due for these props.
    pub fn pending_notifications(
        &mut self,
        week_start: NaiveDate,
        snapper: &TimeSnapper,
        table: &UnavailabilityTable,
    ) -> WeekViewResponse {
        let mut response = WeekViewResponse::default();

        if let Some(date) = self.pending_jump.take() {
            let target = start_of_week(date);
            if target != week_start {
                response.week_change = Some(target);
            }
        }

        if self.availability_reported_for != Some(week_start) {
            let dates = WeekNavigator::new(week_start).visible_dates();
            let available =
                AvailabilityService::new(table).available_days(&dates, snapper.metrics().hours());
            log::debug!(
                "{} of 7 days from {} have open slots",
                available.len(),
                week_start
            );
            response.available_days = Some(available);
            self.availability_reported_for = Some(week_start);
        }

        response
    }
}

pub struct WeekView;

impl WeekView {
    pub fn show(
        ui: &mut egui::Ui,
        props: &WeekViewProps<'_>,
        state: &mut WeekViewState,
        selection: &mut SelectionController,
    ) -> WeekViewResponse {
        let response = state.pending_notifications(props.week_start, props.snapper, props.table);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .drag_to_scroll(false)
            .show(ui, |scroll_ui| {
                Self::render_grid(scroll_ui, props, selection);
            });

        response
    }

    fn render_grid(ui: &mut egui::Ui, props: &WeekViewProps<'_>, selection: &mut SelectionController) {
        let metrics = *props.snapper.metrics();
        let dates = WeekNavigator::new(props.week_start).visible_dates();
        let availability = AvailabilityService::new(props.table);

        let col_width =
            ((ui.available_width() - TIME_AXIS_WIDTH) / DAYS_PER_WEEK as f32).max(MIN_COLUMN_WIDTH);
        let grid_size = Vec2::new(
            TIME_AXIS_WIDTH + col_width * DAYS_PER_WEEK as f32,
            metrics.column_height(),
        );
        let (grid_rect, _) = ui.allocate_exact_size(grid_size, Sense::hover());

        Self::draw_time_axis(ui, grid_rect, &metrics, props);

        let mut pointer_column: Option<(usize, Rect)> = None;
        let mut columns = Vec::with_capacity(DAYS_PER_WEEK);

        for (day_index, date) in dates.iter().enumerate() {
            let col_rect = Rect::from_min_size(
                Pos2::new(
                    grid_rect.left() + TIME_AXIS_WIDTH + day_index as f32 * col_width,
                    grid_rect.top(),
                ),
                Vec2::new(col_width, metrics.column_height()),
            );
            let col_response = ui.interact(
                col_rect,
                ui.id().with(("week_column", day_index)),
                Sense::click_and_drag(),
            );

            Self::draw_day_column(ui, col_rect, *date, &metrics, &availability, props);

            if col_response.contains_pointer() {
                pointer_column = Some((day_index, col_rect));
            }
            columns.push(col_rect);
        }

        Self::route_pointer(ui, props, selection, pointer_column);
        Self::draw_selection_overlays(ui, &columns, &metrics, props, selection.state());
    }

    fn route_pointer(
        ui: &egui::Ui,
        props: &WeekViewProps<'_>,
        selection: &mut SelectionController,
        pointer_column: Option<(usize, Rect)>,
    ) {
        let cx = SelectionContext {
            week_start: props.week_start,
            snapper: props.snapper,
            table: props.table,
        };
        let (pointer_pos, pressed) =
            ui.input(|i| (i.pointer.latest_pos(), i.pointer.primary_pressed()));

        match (pointer_column, pointer_pos) {
            (Some((day_index, rect)), Some(pos)) => {
                let offset_y = pos.y - rect.top();
                if pressed {
                    selection.pointer_pressed(&cx, day_index, offset_y);
                } else {
                    selection.pointer_moved(&cx, day_index, offset_y);
                }

                if matches!(
                    selection.state(),
                    SlotSelection::Hovering(_) | SlotSelection::Dragging(_)
                ) {
                    ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
                }
            }
            _ => selection.pointer_left(),
        }
    }

    fn draw_time_axis(
        ui: &egui::Ui,
        grid_rect: Rect,
        metrics: &GridMetrics,
        props: &WeekViewProps<'_>,
    ) {
        let painter = ui.painter();
        for (row, hour) in metrics.hours().enumerate() {
            let y = grid_rect.top() + metrics.header_height + row as f32 * metrics.hour_height;
            painter.text(
                Pos2::new(grid_rect.left() + 8.0, y + 2.0),
                Align2::LEFT_TOP,
                format_hour_label(hour, props.use_24_hour),
                FontId::proportional(11.0),
                props.palette.axis_text,
            );
            painter.line_segment(
                [
                    Pos2::new(grid_rect.left(), y),
                    Pos2::new(grid_rect.left() + TIME_AXIS_WIDTH, y),
                ],
                Stroke::new(1.0, props.palette.line),
            );
        }
        painter.line_segment(
            [
                Pos2::new(grid_rect.left() + TIME_AXIS_WIDTH, grid_rect.top()),
                Pos2::new(grid_rect.left() + TIME_AXIS_WIDTH, grid_rect.bottom()),
            ],
            Stroke::new(1.0, props.palette.line),
        );
    }

    fn draw_day_column(
        ui: &egui::Ui,
        col_rect: Rect,
        date: NaiveDate,
        metrics: &GridMetrics,
        availability: &AvailabilityService<'_>,
        props: &WeekViewProps<'_>,
    ) {
        let painter = ui.painter();
        let palette = props.palette;
        let is_selected_date = props.selected_date == Some(date);

        // Day header
        let header_rect = Rect::from_min_size(
            col_rect.min,
            Vec2::new(col_rect.width(), metrics.header_height),
        );
        painter.rect_filled(header_rect, 0.0, palette.header_bg);
        painter.text(
            header_rect.center(),
            Align2::CENTER_CENTER,
            format!(
                "{} {}",
                DAY_NAMES[date.weekday().num_days_from_sunday() as usize],
                date.day()
            ),
            FontId::proportional(12.0),
            palette.header_text,
        );

        // Hour cells
        for (row, hour) in metrics.hours().enumerate() {
            let cell_rect = Rect::from_min_size(
                Pos2::new(
                    col_rect.left(),
                    header_rect.bottom() + row as f32 * metrics.hour_height,
                ),
                Vec2::new(col_rect.width(), metrics.hour_height),
            );
            let fill = if !availability.is_hour_available(date, hour) {
                palette.unavailable_bg
            } else if is_selected_date {
                palette.highlight_bg
            } else {
                palette.available_bg
            };
            painter.rect_filled(cell_rect, 0.0, fill);
            painter.line_segment(
                [cell_rect.left_bottom(), cell_rect.right_bottom()],
                Stroke::new(1.0, palette.line),
            );
        }

        painter.line_segment(
            [header_rect.left_bottom(), header_rect.right_bottom()],
            Stroke::new(1.0, palette.line),
        );
        painter.line_segment(
            [col_rect.right_top(), col_rect.right_bottom()],
            Stroke::new(1.0, palette.line),
        );
    }

    fn draw_selection_overlays(
        ui: &egui::Ui,
        columns: &[Rect],
        metrics: &GridMetrics,
        props: &WeekViewProps<'_>,
        state: &SlotSelection,
    ) {
        let painter = ui.painter();
        let palette = props.palette;

        if let Some(hovered) = state.hovered() {
            if let Some(col_rect) = columns.get(hovered.day_index) {
                let top = col_rect.top() + metrics.offset_for_time(hovered.time.time());
                let rect = Rect::from_min_size(
                    Pos2::new(col_rect.left(), top),
                    Vec2::new(col_rect.width(), metrics.hour_height),
                );
                painter.rect_filled(rect, 2.0, palette.hover_fill);
                painter.rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_stroke));
                painter.text(
                    rect.left_top() + Vec2::new(8.0, 4.0),
                    Align2::LEFT_TOP,
                    format_time(hovered.time.time(), props.use_24_hour),
                    FontId::proportional(11.0),
                    palette.hover_text,
                );
            }
        }

        if let Some(slot) = state.slot() {
            if let Some(col_rect) = columns.get(slot.day_index) {
                let top = col_rect.top() + metrics.offset_for_time(slot.start.time());
                let rect = Rect::from_min_size(
                    Pos2::new(col_rect.left(), top),
                    Vec2::new(col_rect.width(), metrics.height_for(slot.duration())),
                );
                painter.rect_filled(rect, 2.0, palette.selection_fill);
                painter.rect_stroke(rect, 2.0, Stroke::new(2.0, palette.selection_stroke));
                painter.text(
                    rect.left_top() + Vec2::new(8.0, 4.0),
                    Align2::LEFT_TOP,
                    format!(
                        "{} - {}",
                        format_time(slot.start.time(), props.use_24_hour),
                        format_time(slot.end.time(), props.use_24_hour)
                    ),
                    FontId::proportional(11.0),
                    palette.selection_text,
                );
            }
        }
    }
}
