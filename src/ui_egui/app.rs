mod header;
mod lifecycle;
mod navigation;
mod sidebar;

use crate::models::settings::Settings;
use crate::services::booking::BookingBackend;
use crate::services::settings::SettingsService;
use crate::services::time_snap::TimeSnapper;
use crate::services::week::WeekNavigator;
use crate::ui_egui::booking_dialog::{render_booking_dialog, BookingDialogResult, BookingDialogState};
use crate::ui_egui::selection::SelectionController;
use crate::ui_egui::theme::SchedulerTheme;
use crate::ui_egui::views::week_view::{WeekView, WeekViewProps, WeekViewState};
use crate::ui_egui::views::{TimeGridPalette, WeekViewResponse};
use chrono::NaiveDate;

pub struct SchedulerApp {
    /// Persisted configuration, including the unavailability table
    settings: Settings,
    /// Where settings are written back; None when no config dir exists
    settings_service: Option<SettingsService>,
    /// Currently applied theme colors
    active_theme: SchedulerTheme,
    palette: TimeGridPalette,
    week: WeekNavigator,
    /// Date picked in the mini calendar
    selected_date: Option<NaiveDate>,
    /// Any date in the month the mini calendar shows
    calendar_month: NaiveDate,
    /// Days of the displayed week with open hours, as last reported
    available_days: Vec<NaiveDate>,
    snapper: TimeSnapper,
    selection: SelectionController,
    week_view_state: WeekViewState,
    booking_dialog: Option<BookingDialogState>,
    booking_backend: Box<dyn BookingBackend>,
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}

impl SchedulerApp {
    fn handle_update(&mut self, ctx: &egui::Context) {
        self.render_header(ctx);
        self.render_sidebar(ctx);

        let response = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let props = WeekViewProps {
                    week_start: self.week.week_start(),
                    selected_date: self.selected_date,
                    use_24_hour: self.settings.use_24_hour,
                    snapper: &self.snapper,
                    table: &self.settings.unavailable_hours,
                    palette: &self.palette,
                };
                WeekView::show(ui, &props, &mut self.week_view_state, &mut self.selection)
            })
            .inner;

        if self.apply_week_view_response(response) {
            ctx.request_repaint();
        }

        // A drag may end anywhere in the window, not just over the grid.
        if self.selection.wants_global_release() && ctx.input(|i| i.pointer.any_released()) {
            self.selection.pointer_released();
        }

        self.render_booking(ctx);
    }

    /// Returns true when the displayed week moved.
    fn apply_week_view_response(&mut self, response: WeekViewResponse) -> bool {
        if let Some(days) = response.available_days {
            self.available_days = days;
        }

        match response.week_change {
            Some(target) => match self.week.jump_to_week_containing(target) {
                Some(start) => {
                    log::info!("Showing week of {}", start);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    fn render_booking(&mut self, ctx: &egui::Context) {
        let Some(slot) = self.selection.state().selected().copied() else {
            self.booking_dialog = None;
            return;
        };

        let state = self.booking_dialog.get_or_insert_with(BookingDialogState::new);
        let result = render_booking_dialog(
            ctx,
            state,
            slot,
            self.settings.use_24_hour,
            self.booking_backend.as_ref(),
        );

        match result {
            BookingDialogResult::Open => {}
            BookingDialogResult::Submitted | BookingDialogResult::Cancelled => {
                log::debug!("Booking dialog closed: {:?}", result);
                self.booking_dialog = None;
                self.selection.close();
            }
        }
    }
}
