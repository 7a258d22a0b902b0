use super::SchedulerApp;
use crate::models::settings::Settings;
use crate::services::booking::{BookingBackend, LoggingBookingBackend};
use crate::services::settings::SettingsService;
use crate::services::time_snap::{GridMetrics, TimeSnapper};
use crate::services::week::WeekNavigator;
use crate::ui_egui::selection::SelectionController;
use crate::ui_egui::theme::SchedulerTheme;
use crate::ui_egui::views::week_view::WeekViewState;
use crate::ui_egui::views::TimeGridPalette;
use chrono::Local;

impl SchedulerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::from_project_dirs();
        let settings = match &settings_service {
            Some(service) => service.load_or_default(),
            None => {
                log::warn!("No config directory available; settings will not be saved");
                Settings::default()
            }
        };
        log::info!(
            "Loaded settings: theme={}, snap={}min, 24h={}",
            settings.theme,
            settings.snap_interval_minutes,
            settings.use_24_hour
        );

        let app = Self::with_settings(
            settings,
            settings_service,
            Box::new(LoggingBookingBackend),
        );
        app.active_theme.apply_to_context(&cc.egui_ctx);
        app
    }

    /// Build the app state without an egui context.
    pub fn with_settings(
        settings: Settings,
        settings_service: Option<SettingsService>,
        booking_backend: Box<dyn BookingBackend>,
    ) -> Self {
        let today = Local::now().date_naive();
        let week = match settings.initial_week_start {
            Some(start) => WeekNavigator::new(start),
            None => WeekNavigator::containing(today),
        };
        let active_theme = SchedulerTheme::from_name(&settings.theme);
        let palette = TimeGridPalette::from_theme(&active_theme);
        let snapper = TimeSnapper::new(GridMetrics::default(), settings.snap_interval_minutes);

        Self {
            calendar_month: week.week_start(),
            settings,
            settings_service,
            active_theme,
            palette,
            week,
            selected_date: None,
            available_days: Vec::new(),
            snapper,
            selection: SelectionController::new(),
            week_view_state: WeekViewState::default(),
            booking_dialog: None,
            booking_backend,
        }
    }

    pub(super) fn persist_settings(&self) {
        let Some(service) = &self.settings_service else {
            return;
        };
        if let Err(err) = service.save(&self.settings) {
            log::error!("Failed to save settings: {:#}", err);
        }
    }
}
