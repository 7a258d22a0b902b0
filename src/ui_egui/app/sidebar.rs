//! Sidebar component with host details and mini calendar.

use super::SchedulerApp;
use crate::utils::date::{start_of_month, start_of_week};
use chrono::{Datelike, Duration, Local, NaiveDate};
use egui::RichText;

const SIDEBAR_MIN_WIDTH: f32 = 200.0;
const SIDEBAR_DEFAULT_WIDTH: f32 = 240.0;
const SIDEBAR_MAX_WIDTH: f32 = 320.0;

impl SchedulerApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .default_width(SIDEBAR_DEFAULT_WIDTH)
            .min_width(SIDEBAR_MIN_WIDTH)
            .max_width(SIDEBAR_MAX_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    ui.add_space(8.0);
                    self.render_host_info(ui);
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);
                    self.render_mini_calendar(ui);
                });
            });
    }

    fn render_host_info(&self, ui: &mut egui::Ui) {
        let settings = &self.settings;
        ui.label(RichText::new(&settings.host_name).weak());
        ui.label(RichText::new(&settings.host_subtitle).heading().strong());
        ui.add_space(6.0);
        ui.label(format!("🕑 {}", settings.meeting_duration_label));
        ui.label(format!("📹 {}", settings.meeting_location_label));
        ui.label(format!("🌐 {}", settings.timezone));
    }

    fn render_mini_calendar(&mut self, ui: &mut egui::Ui) {
        let today = Local::now().date_naive();
        let viewing_date = self.calendar_month;

        // Header with month navigation
        ui.horizontal(|ui| {
            if ui.small_button("◀").on_hover_text("Previous month").clicked() {
                self.shift_calendar_month(-1);
            }
            ui.label(RichText::new(viewing_date.format("%B %Y").to_string()).strong());
            if ui.small_button("▶").on_hover_text("Next month").clicked() {
                self.shift_calendar_month(1);
            }
        });

        ui.add_space(4.0);

        let day_names = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
        let marker = self.active_theme.available_marker;

        egui::Grid::new("sidebar_mini_calendar")
            .num_columns(7)
            .spacing([2.0, 2.0])
            .min_col_width(26.0)
            .show(ui, |ui| {
                for name in &day_names {
                    ui.label(RichText::new(*name).small().weak());
                }
                ui.end_row();

                for week in month_grid(viewing_date) {
                    for current in week {
                        let mut text = RichText::new(current.day().to_string());
                        if current.month() != viewing_date.month() {
                            text = text.weak();
                        }
                        if self.available_days.contains(&current) {
                            text = text.strong().background_color(marker);
                        }
                        if current == today {
                            text = text.underline();
                        }

                        let is_selected = self.selected_date == Some(current);
                        if ui.selectable_label(is_selected, text).clicked() {
                            self.select_date(current);
                        }
                    }
                    ui.end_row();
                }
            });
    }
}

/// Rows of the mini calendar: whole Sunday-to-Saturday weeks covering the
/// month of `viewing_date`, padded with days of the adjacent months.
fn month_grid(viewing_date: NaiveDate) -> Vec<[NaiveDate; 7]> {
    let first_of_month = start_of_month(viewing_date);
    let mut current = start_of_week(first_of_month);
    let mut rows = Vec::with_capacity(6);

    while rows.is_empty() || current.month() == viewing_date.month() {
        let row: [NaiveDate; 7] = std::array::from_fn(|i| current + Duration::days(i as i64));
        current += Duration::days(7);
        rows.push(row);
    }
    rows
}
