//! Calendar header: day-step arrows, week range label and clock toggle.

use super::SchedulerApp;
use egui::RichText;

impl SchedulerApp {
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("calendar_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(self.week.range_label()).heading().strong());
                ui.add_space(12.0);

                if ui.button("◀").on_hover_text("Previous day").clicked() {
                    self.shift_week_start(-1);
                }
                if ui.button("▶").on_hover_text("Next day").clicked() {
                    self.shift_week_start(1);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut use_24_hour = self.settings.use_24_hour;
                    // right_to_left: "24h" is laid out first so "12h" ends up on the left
                    ui.selectable_value(&mut use_24_hour, true, "24h");
                    ui.selectable_value(&mut use_24_hour, false, "12h");
                    self.set_use_24_hour(use_24_hour);
                });
            });
            ui.add_space(6.0);
        });
    }
}
