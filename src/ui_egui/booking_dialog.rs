use crate::models::booking::{BookingForm, BookingRequest};
use crate::models::slot::Slot;
use crate::services::booking::BookingBackend;
use crate::utils::date::format_slot_range;
use egui::{Color32, RichText};

const FORM_LABEL_WIDTH: f32 = 60.0;

/// State for the booking dialog. Created when a slot is selected and
/// dropped when the dialog closes.
#[derive(Debug, Default)]
pub struct BookingDialogState {
    pub form: BookingForm,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingDialogResult {
    Open,
    Submitted,
    Cancelled,
}

impl BookingDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editing the email dismisses the last error.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Validate the form and hand the request to `backend`.
    ///
    /// On failure the message is kept in `error_message` and the dialog
    /// should stay open.
    pub fn submit(&mut self, slot: Slot, backend: &dyn BookingBackend) -> Option<BookingRequest> {
        let request = match self.form.to_request(slot) {
            Ok(request) => request,
            Err(err) => {
                self.error_message = Some(err.to_string());
                return None;
            }
        };

        match backend.submit(&request) {
            Ok(()) => {
                self.error_message = None;
                Some(request)
            }
            Err(err) => {
                log::error!("Booking submission failed: {:#}", err);
                self.error_message = Some(format!("Failed to schedule: {}", err));
                None
            }
        }
    }
}

pub fn render_booking_dialog(
    ctx: &egui::Context,
    state: &mut BookingDialogState,
    slot: Slot,
    use_24_hour: bool,
    backend: &dyn BookingBackend,
) -> BookingDialogResult {
    let mut result = BookingDialogResult::Open;
    let mut dialog_open = true;

    egui::Window::new("Schedule Appointment")
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(ref error) = state.error_message {
                ui.colored_label(Color32::RED, RichText::new(error).strong());
                ui.add_space(8.0);
            }

            labeled_row(ui, "Name", |ui| {
                ui.add(egui::TextEdit::singleline(&mut state.form.name).desired_width(260.0));
            });
            labeled_row(ui, "Email", |ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.form.email)
                        .hint_text("name@example.com")
                        .desired_width(260.0),
                );
                if response.changed() {
                    state.clear_error();
                }
            });
            labeled_row(ui, "Time", |ui| {
                ui.label(format_slot_range(slot.start, slot.end, use_24_hour));
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let schedule_button =
                    egui::Button::new("Schedule").fill(Color32::from_rgb(70, 120, 200));
                if ui.add(schedule_button).clicked() && state.submit(slot, backend).is_some() {
                    result = BookingDialogResult::Submitted;
                }
                if ui.button("Cancel").clicked() {
                    result = BookingDialogResult::Cancelled;
                }
            });
        });

    if !dialog_open && result == BookingDialogResult::Open {
        result = BookingDialogResult::Cancelled;
    }

    result
}

fn labeled_row(ui: &mut egui::Ui, label: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [FORM_LABEL_WIDTH, 20.0],
            egui::Label::new(RichText::new(label).strong()),
        );
        add_contents(ui);
    });
    ui.add_space(4.0);
}
