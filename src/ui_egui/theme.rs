//! Theme module for the scheduler
//!
//! Defines the SchedulerTheme structure and resolves the configured theme
//! name (including "system") to concrete colors.

use egui::Color32;

/// Colors used by the week grid, sidebar and dialogs
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulerTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Hour cell background when the hour can be booked
    pub available_background: Color32,

    /// Hour cell background when the hour is blocked
    pub unavailable_background: Color32,

    /// Grid lines and panel borders
    pub border: Color32,

    /// Column tint for the date picked in the mini calendar
    pub highlight_background: Color32,

    /// Hover preview outline
    pub hover_accent: Color32,

    /// Dragged/selected slot outline
    pub selection_accent: Color32,

    /// Mini calendar marker for days with open slots
    pub available_marker: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (labels, hour axis)
    pub text_secondary: Color32,
}

impl SchedulerTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            available_background: Color32::from_rgb(255, 255, 255),
            unavailable_background: Color32::from_rgb(228, 228, 231),
            border: Color32::from_rgb(220, 220, 220),
            highlight_background: Color32::from_rgb(230, 240, 255),
            hover_accent: Color32::from_rgb(59, 130, 246),
            selection_accent: Color32::from_rgb(34, 197, 94),
            available_marker: Color32::from_rgb(187, 247, 208),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(24, 24, 27),
            available_background: Color32::from_rgb(28, 28, 31),
            unavailable_background: Color32::from_rgb(39, 39, 42),
            border: Color32::from_rgb(39, 39, 42),
            highlight_background: Color32::from_rgb(45, 45, 50),
            hover_accent: Color32::from_rgb(59, 130, 246),
            selection_accent: Color32::from_rgb(34, 197, 94),
            available_marker: Color32::from_rgb(22, 60, 38),
            text_primary: Color32::from_rgb(244, 244, 245),
            text_secondary: Color32::from_rgb(161, 161, 170),
        }
    }

    /// Resolve a settings theme name. "system" follows the OS preference.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "system" => match dark_light::detect() {
                dark_light::Mode::Light => Self::light(),
                dark_light::Mode::Dark | dark_light::Mode::Default => Self::dark(),
            },
            _ => Self::dark(),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
