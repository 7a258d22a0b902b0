use crate::ui_egui::theme::SchedulerTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[derive(Clone, Copy)]
pub struct TimeGridPalette {
    pub available_bg: Color32,
    pub unavailable_bg: Color32,
    pub highlight_bg: Color32,
    pub header_bg: Color32,
    pub line: Color32,
    pub header_text: Color32,
    pub axis_text: Color32,
    pub hover_fill: Color32,
    pub hover_stroke: Color32,
    pub hover_text: Color32,
    pub selection_fill: Color32,
    pub selection_stroke: Color32,
    pub selection_text: Color32,
}

impl TimeGridPalette {
    pub fn from_theme(theme: &SchedulerTheme) -> Self {
        Self {
            available_bg: theme.available_background,
            unavailable_bg: theme.unavailable_background,
            highlight_bg: theme.highlight_background,
            header_bg: theme.app_background,
            line: theme.border,
            header_text: theme.text_primary,
            axis_text: theme.text_secondary,
            hover_fill: with_alpha(theme.hover_accent, 50),
            hover_stroke: theme.hover_accent,
            hover_text: if theme.is_dark {
                Color32::from_rgb(191, 219, 254)
            } else {
                Color32::from_rgb(30, 64, 175)
            },
            selection_fill: with_alpha(theme.selection_accent, 50),
            selection_stroke: theme.selection_accent,
            selection_text: if theme.is_dark {
                Color32::from_rgb(187, 247, 208)
            } else {
                Color32::from_rgb(22, 101, 52)
            },
        }
    }
}
