//! Slot selection model.
//!
//! A [`Slot`] is a contiguous interval on one day of the displayed week.
//! [`SlotSelection`] is the tagged state of the week grid's pointer
//! interaction; transitions live in `ui_egui::selection`.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A proposed booking interval on one column of the week grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Column index within the displayed week (0 = first day).
    pub day_index: usize,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Slot {
    pub fn new(day_index: usize, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            day_index,
            start,
            end,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Snapped pointer position over an available cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoveredSlot {
    pub day_index: usize,
    pub time: NaiveDateTime,
}

/// Pointer interaction state of the week grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotSelection {
    #[default]
    Idle,
    Hovering(HoveredSlot),
    Dragging(Slot),
    /// Drag finished; the booking dialog is open for this slot.
    Selected(Slot),
}

impl SlotSelection {
    pub fn hovered(&self) -> Option<&HoveredSlot> {
        match self {
            Self::Hovering(hovered) => Some(hovered),
            _ => None,
        }
    }

    /// The slot being dragged or awaiting booking.
    pub fn slot(&self) -> Option<&Slot> {
        match self {
            Self::Dragging(slot) | Self::Selected(slot) => Some(slot),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn selected(&self) -> Option<&Slot> {
        match self {
            Self::Selected(slot) => Some(slot),
            _ => None,
        }
    }
}
