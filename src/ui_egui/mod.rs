mod app;
pub mod booking_dialog;
pub mod selection;
pub mod theme;
mod views;

pub use app::SchedulerApp;
pub use views::week_view::{WeekViewProps, WeekViewState};
pub use views::WeekViewResponse;
