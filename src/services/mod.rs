// Service module exports

pub mod availability;
pub mod booking;
pub mod settings;
pub mod time_snap;
pub mod week;
