//! Booking submission seam.
//!
//! The booking dialog hands a [`BookingRequest`] to a [`BookingBackend`].
//! No storage backend ships with the application; the default backend only
//! logs the request.

use anyhow::{Context, Result};

use crate::models::booking::BookingRequest;

#[cfg_attr(test, mockall::automock)]
pub trait BookingBackend {
    fn submit(&self, request: &BookingRequest) -> Result<()>;
}

/// Writes each request to the log and reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingBookingBackend;

impl BookingBackend for LoggingBookingBackend {
    fn submit(&self, request: &BookingRequest) -> Result<()> {
        let payload =
            serde_json::to_string(request).context("Failed to serialize booking request")?;
        log::info!("Scheduling: {}", payload);
        Ok(())
    }
}
