//! Booking form model.
//!
//! Holds the name/email pair collected by the booking dialog and the
//! request value handed to a booking backend on submit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::slot::Slot;

/// Validation errors for the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingFormError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Fields of the booking dialog. Lives only as long as the dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the email field the way an HTML `type=email` input does:
    /// empty is accepted, anything else must look like `local@domain`.
    pub fn validate(&self) -> Result<(), BookingFormError> {
        let email = self.email.trim();
        if email.is_empty() || is_email_shaped(email) {
            Ok(())
        } else {
            Err(BookingFormError::InvalidEmail)
        }
    }

    /// Validate and combine with the chosen slot.
    pub fn to_request(&self, slot: Slot) -> Result<BookingRequest, BookingFormError> {
        self.validate()?;
        Ok(BookingRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            slot,
        })
    }
}

fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Payload delivered to a booking backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub slot: Slot,
}
