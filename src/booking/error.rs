//! Booking error types

use serde::Serialize;
use thiserror::Error;

use super::form::BookingField;

/// Why a calendar date cannot be picked
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRejection {
    #[error("date is in the past")]
    Past,

    #[error("sessions are not offered on weekends")]
    Weekend,
}

/// Errors produced while filling in the booking form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Date {date} cannot be selected: {reason}")]
    InvalidDate {
        date: chrono::NaiveDate,
        reason: DateRejection,
    },

    #[error("Unknown time slot: {0}")]
    UnknownTimeSlot(String),

    #[error("Unknown session type: {0}")]
    UnknownSessionType(String),

    #[error("Counselor not found: {0}")]
    CounselorNotFound(String),

    #[error("Counselor is not available: {0}")]
    CounselorUnavailable(String),

    #[error("Booking is incomplete, missing: {}", format_fields(.0))]
    Incomplete(Vec<BookingField>),
}

fn format_fields(fields: &[BookingField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for booking operations
pub type BookingResult<T> = Result<T, BookingError>;
