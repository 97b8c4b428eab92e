// --- File: crates/playbox_booking/src/error.rs ---
use playbox_common::{external_service_error, HttpStatusCode, PlayboxError};
use playbox_common::models::Slot;
use thiserror::Error;

/// Booking-specific error types.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Transport-level failure talking to the core API
    #[error("Core API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The core API rejected the request (non-2xx)
    #[error("Core API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// The core API answered with a body this gateway cannot interpret
    #[error("Failed to parse core API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete core API configuration
    #[error("Core API configuration missing or incomplete")]
    ConfigError,

    /// A date parameter was not a valid YYYY-MM-DD calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The chosen slot cannot be booked any more. Carries the availability
    /// re-fetched after the failed attempt so callers can render accurate
    /// state without another round-trip.
    #[error("Slot no longer available: {message}")]
    SlotUnavailable { message: String, slots: Vec<Slot> },
}

impl BookingError {
    /// True for rejections that mean "someone else got there first".
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            BookingError::SlotUnavailable { .. }
                | BookingError::ApiError {
                    status_code: 409,
                    ..
                }
        )
    }
}

/// Convert BookingError to PlayboxError
impl From<BookingError> for PlayboxError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::RequestError(e) => {
                PlayboxError::HttpError(format!("Core API request error: {}", e))
            }
            BookingError::ApiError {
                status_code,
                message,
            } => external_service_error(
                "Core API",
                format!("Status: {}, Message: {}", status_code, message),
            ),
            BookingError::ParseError(e) => {
                PlayboxError::ParseError(format!("Core API response parse error: {}", e))
            }
            BookingError::ConfigError => {
                PlayboxError::ConfigError("Core API configuration missing or incomplete".to_string())
            }
            BookingError::InvalidDate(msg) => PlayboxError::ValidationError(msg),
            BookingError::SlotUnavailable { message, .. } => PlayboxError::ConflictError(message),
        }
    }
}

/// HTTP status mapping for booking errors.
impl HttpStatusCode for BookingError {
    fn status_code(&self) -> u16 {
        match self {
            BookingError::RequestError(_) => 502,
            BookingError::ApiError { status_code, .. } => *status_code,
            BookingError::ParseError(_) => 502,
            BookingError::ConfigError => 500,
            BookingError::InvalidDate(_) => 400,
            BookingError::SlotUnavailable { .. } => 409,
        }
    }
}
