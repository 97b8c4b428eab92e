// --- File: crates/playbox_identity/src/error.rs ---
use playbox_common::{external_service_error, HttpStatusCode, PlayboxError};
use thiserror::Error;

/// Identity-specific error types.
#[derive(Error, Debug)]
pub enum IdentityError {
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

    /// Phone numbers must be dialable
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// A required field was blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Convert IdentityError to PlayboxError
impl From<IdentityError> for PlayboxError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::RequestError(e) => {
                PlayboxError::HttpError(format!("Core API request error: {}", e))
            }
            IdentityError::ApiError {
                status_code,
                message,
            } => external_service_error(
                "Core API",
                format!("Status: {}, Message: {}", status_code, message),
            ),
            IdentityError::ParseError(e) => {
                PlayboxError::ParseError(format!("Core API response parse error: {}", e))
            }
            IdentityError::ConfigError => {
                PlayboxError::ConfigError("Core API configuration missing or incomplete".to_string())
            }
            IdentityError::InvalidPhone(msg) => {
                PlayboxError::ValidationError(format!("Invalid phone number: {}", msg))
            }
            IdentityError::MissingField(field) => {
                PlayboxError::ValidationError(format!("Missing required field: {}", field))
            }
        }
    }
}

impl HttpStatusCode for IdentityError {
    fn status_code(&self) -> u16 {
        match self {
            IdentityError::RequestError(_) => 502,
            IdentityError::ApiError { status_code, .. } => *status_code,
            IdentityError::ParseError(_) => 502,
            IdentityError::ConfigError => 500,
            IdentityError::InvalidPhone(_) => 400,
            IdentityError::MissingField(_) => 400,
        }
    }
}
