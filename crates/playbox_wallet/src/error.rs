// --- File: crates/playbox_wallet/src/error.rs ---
use playbox_common::{external_service_error, HttpStatusCode, PlayboxError};
use thiserror::Error;

/// Wallet-specific error types.
#[derive(Error, Debug)]
pub enum WalletError {
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

    /// Amounts must be strictly positive and finite
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    /// A required field was blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Convert WalletError to PlayboxError
impl From<WalletError> for PlayboxError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::RequestError(e) => {
                PlayboxError::HttpError(format!("Core API request error: {}", e))
            }
            WalletError::ApiError {
                status_code,
                message,
            } => external_service_error(
                "Core API",
                format!("Status: {}, Message: {}", status_code, message),
            ),
            WalletError::ParseError(e) => {
                PlayboxError::ParseError(format!("Core API response parse error: {}", e))
            }
            WalletError::ConfigError => {
                PlayboxError::ConfigError("Core API configuration missing or incomplete".to_string())
            }
            WalletError::InvalidAmount(amount) => {
                PlayboxError::ValidationError(format!("Invalid amount: {}", amount))
            }
            WalletError::MissingField(field) => {
                PlayboxError::ValidationError(format!("Missing required field: {}", field))
            }
        }
    }
}

impl HttpStatusCode for WalletError {
    fn status_code(&self) -> u16 {
        match self {
            WalletError::RequestError(_) => 502,
            WalletError::ApiError { status_code, .. } => *status_code,
            WalletError::ParseError(_) => 502,
            WalletError::ConfigError => 500,
            WalletError::InvalidAmount(_) => 400,
            WalletError::MissingField(_) => 400,
        }
    }
}
