// --- File: crates/playbox_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all PlayBox gateway errors.
///
/// This enum provides a common set of error variants that can be used across all crates.
/// Each feature crate extends this by implementing From<SpecificError> for PlayboxError.
#[derive(Error, Debug)]
pub enum PlayboxError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during authentication or authorization
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during an upstream core API call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict (e.g., slot already booked)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to a timeout
    #[error("Timeout: {0}")]
    TimeoutError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for PlayboxError {
    fn status_code(&self) -> u16 {
        match self {
            PlayboxError::HttpError(_) => 502,
            PlayboxError::ParseError(_) => 502,
            PlayboxError::ConfigError(_) => 500,
            PlayboxError::AuthError(_) => 401,
            PlayboxError::ValidationError(_) => 400,
            PlayboxError::ExternalServiceError { .. } => 502,
            PlayboxError::ConflictError(_) => 409,
            PlayboxError::NotFoundError(_) => 404,
            PlayboxError::TimeoutError(_) => 504,
            PlayboxError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, PlayboxError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, PlayboxError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, PlayboxError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| PlayboxError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, PlayboxError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| PlayboxError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<reqwest::Error> for PlayboxError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PlayboxError::TimeoutError(err.to_string())
        } else {
            PlayboxError::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PlayboxError {
    fn from(err: serde_json::Error) -> Self {
        PlayboxError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for PlayboxError {
    fn from(err: std::io::Error) -> Self {
        PlayboxError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> PlayboxError {
    PlayboxError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> PlayboxError {
    PlayboxError::ValidationError(message.to_string())
}

pub fn auth_error<T: fmt::Display>(message: T) -> PlayboxError {
    PlayboxError::AuthError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> PlayboxError {
    PlayboxError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> PlayboxError {
    PlayboxError::ConflictError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> PlayboxError {
    PlayboxError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> PlayboxError {
    PlayboxError::InternalError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(conflict("slot already booked").status_code(), 409);
        assert_eq!(auth_error("missing token").status_code(), 401);
        assert_eq!(validation_error("bad date").status_code(), 400);
        assert_eq!(not_found("no such slot").status_code(), 404);
        assert_eq!(
            external_service_error("core-api", "boom").status_code(),
            502
        );
    }

    #[test]
    fn context_wraps_foreign_errors() {
        let io: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        let err = io.context("reading config").unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
