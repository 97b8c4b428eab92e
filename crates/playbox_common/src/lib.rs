// --- File: crates/playbox_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;    // Error handling
pub mod features; // Feature flag handling
pub mod http;     // HTTP utilities
pub mod logging;  // Logging utilities
pub mod models;   // Shared domain models
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    auth_error,
    config_error,
    conflict,
    external_service_error,
    internal_error,
    not_found,
    validation_error,
    Context,
    HttpStatusCode,
    PlayboxError,
};

// Re-export HTTP utilities for easier access
pub use http::{
    bearer_token,
    client::{create_client, get, post, put, delete, HTTP_CLIENT},
    handle_json_result,
    map_json_error,
    IntoHttpResponse,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_error, log_result};

// Re-export feature flag handling utilities for easier access
pub use features::is_feature_enabled;

#[cfg(feature = "booking")]
pub use features::is_booking_enabled;

#[cfg(feature = "wallet")]
pub use features::is_wallet_enabled;

#[cfg(feature = "identity")]
pub use features::is_identity_enabled;
