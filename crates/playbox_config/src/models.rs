// --- File: crates/playbox_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Upstream Core API Config ---
// The PlayBox core API owns users, slots, bookings and balances. Everything
// this gateway does is a typed call against it.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CoreApiConfig {
    pub base_url: String, // e.g. http://localhost:8080/playbox
    pub timeout_secs: Option<u64>,
}

// --- Booking Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    /// IANA time zone of the facility; slot visibility is computed in it.
    pub time_zone: Option<String>,
    /// Payment mode sent upstream when the request leaves it out.
    pub default_payment_mode: Option<String>,
}

// --- Wallet Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WalletConfig {
    /// Recorded as the acting admin when a top-up request omits one.
    pub default_admin_name: Option<String>,
}

// --- Identity Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IdentityConfig {
    pub session_ttl_minutes: Option<i64>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_booking: bool,
    #[serde(default)]
    pub use_wallet: bool,
    #[serde(default)]
    pub use_identity: bool,

    // --- Feature Configurations ---
    #[serde(default)]
    pub core_api: Option<CoreApiConfig>,
    #[serde(default)]
    pub booking: Option<BookingConfig>,
    #[serde(default)]
    pub wallet: Option<WalletConfig>,
    #[serde(default)]
    pub identity: Option<IdentityConfig>,
}
