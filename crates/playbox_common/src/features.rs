//! Feature flag handling for the PlayBox gateway.
//!
//! Features are switched at runtime: a feature is live when its `use_*`
//! flag is set and its configuration section is present. The helpers below
//! keep that rule in one place; the gateway binary uses them when deciding
//! which routers to mount.

use playbox_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
///
/// A feature is enabled when its runtime flag is set and its configuration
/// section exists.
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the booking feature is enabled at runtime.
#[cfg(feature = "booking")]
pub fn is_booking_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_booking, config.core_api.as_ref())
}

/// Check if the wallet feature is enabled at runtime.
#[cfg(feature = "wallet")]
pub fn is_wallet_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_wallet, config.core_api.as_ref())
}

/// Check if the identity feature is enabled at runtime.
#[cfg(feature = "identity")]
pub fn is_identity_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_identity, config.core_api.as_ref())
}
