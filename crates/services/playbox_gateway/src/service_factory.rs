// --- File: crates/services/playbox_gateway/src/service_factory.rs ---
//! Central wiring of the shared services the feature routers need.
//!
//! The only cross-feature dependency is the session store: identity opens
//! sessions, booking and wallet resolve them. Building it here keeps one
//! instance behind all three routers.

use playbox_common::services::SessionStore;
use playbox_config::AppConfig;
use playbox_identity::session::InMemorySessionStore;
use std::sync::Arc;

pub struct GatewayServices {
    #[allow(dead_code)]
    pub config: Arc<AppConfig>,
    pub sessions: Arc<dyn SessionStore>,
}

impl GatewayServices {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let sessions: Arc<dyn SessionStore> =
            Arc::new(InMemorySessionStore::from_config(&config));
        Self { config, sessions }
    }
}
