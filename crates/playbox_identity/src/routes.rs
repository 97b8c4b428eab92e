// --- File: crates/playbox_identity/src/routes.rs ---

use crate::client::IdentityApiClient;
use crate::handlers::{
    admin_login_handler, create_user_handler, find_by_phone_handler, list_users_handler,
    logout_handler, profile_handler, send_otp_handler, update_profile_handler,
    verify_otp_handler, IdentityState,
};
use axum::{
    routing::{get, post},
    Router,
};
use playbox_common::services::SessionStore;
use playbox_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the identity feature.
///
/// The session store is owned by the caller so the booking and wallet
/// routers can share it.
pub fn routes(config: Arc<AppConfig>, sessions: Arc<dyn SessionStore>) -> Router {
    let core_api = config
        .core_api
        .as_ref()
        .expect("Core API config missing");
    let identity_state = Arc::new(IdentityState {
        client: Arc::new(IdentityApiClient::from_config(core_api)),
        config,
        sessions,
    });

    Router::new()
        .route("/auth/send-otp", post(send_otp_handler))
        .route("/auth/verify-otp", post(verify_otp_handler))
        .route("/auth/admin/login", post(admin_login_handler))
        .route("/auth/logout", post(logout_handler))
        .route("/me", get(profile_handler).put(update_profile_handler))
        .route("/admin/users", get(list_users_handler).post(create_user_handler))
        .route("/admin/users/phone/{phone}", get(find_by_phone_handler))
        .with_state(identity_state)
}
