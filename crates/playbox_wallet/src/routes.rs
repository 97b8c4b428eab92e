// --- File: crates/playbox_wallet/src/routes.rs ---

use crate::client::WalletApiClient;
use crate::handlers::{
    assign_card_handler, cancel_card_handler, deduct_handler, scan_card_handler,
    top_up_handler, transactions_handler, WalletState,
};
use axum::{
    routing::{get, post},
    Router,
};
use playbox_common::services::SessionStore;
use playbox_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the wallet feature.
/// Every route requires an admin session.
pub fn routes(config: Arc<AppConfig>, sessions: Arc<dyn SessionStore>) -> Router {
    let core_api = config
        .core_api
        .as_ref()
        .expect("Core API config missing");
    let wallet_state = Arc::new(WalletState {
        client: Arc::new(WalletApiClient::from_config(core_api)),
        config,
        sessions,
    });

    Router::new()
        .route("/rfid/scan", post(scan_card_handler))
        .route("/wallet/top-up", post(top_up_handler))
        .route("/wallet/deduct", post(deduct_handler))
        .route("/wallet/cancel-card", post(cancel_card_handler))
        .route("/wallet/assign-card", post(assign_card_handler))
        .route("/wallet/transactions", get(transactions_handler))
        .with_state(wallet_state)
}
