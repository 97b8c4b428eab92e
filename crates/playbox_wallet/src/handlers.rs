// File: crates/playbox_wallet/src/handlers.rs
use crate::client::WalletApiClient;
use crate::error::WalletError;
use crate::logic::{
    assign_card, cancel_card, deduct, recent_transactions, scan_card, top_up, AssignCardRequest,
    BalanceResponse, CancelCardRequest, DeductRequest, ScanRequest, TopUpRequest,
    TransactionListResponse, TransactionQuery,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use http::HeaderMap;
use playbox_common::models::ScanOutcome;
use playbox_common::services::{require_admin, SessionStore};
use playbox_common::HttpStatusCode;
use playbox_config::AppConfig;
use std::sync::Arc;
use tracing::info;

// Shared state for the wallet handlers
#[derive(Clone)]
pub struct WalletState {
    pub config: Arc<AppConfig>,
    pub client: Arc<WalletApiClient>,
    pub sessions: Arc<dyn SessionStore>,
}

fn error_response(err: WalletError) -> (StatusCode, String) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string())
}

fn admin_guard(
    state: &WalletState,
    headers: &HeaderMap,
) -> Result<(), (StatusCode, String)> {
    require_admin(state.sessions.as_ref(), headers)
        .map(|_| ())
        .map_err(|e| (StatusCode::UNAUTHORIZED, e.to_string()))
}

/// Handler for an RFID card scan at the admin console.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/rfid/scan", // Path relative to /api
    request_body = ScanRequest,
    responses(
        (status = 200, description = "Card resolved", body = ScanOutcome),
        (status = 401, description = "Admin session required"),
        (status = 502, description = "Core API unreachable")
    ),
    tag = "Wallet"
))]
pub async fn scan_card_handler(
    State(state): State<Arc<WalletState>>,
    headers: HeaderMap,
    Json(payload): Json<ScanRequest>,
) -> Result<Json<ScanOutcome>, (StatusCode, String)> {
    if !state.config.use_wallet {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Wallet service is disabled.".to_string(),
        ));
    }
    admin_guard(&state, &headers)?;

    match scan_card(state.client.as_ref(), payload).await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(e) => {
            info!("Error scanning card: {}", e);
            Err(error_response(e))
        }
    }
}

/// Handler to add balance to an Elite Card.
#[axum::debug_handler]
pub async fn top_up_handler(
    State(state): State<Arc<WalletState>>,
    headers: HeaderMap,
    Json(payload): Json<TopUpRequest>,
) -> Result<Json<BalanceResponse>, (StatusCode, String)> {
    admin_guard(&state, &headers)?;

    match top_up(state.client.as_ref(), &state.config, payload).await {
        Ok(account) => Ok(Json(BalanceResponse {
            success: true,
            message: "Balance added.".to_string(),
            account,
        })),
        Err(e) => {
            info!("Error adding balance: {}", e);
            Err(error_response(e))
        }
    }
}

/// Handler to deduct balance from an Elite Card.
#[axum::debug_handler]
pub async fn deduct_handler(
    State(state): State<Arc<WalletState>>,
    headers: HeaderMap,
    Json(payload): Json<DeductRequest>,
) -> Result<Json<BalanceResponse>, (StatusCode, String)> {
    admin_guard(&state, &headers)?;

    match deduct(state.client.as_ref(), payload).await {
        Ok(account) => Ok(Json(BalanceResponse {
            success: true,
            message: "Balance deducted.".to_string(),
            account,
        })),
        Err(e) => {
            info!("Error deducting balance: {}", e);
            Err(error_response(e))
        }
    }
}

/// Handler to cancel an Elite Card.
#[axum::debug_handler]
pub async fn cancel_card_handler(
    State(state): State<Arc<WalletState>>,
    headers: HeaderMap,
    Json(payload): Json<CancelCardRequest>,
) -> Result<Json<BalanceResponse>, (StatusCode, String)> {
    admin_guard(&state, &headers)?;

    match cancel_card(state.client.as_ref(), payload).await {
        Ok(account) => Ok(Json(BalanceResponse {
            success: true,
            message: "Card cancelled.".to_string(),
            account,
        })),
        Err(e) => {
            info!("Error cancelling card: {}", e);
            Err(error_response(e))
        }
    }
}

/// Handler to assign a card to an existing user.
#[axum::debug_handler]
pub async fn assign_card_handler(
    State(state): State<Arc<WalletState>>,
    headers: HeaderMap,
    Json(payload): Json<AssignCardRequest>,
) -> Result<Json<BalanceResponse>, (StatusCode, String)> {
    admin_guard(&state, &headers)?;

    match assign_card(state.client.as_ref(), payload).await {
        Ok(account) => Ok(Json(BalanceResponse {
            success: true,
            message: "Card assigned.".to_string(),
            account,
        })),
        Err(e) => {
            info!("Error assigning card: {}", e);
            Err(error_response(e))
        }
    }
}

/// Handler for the recent-transactions feed on the admin dashboard.
#[axum::debug_handler]
pub async fn transactions_handler(
    State(state): State<Arc<WalletState>>,
    headers: HeaderMap,
    Query(query): Query<TransactionQuery>,
) -> Result<Json<TransactionListResponse>, (StatusCode, String)> {
    admin_guard(&state, &headers)?;

    match recent_transactions(state.client.as_ref(), query.limit).await {
        Ok(transactions) => Ok(Json(TransactionListResponse { transactions })),
        Err(e) => {
            info!("Error fetching transactions: {}", e);
            Err(error_response(e))
        }
    }
}
