// --- File: crates/playbox_wallet/src/logic.rs ---
use crate::client::WalletApiClient;
use crate::error::WalletError;
use playbox_common::models::{PlayerAccount, ScanOutcome, WalletTransaction};
use playbox_config::AppConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Recorded as the acting admin when a request names nobody and the config
/// has no default either.
const UNKNOWN_ADMIN: &str = "Unknown Admin";

/// Transactions shown on the admin dashboard when no limit is requested.
pub const DEFAULT_TRANSACTION_LIMIT: u32 = 10;

// --- Data Structures ---

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ScanRequest {
    #[cfg_attr(feature = "openapi", schema(example = "04A1B2C3"))]
    pub card_uid: String,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TopUpRequest {
    #[cfg_attr(feature = "openapi", schema(example = "04A1B2C3"))]
    pub card_uid: String,
    #[cfg_attr(feature = "openapi", schema(example = 500.0))]
    pub amount: f64,
    /// Defaults to the configured admin name
    pub admin_name: Option<String>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct DeductRequest {
    #[cfg_attr(feature = "openapi", schema(example = "04A1B2C3"))]
    pub card_uid: String,
    #[cfg_attr(feature = "openapi", schema(example = 250.0))]
    pub amount: f64,
    /// Staff member performing the deduction
    pub deducted_by: String,
    /// What the deduction was for, e.g. the sport played
    #[cfg_attr(feature = "openapi", schema(example = "Swimming Pool"))]
    pub description: String,
    pub sport_id: Option<i64>,
    pub slot_id: Option<i64>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CancelCardRequest {
    pub card_uid: String,
    pub admin_username: String,
    pub admin_password: String,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AssignCardRequest {
    pub user_id: i64,
    pub card_uid: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BalanceResponse {
    pub success: bool,
    pub message: String,
    pub account: PlayerAccount,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TransactionListResponse {
    pub transactions: Vec<WalletTransaction>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct TransactionQuery {
    pub limit: Option<u32>,
}

// --- Validation ---

/// Top-ups and deductions must move a strictly positive, finite amount.
pub fn validate_amount(amount: f64) -> Result<(), WalletError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(WalletError::InvalidAmount(amount));
    }
    Ok(())
}

/// Card UIDs come from the RFID reader; a blank one means no card was read.
pub fn normalize_card_uid(raw: &str) -> Result<String, WalletError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WalletError::MissingField("card_uid"));
    }
    Ok(trimmed.to_string())
}

fn require_text(value: &str, field: &'static str) -> Result<String, WalletError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(WalletError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// The admin name recorded against a top-up.
pub fn resolve_admin_name(config: &AppConfig, requested: Option<&str>) -> String {
    requested
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .or_else(|| {
            config
                .wallet
                .as_ref()
                .and_then(|wallet| wallet.default_admin_name.clone())
        })
        .unwrap_or_else(|| UNKNOWN_ADMIN.to_string())
}

// --- Wallet Flows ---

/// Looks a scanned card up upstream; a card nobody owns comes back as
/// `NEW_CARD` so the console can offer registration.
pub async fn scan_card(
    client: &WalletApiClient,
    request: ScanRequest,
) -> Result<ScanOutcome, WalletError> {
    let card_uid = normalize_card_uid(&request.card_uid)?;
    client.scan_card(&card_uid).await
}

/// Adds balance to an Elite Card.
pub async fn top_up(
    client: &WalletApiClient,
    config: &AppConfig,
    request: TopUpRequest,
) -> Result<PlayerAccount, WalletError> {
    let card_uid = normalize_card_uid(&request.card_uid)?;
    validate_amount(request.amount)?;
    let admin_name = resolve_admin_name(config, request.admin_name.as_deref());

    let account = client
        .add_balance(&card_uid, request.amount, &admin_name)
        .await?;
    info!(
        "Top-up of {} on card {} by {} (balance now {})",
        request.amount, card_uid, admin_name, account.balance
    );
    Ok(account)
}

/// Deducts balance from an Elite Card for a facility usage.
pub async fn deduct(
    client: &WalletApiClient,
    request: DeductRequest,
) -> Result<PlayerAccount, WalletError> {
    let card_uid = normalize_card_uid(&request.card_uid)?;
    validate_amount(request.amount)?;
    let deducted_by = require_text(&request.deducted_by, "deducted_by")?;
    let description = require_text(&request.description, "description")?;

    let account = client
        .deduct_balance(
            &card_uid,
            request.amount,
            &deducted_by,
            &description,
            request.sport_id,
            request.slot_id,
        )
        .await?;
    info!(
        "Deduction of {} from card {} by {} ({})",
        request.amount, card_uid, deducted_by, description
    );
    Ok(account)
}

/// Cancels a card. The upstream re-checks the admin credentials; this
/// gateway only refuses obviously empty input.
pub async fn cancel_card(
    client: &WalletApiClient,
    request: CancelCardRequest,
) -> Result<PlayerAccount, WalletError> {
    let card_uid = normalize_card_uid(&request.card_uid)?;
    let admin_username = require_text(&request.admin_username, "admin_username")?;
    let admin_password = require_text(&request.admin_password, "admin_password")?;
    client
        .cancel_card(&card_uid, &admin_username, &admin_password)
        .await
}

/// Assigns a fresh card to an existing user.
pub async fn assign_card(
    client: &WalletApiClient,
    request: AssignCardRequest,
) -> Result<PlayerAccount, WalletError> {
    let card_uid = normalize_card_uid(&request.card_uid)?;
    client.assign_card(request.user_id, &card_uid).await
}

/// Recent wallet transactions for the admin dashboard.
pub async fn recent_transactions(
    client: &WalletApiClient,
    limit: Option<u32>,
) -> Result<Vec<WalletTransaction>, WalletError> {
    client
        .recent_transactions(limit.unwrap_or(DEFAULT_TRANSACTION_LIMIT))
        .await
}
