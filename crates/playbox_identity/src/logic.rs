// --- File: crates/playbox_identity/src/logic.rs ---
use crate::error::IdentityError;
use playbox_common::models::{PlayerAccount, WalletTransaction};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Shortest phone number the facility accepts (national mobile numbers).
const MIN_PHONE_DIGITS: usize = 10;

// --- Data Structures ---

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SendOtpRequest {
    #[cfg_attr(feature = "openapi", schema(example = "98765 43210"))]
    pub phone: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SendOtpResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct VerifyOtpRequest {
    pub phone: String,
    #[cfg_attr(feature = "openapi", schema(example = "4321"))]
    pub otp: String,
    /// Display name for first-time players
    pub name: Option<String>,
}

/// A successful login: opaque bearer token plus the player's account.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LoginResponse {
    pub token: String,
    pub account: PlayerAccount,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

/// The admin record the core API returns on a successful login. Lenient on
/// purpose: only the username is guaranteed across deployments.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AdminAccount {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AdminLoginResponse {
    pub token: String,
    pub admin: AdminAccount,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: Option<String>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateUserRequest {
    pub card_uid: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

/// Profile view: account summary plus activity, as the core API reports it.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub registration_date: Option<String>,
    #[serde(default)]
    pub last_visit: Option<String>,
    #[serde(default)]
    pub total_visits: Option<i64>,
    #[serde(default)]
    pub total_recharge: Option<f64>,
    #[serde(default)]
    pub total_deduction: Option<f64>,
    #[serde(default)]
    pub current_balance: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub recent_transactions: Vec<WalletTransaction>,
}

// --- Validation ---

/// Normalizes a phone number to the digits the upstream stores: spaces and
/// separators dropped, an optional leading `+` kept.
pub fn normalize_phone(raw: &str) -> Result<String, IdentityError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdentityError::MissingField("phone"));
    }

    let mut normalized = String::with_capacity(trimmed.len());
    for (i, c) in trimmed.chars().enumerate() {
        match c {
            '+' if i == 0 => normalized.push(c),
            '0'..='9' => normalized.push(c),
            ' ' | '-' | '(' | ')' => {}
            _ => return Err(IdentityError::InvalidPhone(raw.to_string())),
        }
    }

    let digits = normalized.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_PHONE_DIGITS {
        return Err(IdentityError::InvalidPhone(raw.to_string()));
    }
    Ok(normalized)
}

/// OTPs are upstream's to verify; the gateway only refuses blank ones.
pub fn require_otp(raw: &str) -> Result<String, IdentityError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdentityError::MissingField("otp"));
    }
    Ok(trimmed.to_string())
}
