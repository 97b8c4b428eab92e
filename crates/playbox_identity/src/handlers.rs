// File: crates/playbox_identity/src/handlers.rs
use crate::client::IdentityApiClient;
use crate::error::IdentityError;
use crate::logic::{
    normalize_phone, require_otp, AdminLoginRequest, AdminLoginResponse, CreateUserRequest,
    LoginResponse, LogoutResponse, SendOtpRequest, SendOtpResponse, UpdateProfileRequest,
    UserProfile, VerifyOtpRequest,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use http::HeaderMap;
use playbox_common::models::PlayerAccount;
use playbox_common::services::{require_admin, require_session, Session, SessionRole, SessionStore};
use playbox_common::{bearer_token, HttpStatusCode};
use playbox_config::AppConfig;
use std::sync::Arc;
use tracing::info;

// Shared state for the identity handlers
#[derive(Clone)]
pub struct IdentityState {
    pub config: Arc<AppConfig>,
    pub client: Arc<IdentityApiClient>,
    pub sessions: Arc<dyn SessionStore>,
}

fn error_response(err: IdentityError) -> (StatusCode, String) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string())
}

/// Handler to request an OTP for a phone number.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/auth/send-otp", // Path relative to /api
    request_body = SendOtpRequest,
    responses(
        (status = 200, description = "OTP dispatched", body = SendOtpResponse),
        (status = 400, description = "Invalid phone number"),
        (status = 502, description = "Core API unreachable")
    ),
    tag = "Identity"
))]
pub async fn send_otp_handler(
    State(state): State<Arc<IdentityState>>,
    Json(payload): Json<SendOtpRequest>,
) -> Result<Json<SendOtpResponse>, (StatusCode, String)> {
    if !state.config.use_identity {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Identity service is disabled.".to_string(),
        ));
    }

    let phone = normalize_phone(&payload.phone).map_err(error_response)?;

    match state.client.send_otp(&phone).await {
        Ok(message) => Ok(Json(SendOtpResponse {
            success: true,
            message,
        })),
        Err(e) => {
            info!("Error sending OTP: {}", e);
            Err(error_response(e))
        }
    }
}

/// Handler to verify an OTP and open a player session.
#[axum::debug_handler]
pub async fn verify_otp_handler(
    State(state): State<Arc<IdentityState>>,
    Json(payload): Json<VerifyOtpRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, String)> {
    let phone = normalize_phone(&payload.phone).map_err(error_response)?;
    let otp = require_otp(&payload.otp).map_err(error_response)?;

    match state
        .client
        .verify_otp(&phone, &otp, payload.name.as_deref())
        .await
    {
        Ok(account) => {
            let token = state.sessions.save(Session {
                user_id: account.id,
                name: account.name.clone(),
                phone: account.phone.clone(),
                role: SessionRole::Player,
                issued_at: Utc::now(),
            });
            info!("Player {} logged in", account.id);
            Ok(Json(LoginResponse { token, account }))
        }
        Err(e) => {
            info!("OTP verification failed: {}", e);
            Err(error_response(e))
        }
    }
}

/// Handler for the admin console login.
#[axum::debug_handler]
pub async fn admin_login_handler(
    State(state): State<Arc<IdentityState>>,
    Json(payload): Json<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, (StatusCode, String)> {
    if payload.username.trim().is_empty() || payload.password.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Username and password are required".to_string(),
        ));
    }

    match state
        .client
        .admin_login(payload.username.trim(), &payload.password)
        .await
    {
        Ok(admin) => {
            let token = state.sessions.save(Session {
                user_id: admin.id.unwrap_or_default(),
                name: admin
                    .name
                    .clone()
                    .unwrap_or_else(|| admin.username.clone()),
                phone: String::new(),
                role: SessionRole::Admin,
                issued_at: Utc::now(),
            });
            info!("Admin {} logged in", admin.username);
            Ok(Json(AdminLoginResponse { token, admin }))
        }
        Err(e) => {
            info!("Admin login failed: {}", e);
            Err(error_response(e))
        }
    }
}

/// Handler to end the caller's session.
#[axum::debug_handler]
pub async fn logout_handler(
    State(state): State<Arc<IdentityState>>,
    headers: HeaderMap,
) -> Json<LogoutResponse> {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.clear(token);
    }
    // logging out an already-dead token is fine
    Json(LogoutResponse {
        success: true,
        message: "Logged out.".to_string(),
    })
}

/// Handler for the session player's profile.
#[axum::debug_handler]
pub async fn profile_handler(
    State(state): State<Arc<IdentityState>>,
    headers: HeaderMap,
) -> Result<Json<UserProfile>, (StatusCode, String)> {
    let session = require_session(state.sessions.as_ref(), &headers)
        .map_err(|e| (StatusCode::UNAUTHORIZED, e.to_string()))?;

    match state.client.user_details(session.user_id).await {
        Ok(profile) => Ok(Json(profile)),
        Err(e) => {
            info!("Error fetching profile for user {}: {}", session.user_id, e);
            Err(error_response(e))
        }
    }
}

/// Handler to update the session player's profile.
#[axum::debug_handler]
pub async fn update_profile_handler(
    State(state): State<Arc<IdentityState>>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<PlayerAccount>, (StatusCode, String)> {
    let session = require_session(state.sessions.as_ref(), &headers)
        .map_err(|e| (StatusCode::UNAUTHORIZED, e.to_string()))?;

    if payload.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Name is required".to_string()));
    }

    match state
        .client
        .update_profile(
            session.user_id,
            payload.name.trim(),
            payload.email.as_deref(),
        )
        .await
    {
        Ok(account) => Ok(Json(account)),
        Err(e) => {
            info!("Error updating profile for user {}: {}", session.user_id, e);
            Err(error_response(e))
        }
    }
}

/// Handler to register a new Elite Card holder (admin console).
#[axum::debug_handler]
pub async fn create_user_handler(
    State(state): State<Arc<IdentityState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<PlayerAccount>, (StatusCode, String)> {
    require_admin(state.sessions.as_ref(), &headers)
        .map_err(|e| (StatusCode::UNAUTHORIZED, e.to_string()))?;

    let phone = normalize_phone(&payload.phone).map_err(error_response)?;
    if payload.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Name is required".to_string()));
    }
    if payload.card_uid.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Card UID is required".to_string()));
    }

    match state
        .client
        .create_user(
            payload.card_uid.trim(),
            payload.name.trim(),
            &phone,
            payload.email.as_deref(),
        )
        .await
    {
        Ok(account) => {
            info!("Created user {} with card {:?}", account.id, account.card_uid);
            Ok(Json(account))
        }
        Err(e) => {
            info!("Error creating user: {}", e);
            Err(error_response(e))
        }
    }
}

/// Handler to list all Elite Card holders (admin console).
#[axum::debug_handler]
pub async fn list_users_handler(
    State(state): State<Arc<IdentityState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<PlayerAccount>>, (StatusCode, String)> {
    require_admin(state.sessions.as_ref(), &headers)
        .map_err(|e| (StatusCode::UNAUTHORIZED, e.to_string()))?;

    match state.client.all_users().await {
        Ok(users) => Ok(Json(users)),
        Err(e) => {
            info!("Error listing users: {}", e);
            Err(error_response(e))
        }
    }
}

/// Handler to look a user up by phone number (admin console).
#[axum::debug_handler]
pub async fn find_by_phone_handler(
    State(state): State<Arc<IdentityState>>,
    headers: HeaderMap,
    Path(phone): Path<String>,
) -> Result<Json<PlayerAccount>, (StatusCode, String)> {
    require_admin(state.sessions.as_ref(), &headers)
        .map_err(|e| (StatusCode::UNAUTHORIZED, e.to_string()))?;

    let phone = normalize_phone(&phone).map_err(error_response)?;

    match state.client.find_by_phone(&phone).await {
        Ok(account) => Ok(Json(account)),
        Err(e) => {
            info!("Error finding user by phone: {}", e);
            Err(error_response(e))
        }
    }
}
