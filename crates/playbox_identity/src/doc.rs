// File: crates/playbox_identity/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    AdminAccount, AdminLoginRequest, AdminLoginResponse, CreateUserRequest, LoginResponse,
    LogoutResponse, SendOtpRequest, SendOtpResponse, UpdateProfileRequest, UserProfile,
    VerifyOtpRequest,
};
use playbox_common::models::PlayerAccount;
use serde_json::json;

#[utoipa::path(
    post,
    path = "/auth/send-otp",
    request_body(content = SendOtpRequest, example = json!({"phone": "98765 43210"})),
    responses(
        (status = 200, description = "OTP dispatched", body = SendOtpResponse),
        (status = 400, description = "Invalid phone number"),
        (status = 502, description = "Core API unreachable")
    )
)]
fn doc_send_otp_handler() {}

#[utoipa::path(
    post,
    path = "/auth/verify-otp",
    request_body(content = VerifyOtpRequest, example = json!({
        "phone": "9876543210",
        "otp": "4321",
        "name": "Asha"
    })),
    responses(
        (status = 200, description = "Session opened", body = LoginResponse),
        (status = 400, description = "Missing phone or OTP"),
        (status = 502, description = "OTP rejected upstream")
    )
)]
fn doc_verify_otp_handler() {}

#[utoipa::path(
    post,
    path = "/auth/admin/login",
    request_body(content = AdminLoginRequest),
    responses(
        (status = 200, description = "Admin session opened", body = AdminLoginResponse),
        (status = 400, description = "Missing credentials")
    )
)]
fn doc_admin_login_handler() {}

#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Session cleared", body = LogoutResponse)
    )
)]
fn doc_logout_handler() {}

#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "Profile of the session player", body = UserProfile),
        (status = 401, description = "Missing or expired session")
    )
)]
fn doc_profile_handler() {}

#[utoipa::path(
    put,
    path = "/me",
    request_body(content = UpdateProfileRequest),
    responses(
        (status = 200, description = "Updated account", body = PlayerAccount),
        (status = 401, description = "Missing or expired session")
    )
)]
fn doc_update_profile_handler() {}

#[utoipa::path(
    post,
    path = "/admin/users",
    request_body(content = CreateUserRequest),
    responses(
        (status = 200, description = "Created account", body = PlayerAccount),
        (status = 401, description = "Admin session required")
    )
)]
fn doc_create_user_handler() {}

#[utoipa::path(
    get,
    path = "/admin/users",
    responses(
        (status = 200, description = "All Elite Card holders", body = Vec<PlayerAccount>),
        (status = 401, description = "Admin session required")
    )
)]
fn doc_list_users_handler() {}

#[utoipa::path(
    get,
    path = "/admin/users/phone/{phone}",
    params(
        ("phone" = String, Path, description = "Phone number to look up")
    ),
    responses(
        (status = 200, description = "Matching account", body = PlayerAccount),
        (status = 404, description = "No user with that phone"),
        (status = 401, description = "Admin session required")
    )
)]
fn doc_find_by_phone_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_send_otp_handler,
        doc_verify_otp_handler,
        doc_admin_login_handler,
        doc_logout_handler,
        doc_profile_handler,
        doc_update_profile_handler,
        doc_create_user_handler,
        doc_list_users_handler,
        doc_find_by_phone_handler
    ),
    components(
        schemas(
            SendOtpRequest,
            SendOtpResponse,
            VerifyOtpRequest,
            LoginResponse,
            AdminLoginRequest,
            AdminLoginResponse,
            AdminAccount,
            LogoutResponse,
            UpdateProfileRequest,
            CreateUserRequest,
            UserProfile,
            PlayerAccount
        )
    ),
    tags(
        (name = "identity", description = "OTP login, sessions and users API")
    ),
    servers(
        (url = "/api", description = "Main API prefix")
    )
)]
pub struct IdentityApiDoc;
