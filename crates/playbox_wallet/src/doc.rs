// File: crates/playbox_wallet/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    AssignCardRequest, BalanceResponse, CancelCardRequest, DeductRequest, ScanRequest,
    TopUpRequest, TransactionListResponse,
};
use playbox_common::models::{PlayerAccount, ScanOutcome, ScanStatus, WalletTransaction};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/rfid/scan",
    request_body(content = ScanRequest, example = json!({"card_uid": "04A1B2C3"})),
    responses(
        (status = 200, description = "Card resolved", body = ScanOutcome,
         example = json!({"status": "EXISTING_USER", "name": "Asha", "balance": 450.0})),
        (status = 401, description = "Admin session required"),
        (status = 502, description = "Core API unreachable")
    )
)]
fn doc_scan_card_handler() {}

#[utoipa::path(
    post,
    path = "/wallet/top-up",
    request_body(content = TopUpRequest, example = json!({
        "card_uid": "04A1B2C3",
        "amount": 500.0,
        "admin_name": "Front Desk"
    })),
    responses(
        (status = 200, description = "Balance added", body = BalanceResponse),
        (status = 400, description = "Invalid amount or blank card UID"),
        (status = 401, description = "Admin session required")
    )
)]
fn doc_top_up_handler() {}

#[utoipa::path(
    post,
    path = "/wallet/deduct",
    request_body(content = DeductRequest),
    responses(
        (status = 200, description = "Balance deducted", body = BalanceResponse),
        (status = 400, description = "Invalid amount or missing fields"),
        (status = 401, description = "Admin session required")
    )
)]
fn doc_deduct_handler() {}

#[utoipa::path(
    post,
    path = "/wallet/cancel-card",
    request_body(content = CancelCardRequest),
    responses(
        (status = 200, description = "Card cancelled", body = BalanceResponse),
        (status = 401, description = "Admin session required")
    )
)]
fn doc_cancel_card_handler() {}

#[utoipa::path(
    post,
    path = "/wallet/assign-card",
    request_body(content = AssignCardRequest),
    responses(
        (status = 200, description = "Card assigned", body = BalanceResponse),
        (status = 401, description = "Admin session required")
    )
)]
fn doc_assign_card_handler() {}

#[utoipa::path(
    get,
    path = "/wallet/transactions",
    params(
        ("limit" = Option<u32>, Query, description = "Number of transactions to return", example = 10)
    ),
    responses(
        (status = 200, description = "Recent wallet transactions", body = TransactionListResponse),
        (status = 401, description = "Admin session required")
    )
)]
fn doc_transactions_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_scan_card_handler,
        doc_top_up_handler,
        doc_deduct_handler,
        doc_cancel_card_handler,
        doc_assign_card_handler,
        doc_transactions_handler
    ),
    components(
        schemas(
            ScanRequest,
            TopUpRequest,
            DeductRequest,
            CancelCardRequest,
            AssignCardRequest,
            BalanceResponse,
            TransactionListResponse,
            PlayerAccount,
            ScanOutcome,
            ScanStatus,
            WalletTransaction
        )
    ),
    tags(
        (name = "wallet", description = "Elite Card wallet API")
    ),
    servers(
        (url = "/api", description = "Main API prefix")
    )
)]
pub struct WalletApiDoc;
