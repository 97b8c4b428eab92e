// --- File: crates/playbox_wallet/src/client.rs ---
//! Typed reqwest client for the upstream core API's RFID and balance
//! endpoints. The balance mutations take query-string parameters upstream;
//! the scan and card-management calls take JSON bodies.

use crate::error::WalletError;
use playbox_common::models::{PlayerAccount, ScanOutcome, WalletTransaction};
use playbox_common::HTTP_CLIENT;
use playbox_config::CoreApiConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct WalletApiClient {
    base_url: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ScanBody<'a> {
    card_uid: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CancelCardBody<'a> {
    card_uid: &'a str,
    admin_username: &'a str,
    admin_password: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct AssignCardBody<'a> {
    user_id: i64,
    card_uid: &'a str,
}

impl WalletApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn from_config(config: &CoreApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn scan_card(&self, card_uid: &str) -> Result<ScanOutcome, WalletError> {
        let response = HTTP_CLIENT
            .post(self.url("/api/rfid/scan"))
            .json(&ScanBody { card_uid })
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn add_balance(
        &self,
        card_uid: &str,
        amount: f64,
        admin_name: &str,
    ) -> Result<PlayerAccount, WalletError> {
        let response = HTTP_CLIENT
            .post(self.url("/api/users/add"))
            .query(&[
                ("cardUid", card_uid),
                ("amount", &amount.to_string()),
                ("adminName", admin_name),
            ])
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn deduct_balance(
        &self,
        card_uid: &str,
        amount: f64,
        deducted_by: &str,
        description: &str,
        sport_id: Option<i64>,
        slot_id: Option<i64>,
    ) -> Result<PlayerAccount, WalletError> {
        let amount = amount.to_string();
        let mut params: Vec<(&str, String)> = vec![
            ("cardUid", card_uid.to_string()),
            ("amount", amount),
            ("deductor", deducted_by.to_string()),
            ("description", description.to_string()),
        ];
        if let Some(sport_id) = sport_id {
            params.push(("sportId", sport_id.to_string()));
        }
        if let Some(slot_id) = slot_id {
            params.push(("slotId", slot_id.to_string()));
        }

        let response = HTTP_CLIENT
            .post(self.url("/api/users/deduct"))
            .query(&params)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn cancel_card(
        &self,
        card_uid: &str,
        admin_username: &str,
        admin_password: &str,
    ) -> Result<PlayerAccount, WalletError> {
        let response = HTTP_CLIENT
            .post(self.url("/api/users/cancel-card"))
            .json(&CancelCardBody {
                card_uid,
                admin_username,
                admin_password,
            })
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn assign_card(
        &self,
        user_id: i64,
        card_uid: &str,
    ) -> Result<PlayerAccount, WalletError> {
        let response = HTTP_CLIENT
            .post(self.url("/api/users/assign-card"))
            .json(&AssignCardBody { user_id, card_uid })
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn recent_transactions(
        &self,
        limit: u32,
    ) -> Result<Vec<WalletTransaction>, WalletError> {
        let response = HTTP_CLIENT
            .get(self.url("/api/transactions/recent"))
            .query(&[("limit", limit.to_string())])
            .send()
            .await?;
        read_json(response).await
    }
}

/// Interprets an upstream response; non-2xx becomes `ApiError` with the
/// plain-text or JSON message the body carries.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, WalletError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        let message = match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| body.trim().to_string()),
            Err(_) => body.trim().to_string(),
        };
        let message = if message.is_empty() {
            "Request rejected by the core API".to_string()
        } else {
            message
        };
        return Err(WalletError::ApiError {
            status_code: status.as_u16(),
            message,
        });
    }
    Ok(serde_json::from_str(&body)?)
}
