// --- File: crates/playbox_identity/src/client.rs ---
//! Typed reqwest client for the upstream core API's auth and user
//! endpoints. OTP generation and delivery happen upstream; this client only
//! relays the requests.

use crate::error::IdentityError;
use crate::logic::{AdminAccount, UserProfile};
use playbox_common::models::PlayerAccount;
use playbox_common::HTTP_CLIENT;
use playbox_config::CoreApiConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct IdentityApiClient {
    base_url: String,
}

#[derive(Serialize, Debug)]
struct PhoneBody<'a> {
    phone: &'a str,
}

#[derive(Serialize, Debug)]
struct VerifyOtpBody<'a> {
    phone: &'a str,
    otp: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Serialize, Debug)]
struct AdminLoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CreateUserBody<'a> {
    card_uid: &'a str,
    name: &'a str,
    phone: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

#[derive(Serialize, Debug)]
struct UpdateProfileBody<'a> {
    id: i64,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

impl IdentityApiClient {
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

    /// Asks the upstream to dispatch an OTP. The success body is plain text.
    pub async fn send_otp(&self, phone: &str) -> Result<String, IdentityError> {
        let response = HTTP_CLIENT
            .post(self.url("/api/auth/send-otp"))
            .json(&PhoneBody { phone })
            .send()
            .await?;
        read_text(response).await
    }

    pub async fn verify_otp(
        &self,
        phone: &str,
        otp: &str,
        name: Option<&str>,
    ) -> Result<PlayerAccount, IdentityError> {
        let response = HTTP_CLIENT
            .post(self.url("/api/auth/verify-otp"))
            .json(&VerifyOtpBody { phone, otp, name })
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn admin_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminAccount, IdentityError> {
        let response = HTTP_CLIENT
            .post(self.url("/api/admin/login"))
            .json(&AdminLoginBody { username, password })
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn create_user(
        &self,
        card_uid: &str,
        name: &str,
        phone: &str,
        email: Option<&str>,
    ) -> Result<PlayerAccount, IdentityError> {
        let response = HTTP_CLIENT
            .post(self.url("/api/users/create"))
            .json(&CreateUserBody {
                card_uid,
                name,
                phone,
                email,
            })
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn update_profile(
        &self,
        user_id: i64,
        name: &str,
        email: Option<&str>,
    ) -> Result<PlayerAccount, IdentityError> {
        let response = HTTP_CLIENT
            .put(self.url("/api/users/update"))
            .json(&UpdateProfileBody {
                id: user_id,
                name,
                email,
            })
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn user_details(&self, user_id: i64) -> Result<UserProfile, IdentityError> {
        let response = HTTP_CLIENT
            .get(self.url(&format!("/api/users/{user_id}/details")))
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn all_users(&self) -> Result<Vec<PlayerAccount>, IdentityError> {
        let response = HTTP_CLIENT.get(self.url("/api/users/all")).send().await?;
        read_json(response).await
    }

    pub async fn find_by_phone(&self, phone: &str) -> Result<PlayerAccount, IdentityError> {
        let response = HTTP_CLIENT
            .get(self.url(&format!("/api/users/phone/{phone}")))
            .send()
            .await?;
        read_json(response).await
    }
}

fn rejection_message(body: &str) -> String {
    let fallback = || {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            "Request rejected by the core API".to_string()
        } else {
            trimmed.to_string()
        }
    };
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("message")
            .or_else(|| value.get("error"))
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(fallback),
        Err(_) => fallback(),
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, IdentityError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(IdentityError::ApiError {
            status_code: status.as_u16(),
            message: rejection_message(&body),
        });
    }
    Ok(serde_json::from_str(&body)?)
}

/// For endpoints whose success body is plain text rather than JSON.
async fn read_text(response: reqwest::Response) -> Result<String, IdentityError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(IdentityError::ApiError {
            status_code: status.as_u16(),
            message: rejection_message(&body),
        });
    }
    Ok(body)
}
