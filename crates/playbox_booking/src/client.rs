// --- File: crates/playbox_booking/src/client.rs ---
//! Typed reqwest client for the upstream core API's catalog, slot and
//! booking endpoints. The upstream owns all state; this client only shapes
//! requests and interprets responses.

use crate::error::BookingError;
use crate::logic::BlockSlotRequest;
use chrono::NaiveDate;
use playbox_common::models::{AdminSportDayOverview, Booking, Slot, SlotDetails, Sport};
use playbox_common::HTTP_CLIENT;
use playbox_config::CoreApiConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

pub struct BookingApiClient {
    base_url: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct BookSlotBody<'a> {
    user_id: i64,
    slot_id: i64,
    payment_mode: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ManualBookBody<'a> {
    name: &'a str,
    phone: &'a str,
    slot_id: i64,
}

impl BookingApiClient {
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

    pub async fn list_sports(&self) -> Result<Vec<Sport>, BookingError> {
        let response = HTTP_CLIENT.get(self.url("/api/sports")).send().await?;
        read_json(response).await
    }

    pub async fn list_slots(
        &self,
        sport_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Slot>, BookingError> {
        let response = HTTP_CLIENT
            .get(self.url("/api/slots"))
            .query(&[
                ("sportId", sport_id.to_string()),
                ("date", date.to_string()),
            ])
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn slot_details(&self, slot_id: i64) -> Result<SlotDetails, BookingError> {
        let response = HTTP_CLIENT
            .get(self.url(&format!("/api/slots/{slot_id}")))
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn book_slot(
        &self,
        user_id: i64,
        slot_id: i64,
        payment_mode: &str,
    ) -> Result<Booking, BookingError> {
        debug!(user_id, slot_id, payment_mode, "Submitting booking upstream");
        let response = HTTP_CLIENT
            .post(self.url("/api/bookings/book"))
            .json(&BookSlotBody {
                user_id,
                slot_id,
                payment_mode,
            })
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn user_bookings(&self, user_id: i64) -> Result<Vec<Booking>, BookingError> {
        let response = HTTP_CLIENT
            .get(self.url(&format!("/api/bookings/user/{user_id}")))
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn manual_book(&self, request: &BlockSlotRequest) -> Result<Booking, BookingError> {
        let response = HTTP_CLIENT
            .post(self.url("/api/bookings/admin/manual-book"))
            .json(&ManualBookBody {
                name: &request.name,
                phone: &request.phone,
                slot_id: request.slot_id,
            })
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn day_overview(
        &self,
        sport_id: i64,
        date: NaiveDate,
    ) -> Result<AdminSportDayOverview, BookingError> {
        let response = HTTP_CLIENT
            .get(self.url("/api/bookings/admin/day-overview"))
            .query(&[
                ("sportId", sport_id.to_string()),
                ("date", date.to_string()),
            ])
            .send()
            .await?;
        read_json(response).await
    }
}

/// Interprets an upstream response: non-2xx becomes `ApiError` with the most
/// readable message the body offers, a 2xx body is parsed as JSON.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BookingError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(BookingError::ApiError {
            status_code: status.as_u16(),
            message: error_message_from_body(&body),
        });
    }
    Ok(serde_json::from_str(&body)?)
}

/// The upstream reports failures as plain text or as JSON with a `message`
/// or `error` field; take whichever is there.
pub(crate) fn error_message_from_body(body: &str) -> String {
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
