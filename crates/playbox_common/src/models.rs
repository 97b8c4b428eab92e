// --- File: crates/playbox_common/src/models.rs ---

// Shared domain models for the PlayBox gateway. The upstream core API speaks
// camelCase JSON; the serde renames here are the single place that mapping
// lives.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bookable sport/court offered by the facility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Sport {
    pub id: i64,
    pub name: String,
    pub court_name: String,
    pub price_per_hour: f64,
    pub active: bool,
}

/// A fixed time interval on a given date for a specific sport/court.
///
/// Start and end times stay raw strings ("HH:MM" upstream): the visibility
/// filter owns the parsing policy for malformed values, so they must survive
/// deserialization untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Slot {
    pub id: i64,
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-08-06"))]
    pub slot_date: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(example = "18:00"))]
    pub start_time: String,
    #[cfg_attr(feature = "openapi", schema(example = "19:00"))]
    pub end_time: String,
    pub booked: bool,
}

/// Slot detail including the owning sport.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotDetails {
    pub id: i64,
    pub slot_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub booked: bool,
    pub sport_id: i64,
}

/// A confirmed reservation linking a user to a slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub sport_id: i64,
    pub slot_id: i64,
    pub amount: f64,
    #[cfg_attr(feature = "openapi", schema(example = "CONFIRMED"))]
    pub status: String,
    #[cfg_attr(feature = "openapi", schema(example = "WALLET"))]
    pub payment_mode: String,
    pub created_at: String,
}

/// An Elite Card holder as the upstream core API returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PlayerAccount {
    pub id: i64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub card_uid: Option<String>,
    #[serde(default)]
    pub balance: f64,
}

impl PlayerAccount {
    /// A player can reserve slots only with an active Elite Card.
    pub fn has_elite_card(&self) -> bool {
        self.card_uid
            .as_deref()
            .map(|uid| !uid.trim().is_empty())
            .unwrap_or(false)
    }
}

/// A wallet ledger entry (top-up, deduction, registration or booking).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WalletTransaction {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "openapi", schema(example = "DEDUCT"))]
    pub kind: String,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub timestamp: String,
    #[serde(default)]
    pub admin_name: Option<String>,
    #[serde(default)]
    pub balance_after: Option<f64>,
}

/// Outcome of an RFID card scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ScanOutcome {
    pub status: ScanStatus,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub balance: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ScanStatus {
    NewCard,
    ExistingUser,
}

/// Per-slot booking status as shown on the admin day overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminSlotStatus {
    pub slot_id: i64,
    pub slot_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub booked: bool,
    #[serde(default)]
    pub booking_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_mode: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Admin view of one sport's day: counts plus per-slot status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminSportDayOverview {
    pub sport_id: i64,
    pub sport_name: String,
    pub court_name: String,
    pub date: NaiveDate,
    pub total_slots: i64,
    pub booked_slots: i64,
    pub empty_slots: i64,
    pub slots: Vec<AdminSlotStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_deserializes_from_upstream_json() {
        let json = r#"{
            "id": 7,
            "slotDate": "2026-08-06",
            "startTime": "18:00",
            "endTime": "19:00",
            "booked": false
        }"#;
        let slot: Slot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.id, 7);
        assert_eq!(slot.end_time, "19:00");
        assert!(!slot.booked);
    }

    #[test]
    fn scan_status_uses_upstream_wire_names() {
        let outcome: ScanOutcome =
            serde_json::from_str(r#"{"status":"EXISTING_USER","name":"Asha","balance":450.0}"#)
                .unwrap();
        assert_eq!(outcome.status, ScanStatus::ExistingUser);
        assert_eq!(outcome.balance, Some(450.0));
    }

    #[test]
    fn elite_card_requires_a_non_blank_uid() {
        let mut account: PlayerAccount = serde_json::from_str(
            r#"{"id":1,"name":"Asha","phone":"9876543210","cardUid":"04A1B2","balance":100.0}"#,
        )
        .unwrap();
        assert!(account.has_elite_card());
        account.card_uid = Some("   ".into());
        assert!(!account.has_elite_card());
        account.card_uid = None;
        assert!(!account.has_elite_card());
    }
}
