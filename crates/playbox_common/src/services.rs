// --- File: crates/playbox_common/src/services.rs ---
//! Service abstractions shared across the gateway.
//!
//! Two seams live here: the `SessionStore` that replaces the original
//! product's ad-hoc browser-storage login flags with an explicit
//! load/save/clear lifecycle, and the `BookingApi` trait that decouples the
//! booking flow from the concrete upstream client so tests can substitute a
//! mock.

use async_trait::async_trait;
use axum::http::HeaderMap;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{auth_error, PlayboxError};
use crate::http::bearer_token;
use crate::models::{Booking, Slot, SlotDetails, Sport};

/// Who a session token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum SessionRole {
    Player,
    Admin,
}

/// An authenticated principal, resolved from a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Session {
    pub user_id: i64,
    pub name: String,
    pub phone: String,
    pub role: SessionRole,
    pub issued_at: DateTime<Utc>,
}

/// The explicit session context. `save` issues an opaque token, `load`
/// resolves one (expired sessions resolve to `None`), `clear` ends it.
pub trait SessionStore: Send + Sync {
    fn load(&self, token: &str) -> Option<Session>;
    fn save(&self, session: Session) -> String;
    fn clear(&self, token: &str);
}

/// Resolves the request's bearer token to a live session.
pub fn require_session(
    store: &dyn SessionStore,
    headers: &HeaderMap,
) -> Result<Session, PlayboxError> {
    let token =
        bearer_token(headers).ok_or_else(|| auth_error("Missing or malformed bearer token"))?;
    store
        .load(token)
        .ok_or_else(|| auth_error("Session expired or unknown. Please log in again."))
}

/// Resolves the request's bearer token to a live admin session.
pub fn require_admin(
    store: &dyn SessionStore,
    headers: &HeaderMap,
) -> Result<Session, PlayboxError> {
    let session = require_session(store, headers)?;
    if session.role != SessionRole::Admin {
        return Err(auth_error("Admin session required"));
    }
    Ok(session)
}

/// Upstream operations the booking flow depends on.
///
/// The concrete implementation is the reqwest client in the booking crate;
/// flow tests mock this trait instead of standing up an HTTP server.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Error type returned by booking operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// List the sports offered by the facility.
    async fn list_sports(&self) -> Result<Vec<Sport>, Self::Error>;

    /// List all slots for a sport on a date, booked or not, unfiltered.
    async fn list_slots(&self, sport_id: i64, date: NaiveDate) -> Result<Vec<Slot>, Self::Error>;

    /// Fetch a single slot with its owning sport.
    async fn slot_details(&self, slot_id: i64) -> Result<SlotDetails, Self::Error>;

    /// Submit a booking request. The upstream is the sole authority on
    /// conflicts; a rejection here means the slot is no longer available.
    async fn book_slot(
        &self,
        user_id: i64,
        slot_id: i64,
        payment_mode: &str,
    ) -> Result<Booking, Self::Error>;

    /// List a user's bookings.
    async fn user_bookings(&self, user_id: i64) -> Result<Vec<Booking>, Self::Error>;
}
