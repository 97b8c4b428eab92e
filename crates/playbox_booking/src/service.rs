// --- File: crates/playbox_booking/src/service.rs ---
//! `BookingApi` implementation over the upstream client.
//!
//! The booking flow in `logic` is written against the trait so tests can
//! substitute a mock; at runtime this delegating implementation is the only
//! one.

use async_trait::async_trait;
use chrono::NaiveDate;
use playbox_common::models::{Booking, Slot, SlotDetails, Sport};
use playbox_common::services::BookingApi;

use crate::client::BookingApiClient;
use crate::error::BookingError;

#[async_trait]
impl BookingApi for BookingApiClient {
    type Error = BookingError;

    async fn list_sports(&self) -> Result<Vec<Sport>, Self::Error> {
        BookingApiClient::list_sports(self).await
    }

    async fn list_slots(&self, sport_id: i64, date: NaiveDate) -> Result<Vec<Slot>, Self::Error> {
        BookingApiClient::list_slots(self, sport_id, date).await
    }

    async fn slot_details(&self, slot_id: i64) -> Result<SlotDetails, Self::Error> {
        BookingApiClient::slot_details(self, slot_id).await
    }

    async fn book_slot(
        &self,
        user_id: i64,
        slot_id: i64,
        payment_mode: &str,
    ) -> Result<Booking, Self::Error> {
        BookingApiClient::book_slot(self, user_id, slot_id, payment_mode).await
    }

    async fn user_bookings(&self, user_id: i64) -> Result<Vec<Booking>, Self::Error> {
        BookingApiClient::user_bookings(self, user_id).await
    }
}
