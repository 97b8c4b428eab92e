// --- File: crates/playbox_booking/src/logic.rs ---
use crate::error::BookingError;
use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use playbox_common::models::{Booking, Slot};
use playbox_common::services::BookingApi;
use playbox_config::AppConfig;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use tracing::debug;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Bookings are settled from the Elite Card wallet unless a request says
/// otherwise.
pub const DEFAULT_PAYMENT_MODE: &str = "WALLET";

/// Time zone the facility's "today" is computed in when none is configured.
const FALLBACK_TIME_ZONE: Tz = Tz::Asia__Kolkata;

// --- Data Structures ---

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct SlotsQuery {
    /// Sport identifier
    #[cfg_attr(feature = "openapi", schema(example = 3))]
    pub sport_id: i64,

    /// Selected date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-08-06"))]
    pub date: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SlotListResponse {
    pub slots: Vec<Slot>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookSlotRequest {
    #[cfg_attr(feature = "openapi", schema(example = 3))]
    pub sport_id: i64,
    #[cfg_attr(feature = "openapi", schema(example = 42))]
    pub slot_id: i64,
    /// Date the slot list was rendered for, YYYY-MM-DD
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-08-06"))]
    pub date: String,
    /// Defaults to the configured payment mode (normally WALLET)
    pub payment_mode: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
    pub booking: Option<Booking>,
    /// Availability for (sport, date) re-fetched after the attempt
    pub slots: Vec<Slot>,
}

/// A created booking together with the refreshed slot list.
#[derive(Debug)]
pub struct BookingConfirmation {
    pub booking: Booking,
    pub slots: Vec<Slot>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookingListResponse {
    pub bookings: Vec<Booking>,
}

/// Admin request to block a slot by booking it for a named walk-in.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BlockSlotRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Walk-in: maintenance"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = "9876543210"))]
    pub phone: String,
    #[cfg_attr(feature = "openapi", schema(example = 42))]
    pub slot_id: i64,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BlockSlotResponse {
    pub success: bool,
    pub message: String,
    pub booking: Option<Booking>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct DayOverviewQuery {
    pub sport_id: i64,
    /// Date in YYYY-MM-DD format
    pub date: String,
}

// --- Slot Time Filter ---

/// Parses a slot time-of-day. Accepts 24-hour "HH:MM" (the upstream wire
/// format), "HH:MM:SS", and 12-hour "hh:MM AM/PM" as rendered to players.
pub fn parse_slot_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .or_else(|_| NaiveTime::parse_from_str(raw, "%I:%M %p"))
        .ok()
}

/// True when a slot should be offered as bookable "now or later".
///
/// Future dates are always in, past dates always out; on the current date a
/// slot stays visible while its end time is still ahead of the clock. A slot
/// whose end time cannot be parsed is never offered. An end of "00:00" reads
/// as start-of-day, so the final slot of a day drops off once that day
/// begins.
pub fn is_present_or_future_slot(
    selected_date: NaiveDate,
    end_time: &str,
    now: DateTime<Tz>,
) -> bool {
    let today = now.date_naive();
    if selected_date > today {
        return true;
    }
    if selected_date < today {
        return false;
    }
    match parse_slot_time(end_time) {
        Some(end) => end > now.time(),
        None => {
            debug!("Unparseable slot end time {:?}, hiding slot", end_time);
            false
        }
    }
}

/// Filters a slot list down to the present-or-future slots for the selected
/// date and orders them by start time (unparseable start times sort last).
pub fn visible_slots(slots: Vec<Slot>, selected_date: NaiveDate, now: DateTime<Tz>) -> Vec<Slot> {
    let mut visible: Vec<Slot> = slots
        .into_iter()
        .filter(|slot| is_present_or_future_slot(selected_date, &slot.end_time, now))
        .collect();
    visible.sort_by(|a, b| {
        match (parse_slot_time(&a.start_time), parse_slot_time(&b.start_time)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.start_time.cmp(&b.start_time),
        }
    });
    visible
}

// --- Helpers shared by the handlers ---

/// Parses a YYYY-MM-DD query parameter.
pub fn parse_query_date(raw: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDate(format!("Invalid date format (YYYY-MM-DD): {raw}")))
}

/// The time zone the facility's wall clock runs in.
pub fn facility_time_zone(config: &AppConfig) -> Tz {
    config
        .booking
        .as_ref()
        .and_then(|booking| booking.time_zone.as_deref())
        .and_then(|name| Tz::from_str(name).ok())
        .unwrap_or(FALLBACK_TIME_ZONE)
}

/// Payment mode to send upstream for a booking request.
pub fn resolve_payment_mode(config: &AppConfig, requested: Option<&str>) -> String {
    requested
        .map(str::to_string)
        .or_else(|| {
            config
                .booking
                .as_ref()
                .and_then(|booking| booking.default_payment_mode.clone())
        })
        .unwrap_or_else(|| DEFAULT_PAYMENT_MODE.to_string())
}

// --- Availability Flow ---

/// Fetches the slot list for (sport, date) and applies the visibility
/// filter. This is the only place the filter runs, so every caller sees the
/// same availability rule.
pub async fn fetch_visible_slots<A>(
    api: &A,
    tz: Tz,
    sport_id: i64,
    date: NaiveDate,
) -> Result<Vec<Slot>, BookingError>
where
    A: BookingApi<Error = BookingError> + ?Sized,
{
    let slots = api.list_slots(sport_id, date).await?;
    let now = chrono::Utc::now().with_timezone(&tz);
    Ok(visible_slots(slots, date, now))
}

// --- Booking Flow ---

/// Submits a booking for an offered slot and re-fetches availability.
///
/// The pre-check against a fresh slot list is advisory only; the upstream
/// core API is the sole authority on conflicts. Any upstream rejection is
/// reported as `SlotUnavailable`, carrying the availability re-fetched
/// after the failure so the caller never renders stale state.
pub async fn confirm_booking<A>(
    api: &A,
    tz: Tz,
    user_id: i64,
    sport_id: i64,
    date: NaiveDate,
    slot_id: i64,
    payment_mode: &str,
) -> Result<BookingConfirmation, BookingError>
where
    A: BookingApi<Error = BookingError> + ?Sized,
{
    let offered = fetch_visible_slots(api, tz, sport_id, date).await?;
    match offered.iter().find(|slot| slot.id == slot_id) {
        None => {
            return Err(BookingError::SlotUnavailable {
                message: "Selected slot is not offered for this date.".to_string(),
                slots: offered,
            });
        }
        Some(slot) if slot.booked => {
            return Err(BookingError::SlotUnavailable {
                message: "Slot already booked.".to_string(),
                slots: offered,
            });
        }
        Some(_) => {}
    }

    match api.book_slot(user_id, slot_id, payment_mode).await {
        Ok(booking) => {
            let slots = fetch_visible_slots(api, tz, sport_id, date).await?;
            Ok(BookingConfirmation { booking, slots })
        }
        Err(BookingError::ApiError { message, .. }) => {
            // The attempt failed upstream; refresh availability so the
            // caller sees the post-failure truth. Best effort: a refresh
            // failure must not mask the booking error.
            let slots = fetch_visible_slots(api, tz, sport_id, date)
                .await
                .unwrap_or_default();
            Err(BookingError::SlotUnavailable { message, slots })
        }
        Err(other) => Err(other),
    }
}
