// File: crates/playbox_booking/src/handlers.rs
use crate::client::BookingApiClient;
use crate::error::BookingError;
use crate::logic::{
    confirm_booking, facility_time_zone, fetch_visible_slots, parse_query_date,
    resolve_payment_mode, BlockSlotRequest, BlockSlotResponse, BookSlotRequest,
    BookingListResponse, BookingResponse, DayOverviewQuery, SlotListResponse, SlotsQuery,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use http::HeaderMap;
use playbox_common::models::{AdminSportDayOverview, SlotDetails, Sport};
use playbox_common::services::{require_admin, require_session, SessionStore};
use playbox_common::{map_json_error, HttpStatusCode, IntoHttpResponse, PlayboxError};
use playbox_config::AppConfig;
use std::sync::Arc;
use tracing::info;

// Shared state for the booking handlers
#[derive(Clone)]
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub client: Arc<BookingApiClient>,
    pub sessions: Arc<dyn SessionStore>,
}

fn error_response(err: BookingError) -> (StatusCode, String) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string())
}

fn auth_response(err: PlayboxError) -> (StatusCode, String) {
    (StatusCode::UNAUTHORIZED, err.to_string())
}

/// Handler to list the sports on offer.
#[axum::debug_handler]
pub async fn get_sports_handler(
    State(state): State<Arc<BookingState>>,
) -> Result<Json<Vec<Sport>>, Response> {
    map_json_error(state.client.list_sports().await, PlayboxError::from)
}

/// Handler to get the bookable slots for a sport on a date.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/slots", // Path relative to /api
    params(SlotsQuery),
    responses(
        (status = 200, description = "Present-or-future slots for the selected date", body = SlotListResponse),
        (status = 400, description = "Bad request (e.g., invalid date format)"),
        (status = 502, description = "Core API unreachable")
    ),
    tag = "Booking"
))]
pub async fn get_slots_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotListResponse>, (StatusCode, String)> {
    // Ensure the booking feature is enabled via runtime config
    if !state.config.use_booking {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Booking service is disabled.".to_string(),
        ));
    }

    let date = parse_query_date(&query.date).map_err(error_response)?;
    let tz = facility_time_zone(&state.config);

    match fetch_visible_slots(state.client.as_ref(), tz, query.sport_id, date).await {
        Ok(slots) => Ok(Json(SlotListResponse { slots })),
        Err(e) => {
            info!("Error fetching slots: {}", e);
            Err(error_response(e))
        }
    }
}

/// Handler to fetch a single slot with its owning sport.
#[axum::debug_handler]
pub async fn get_slot_handler(
    State(state): State<Arc<BookingState>>,
    Path(slot_id): Path<i64>,
) -> Result<Json<SlotDetails>, (StatusCode, String)> {
    match state.client.slot_details(slot_id).await {
        Ok(details) => Ok(Json(details)),
        Err(e) => {
            info!("Error fetching slot {}: {}", slot_id, e);
            Err(error_response(e))
        }
    }
}

/// Handler to book a slot for the session's player.
///
/// On an upstream rejection the response is 409 with the availability
/// re-fetched after the failed attempt, so the caller can re-render without
/// another round-trip.
#[axum::debug_handler]
pub async fn book_slot_handler(
    State(state): State<Arc<BookingState>>,
    headers: HeaderMap,
    Json(payload): Json<BookSlotRequest>,
) -> Result<Json<BookingResponse>, Response> {
    if !state.config.use_booking {
        return Err(
            PlayboxError::ConfigError("Booking service is disabled.".to_string())
                .into_http_response(),
        );
    }

    let session = require_session(state.sessions.as_ref(), &headers)
        .map_err(|e| e.into_http_response())?;

    let date = parse_query_date(&payload.date)
        .map_err(|e| PlayboxError::from(e).into_http_response())?;
    let tz = facility_time_zone(&state.config);
    let payment_mode = resolve_payment_mode(&state.config, payload.payment_mode.as_deref());

    match confirm_booking(
        state.client.as_ref(),
        tz,
        session.user_id,
        payload.sport_id,
        date,
        payload.slot_id,
        &payment_mode,
    )
    .await
    {
        Ok(confirmation) => {
            info!(
                "Booking {} confirmed for user {} (slot {})",
                confirmation.booking.id, session.user_id, payload.slot_id
            );
            Ok(Json(BookingResponse {
                success: true,
                message: "Slot booked successfully.".to_string(),
                booking: Some(confirmation.booking),
                slots: confirmation.slots,
            }))
        }
        Err(BookingError::SlotUnavailable { message, slots }) => {
            info!(
                "Booking rejected for user {} (slot {}): {}",
                session.user_id, payload.slot_id, message
            );
            Err((
                StatusCode::CONFLICT,
                Json(BookingResponse {
                    success: false,
                    message,
                    booking: None,
                    slots,
                }),
            )
                .into_response())
        }
        Err(e) => {
            info!("Error booking slot {}: {}", payload.slot_id, e);
            Err(PlayboxError::from(e).into_http_response())
        }
    }
}

/// Handler to list the session player's bookings.
#[axum::debug_handler]
pub async fn my_bookings_handler(
    State(state): State<Arc<BookingState>>,
    headers: HeaderMap,
) -> Result<Json<BookingListResponse>, (StatusCode, String)> {
    let session = require_session(state.sessions.as_ref(), &headers).map_err(auth_response)?;

    match state.client.user_bookings(session.user_id).await {
        Ok(bookings) => Ok(Json(BookingListResponse { bookings })),
        Err(e) => {
            info!("Error fetching bookings for user {}: {}", session.user_id, e);
            Err(error_response(e))
        }
    }
}

/// Handler for the admin day overview of one sport.
#[axum::debug_handler]
pub async fn day_overview_handler(
    State(state): State<Arc<BookingState>>,
    headers: HeaderMap,
    Query(query): Query<DayOverviewQuery>,
) -> Result<Json<AdminSportDayOverview>, (StatusCode, String)> {
    require_admin(state.sessions.as_ref(), &headers).map_err(auth_response)?;

    let date = parse_query_date(&query.date).map_err(error_response)?;

    match state.client.day_overview(query.sport_id, date).await {
        Ok(overview) => Ok(Json(overview)),
        Err(e) => {
            info!("Error fetching day overview: {}", e);
            Err(error_response(e))
        }
    }
}

/// Handler to block a slot by booking it manually on behalf of a walk-in.
#[axum::debug_handler]
pub async fn block_slot_handler(
    State(state): State<Arc<BookingState>>,
    headers: HeaderMap,
    Json(payload): Json<BlockSlotRequest>,
) -> Result<Json<BlockSlotResponse>, (StatusCode, String)> {
    let admin = require_admin(state.sessions.as_ref(), &headers).map_err(auth_response)?;

    if payload.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Name is required".to_string()));
    }
    if payload.phone.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Phone is required".to_string()));
    }

    match state.client.manual_book(&payload).await {
        Ok(booking) => {
            info!(
                "Admin {} blocked slot {} (booking {})",
                admin.name, payload.slot_id, booking.id
            );
            Ok(Json(BlockSlotResponse {
                success: true,
                message: "Slot blocked.".to_string(),
                booking: Some(booking),
            }))
        }
        Err(e) => {
            info!("Error blocking slot {}: {}", payload.slot_id, e);
            Err(error_response(e))
        }
    }
}
