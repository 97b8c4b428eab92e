// File: crates/playbox_booking/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    BlockSlotRequest, BlockSlotResponse, BookSlotRequest, BookingListResponse, BookingResponse,
    DayOverviewQuery, SlotListResponse, SlotsQuery,
};
use playbox_common::models::{
    AdminSlotStatus, AdminSportDayOverview, Booking, Slot, SlotDetails, Sport,
};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/sports",
    responses(
        (status = 200, description = "Sports on offer", body = Vec<Sport>),
        (status = 502, description = "Core API unreachable", body = String)
    )
)]
fn doc_get_sports_handler() {}

#[utoipa::path(
    get,
    path = "/slots",
    params(
        ("sport_id" = i64, Query, description = "Sport identifier", example = 3),
        ("date" = String, Query, description = "Selected date in YYYY-MM-DD format", example = "2026-08-06", format = "date")
    ),
    responses(
        (status = 200, description = "Present-or-future slots for the selected date", body = SlotListResponse),
        (status = 400, description = "Invalid date format", body = String),
        (status = 502, description = "Core API unreachable", body = String)
    )
)]
fn doc_get_slots_handler() {}

#[utoipa::path(
    get,
    path = "/slots/{slot_id}",
    params(
        ("slot_id" = i64, Path, description = "The slot to fetch")
    ),
    responses(
        (status = 200, description = "Slot detail including owning sport", body = SlotDetails),
        (status = 404, description = "Slot not found", body = String)
    )
)]
fn doc_get_slot_handler() {}

#[utoipa::path(
    post,
    path = "/bookings/book",
    request_body(content = BookSlotRequest, example = json!({
        "sport_id": 3,
        "slot_id": 42,
        "date": "2026-08-06",
        "payment_mode": "WALLET"
    })),
    responses(
        (status = 200, description = "Booking confirmed; slots re-fetched", body = BookingResponse,
         example = json!({
             "success": true,
             "message": "Slot booked successfully.",
             "booking": null,
             "slots": []
         })
        ),
        (status = 401, description = "Missing or expired session"),
        (status = 409, description = "Slot no longer available; body carries refreshed availability", body = BookingResponse,
         example = json!({
             "success": false,
             "message": "Slot already booked.",
             "booking": null,
             "slots": []
         })
        )
    )
)]
fn doc_book_slot_handler() {}

#[utoipa::path(
    get,
    path = "/bookings/me",
    responses(
        (status = 200, description = "The session player's bookings", body = BookingListResponse),
        (status = 401, description = "Missing or expired session")
    )
)]
fn doc_my_bookings_handler() {}

#[utoipa::path(
    get,
    path = "/admin/day-overview",
    params(
        ("sport_id" = i64, Query, description = "Sport identifier"),
        ("date" = String, Query, description = "Date in YYYY-MM-DD format", format = "date")
    ),
    responses(
        (status = 200, description = "Per-slot booking status for the day", body = AdminSportDayOverview),
        (status = 401, description = "Admin session required")
    )
)]
fn doc_day_overview_handler() {}

#[utoipa::path(
    post,
    path = "/admin/block-slot",
    request_body(content = BlockSlotRequest),
    responses(
        (status = 200, description = "Slot blocked via manual booking", body = BlockSlotResponse),
        (status = 401, description = "Admin session required"),
        (status = 409, description = "Slot already booked", body = String)
    )
)]
fn doc_block_slot_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_sports_handler,
        doc_get_slots_handler,
        doc_get_slot_handler,
        doc_book_slot_handler,
        doc_my_bookings_handler,
        doc_day_overview_handler,
        doc_block_slot_handler
    ),
    components(
        schemas(
            SlotsQuery,
            SlotListResponse,
            BookSlotRequest,
            BookingResponse,
            BookingListResponse,
            BlockSlotRequest,
            BlockSlotResponse,
            DayOverviewQuery,
            Sport,
            Slot,
            SlotDetails,
            Booking,
            AdminSlotStatus,
            AdminSportDayOverview
        )
    ),
    tags(
        (name = "booking", description = "Slot availability and booking API")
    ),
    servers(
        (url = "/api", description = "Main API prefix")
    )
)]
pub struct BookingApiDoc;
