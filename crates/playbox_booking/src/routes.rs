// --- File: crates/playbox_booking/src/routes.rs ---

use crate::client::BookingApiClient;
use crate::handlers::{
    block_slot_handler, book_slot_handler, day_overview_handler, get_slot_handler,
    get_slots_handler, get_sports_handler, my_bookings_handler, BookingState,
};
use axum::{
    routing::{get, post},
    Router,
};
use playbox_common::services::SessionStore;
use playbox_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the booking feature.
///
/// The upstream client is built from the core API config; the session store
/// is shared with the identity feature so booking routes can resolve bearer
/// tokens.
pub fn routes(config: Arc<AppConfig>, sessions: Arc<dyn SessionStore>) -> Router {
    let core_api = config
        .core_api
        .as_ref()
        .expect("Core API config missing");
    let booking_state = Arc::new(BookingState {
        client: Arc::new(BookingApiClient::from_config(core_api)),
        config,
        sessions,
    });

    Router::new()
        .route("/sports", get(get_sports_handler))
        .route("/slots", get(get_slots_handler))
        .route("/slots/{slot_id}", get(get_slot_handler))
        .route("/bookings/book", post(book_slot_handler))
        .route("/bookings/me", get(my_bookings_handler))
        .route("/admin/day-overview", get(day_overview_handler))
        .route("/admin/block-slot", post(block_slot_handler))
        .with_state(booking_state)
}
