use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::bookings::handlers;
use crate::features::bookings::services::BookingService;

/// Routes that require authentication
pub fn routes(service: Arc<BookingService>) -> Router {
    Router::new()
        .route("/api/bookings", post(handlers::create_booking))
        .route("/api/bookings", get(handlers::list_bookings))
        .route("/api/bookings/me", get(handlers::list_my_bookings))
        .route(
            "/api/bookings/{id}/status",
            put(handlers::update_booking_status),
        )
        .with_state(service)
}

/// Routes served without authentication (availability grid)
pub fn public_routes(service: Arc<BookingService>) -> Router {
    Router::new()
        .route(
            "/api/bookings/date/{date}",
            get(handlers::list_bookings_by_date),
        )
        .with_state(service)
}
