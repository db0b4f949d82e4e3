use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::courts::handlers;
use crate::features::courts::services::CourtService;

/// Read-only routes served without authentication
pub fn public_routes(service: Arc<CourtService>) -> Router {
    Router::new()
        .route("/api/courts", get(handlers::list_courts))
        .route("/api/courts/{id}", get(handlers::get_court))
        .with_state(service)
}

/// Staff management routes
pub fn routes(service: Arc<CourtService>) -> Router {
    Router::new()
        .route("/api/courts", post(handlers::create_court))
        .route("/api/courts/{id}", put(handlers::update_court))
        .route("/api/courts/{id}", delete(handlers::delete_court))
        .with_state(service)
}
