use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Read-only routes served without authentication
pub fn public_routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/{id}", get(handlers::get_category))
        .route(
            "/api/categories/{id}/closings",
            get(handlers::list_closings),
        )
        .with_state(service)
}

/// Management routes; role checks happen in the handlers (admin for
/// categories, staff for closings)
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/categories", post(handlers::create_category))
        .route("/api/categories/{id}", put(handlers::update_category))
        .route("/api/categories/{id}", delete(handlers::delete_category))
        .route(
            "/api/categories/{id}/closings",
            post(handlers::create_closing),
        )
        .route(
            "/api/categories/closings/{id}",
            delete(handlers::delete_closing),
        )
        .with_state(service)
}
