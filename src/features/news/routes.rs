use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::news::handlers;
use crate::features::news::services::NewsService;

/// Read-only routes served without authentication
pub fn public_routes(service: Arc<NewsService>) -> Router {
    Router::new()
        .route("/api/news", get(handlers::list_news))
        .route("/api/news/{id}", get(handlers::get_news))
        .with_state(service)
}

/// Staff management routes
pub fn routes(service: Arc<NewsService>) -> Router {
    Router::new()
        .route("/api/news", post(handlers::create_news))
        .route("/api/news/{id}", put(handlers::update_news))
        .route("/api/news/{id}", delete(handlers::delete_news))
        .with_state(service)
}
