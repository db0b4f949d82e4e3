use std::sync::Arc;

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Admin management routes
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users", get(handlers::list_users))
        .route("/api/users/{id}/role", put(handlers::update_user_role))
        .route("/api/users/{id}", put(handlers::update_user))
        .route("/api/users/{id}", delete(handlers::delete_user))
        .with_state(service)
}
