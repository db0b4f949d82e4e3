use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::settings::handlers;
use crate::features::settings::services::SettingService;

/// Read-only route served without authentication
pub fn public_routes(service: Arc<SettingService>) -> Router {
    Router::new()
        .route("/api/settings", get(handlers::get_settings))
        .with_state(service)
}

/// Admin management route
pub fn routes(service: Arc<SettingService>) -> Router {
    Router::new()
        .route("/api/settings", put(handlers::update_settings))
        .with_state(service)
}
