use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::settings::dtos::{SettingsResponseDto, UpdateSettingsDto};
use crate::features::settings::services::SettingService;
use crate::shared::types::ApiResponse;

/// Get all site settings
#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Site settings map", body = ApiResponse<SettingsResponseDto>)
    ),
    tag = "settings"
)]
pub async fn get_settings(
    State(service): State<Arc<SettingService>>,
) -> Result<Json<ApiResponse<SettingsResponseDto>>> {
    let settings = service.get_all().await?;
    Ok(Json(ApiResponse::success(Some(settings), None, None)))
}

/// Upsert site settings
#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = UpdateSettingsDto,
    responses(
        (status = 200, description = "Settings updated", body = ApiResponse<SettingsResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    tag = "settings",
    security(("bearer_auth" = []))
)]
pub async fn update_settings(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<SettingService>>,
    AppJson(dto): AppJson<UpdateSettingsDto>,
) -> Result<Json<ApiResponse<SettingsResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let settings = service.update(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(settings),
        Some("Settings updated".to_string()),
        None,
    )))
}
