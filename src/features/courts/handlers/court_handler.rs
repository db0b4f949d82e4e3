use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireStaff;
use crate::features::courts::dtos::{
    CourtQuery, CourtResponseDto, CreateCourtDto, UpdateCourtDto,
};
use crate::features::courts::services::CourtService;
use crate::shared::types::ApiResponse;

/// List courts
#[utoipa::path(
    get,
    path = "/api/courts",
    params(CourtQuery),
    responses(
        (status = 200, description = "List of courts", body = ApiResponse<Vec<CourtResponseDto>>)
    ),
    tag = "courts"
)]
pub async fn list_courts(
    State(service): State<Arc<CourtService>>,
    Query(query): Query<CourtQuery>,
) -> Result<Json<ApiResponse<Vec<CourtResponseDto>>>> {
    let courts = service.list(query.category_id).await?;
    Ok(Json(ApiResponse::success(Some(courts), None, None)))
}

/// Get a court by ID
#[utoipa::path(
    get,
    path = "/api/courts/{id}",
    params(
        ("id" = Uuid, Path, description = "Court ID")
    ),
    responses(
        (status = 200, description = "Court details", body = ApiResponse<CourtResponseDto>),
        (status = 404, description = "Court not found")
    ),
    tag = "courts"
)]
pub async fn get_court(
    State(service): State<Arc<CourtService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CourtResponseDto>>> {
    let court = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(court), None, None)))
}

/// Create a court
#[utoipa::path(
    post,
    path = "/api/courts",
    request_body = CreateCourtDto,
    responses(
        (status = 200, description = "Court created", body = ApiResponse<CourtResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Category not found")
    ),
    tag = "courts",
    security(("bearer_auth" = []))
)]
pub async fn create_court(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<CourtService>>,
    AppJson(dto): AppJson<CreateCourtDto>,
) -> Result<Json<ApiResponse<CourtResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let court = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(court),
        Some("Court created".to_string()),
        None,
    )))
}

/// Update a court
#[utoipa::path(
    put,
    path = "/api/courts/{id}",
    params(
        ("id" = Uuid, Path, description = "Court ID")
    ),
    request_body = UpdateCourtDto,
    responses(
        (status = 200, description = "Court updated", body = ApiResponse<CourtResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Court not found")
    ),
    tag = "courts",
    security(("bearer_auth" = []))
)]
pub async fn update_court(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<CourtService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateCourtDto>,
) -> Result<Json<ApiResponse<CourtResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let court = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(court),
        Some("Court updated".to_string()),
        None,
    )))
}

/// Delete a court
#[utoipa::path(
    delete,
    path = "/api/courts/{id}",
    params(
        ("id" = Uuid, Path, description = "Court ID")
    ),
    responses(
        (status = 200, description = "Court deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "Court not found"),
        (status = 409, description = "Court has bookings")
    ),
    tag = "courts",
    security(("bearer_auth" = []))
)]
pub async fn delete_court(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<CourtService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Court deleted".to_string()),
        None,
    )))
}
