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
use crate::features::news::dtos::{CreateNewsDto, NewsResponseDto, UpdateNewsDto};
use crate::features::news::services::NewsService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List news posts, newest first
#[utoipa::path(
    get,
    path = "/api/news",
    params(PaginationQuery),
    responses(
        (status = 200, description = "News posts", body = ApiResponse<Vec<NewsResponseDto>>)
    ),
    tag = "news"
)]
pub async fn list_news(
    State(service): State<Arc<NewsService>>,
    Query(page): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<NewsResponseDto>>>> {
    let (posts, total) = service.list(&page).await?;
    Ok(Json(ApiResponse::success(
        Some(posts),
        None,
        Some(Meta { total }),
    )))
}

/// Get a news post by ID
#[utoipa::path(
    get,
    path = "/api/news/{id}",
    params(
        ("id" = Uuid, Path, description = "News post ID")
    ),
    responses(
        (status = 200, description = "News post", body = ApiResponse<NewsResponseDto>),
        (status = 404, description = "News post not found")
    ),
    tag = "news"
)]
pub async fn get_news(
    State(service): State<Arc<NewsService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<NewsResponseDto>>> {
    let post = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(post), None, None)))
}

/// Publish a news post
#[utoipa::path(
    post,
    path = "/api/news",
    request_body = CreateNewsDto,
    responses(
        (status = 200, description = "News post published", body = ApiResponse<NewsResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Staff access required")
    ),
    tag = "news",
    security(("bearer_auth" = []))
)]
pub async fn create_news(
    RequireStaff(user): RequireStaff,
    State(service): State<Arc<NewsService>>,
    AppJson(dto): AppJson<CreateNewsDto>,
) -> Result<Json<ApiResponse<NewsResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let post = service.create(user.id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(post),
        Some("News post published".to_string()),
        None,
    )))
}

/// Edit a news post
#[utoipa::path(
    put,
    path = "/api/news/{id}",
    params(
        ("id" = Uuid, Path, description = "News post ID")
    ),
    request_body = UpdateNewsDto,
    responses(
        (status = 200, description = "News post updated", body = ApiResponse<NewsResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "News post not found")
    ),
    tag = "news",
    security(("bearer_auth" = []))
)]
pub async fn update_news(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<NewsService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateNewsDto>,
) -> Result<Json<ApiResponse<NewsResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let post = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(post),
        Some("News post updated".to_string()),
        None,
    )))
}

/// Delete a news post
#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    params(
        ("id" = Uuid, Path, description = "News post ID")
    ),
    responses(
        (status = 200, description = "News post deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Staff access required"),
        (status = 404, description = "News post not found")
    ),
    tag = "news",
    security(("bearer_auth" = []))
)]
pub async fn delete_news(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<NewsService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("News post deleted".to_string()),
        None,
    )))
}
