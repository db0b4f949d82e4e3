use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireStaff;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::bookings::dtos::{
    BookingResponseDto, CreateBookingDto, UpdateBookingStatusDto,
};
use crate::features::bookings::services::BookingService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Book a court slot
#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingDto,
    responses(
        (status = 200, description = "Booking created", body = ApiResponse<BookingResponseDto>),
        (status = 400, description = "Validation error or request outside operating hours"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Slot reserved for walk-in registration"),
        (status = 404, description = "Court not found"),
        (status = 409, description = "Slot rejected (conflict, quota, or closure)")
    ),
    tag = "bookings",
    security(("bearer_auth" = []))
)]
pub async fn create_booking(
    user: AuthenticatedUser,
    State(service): State<Arc<BookingService>>,
    AppJson(dto): AppJson<CreateBookingDto>,
) -> Result<Json<ApiResponse<BookingResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let booking = service.create(&user, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(booking),
        Some("Booking created".to_string()),
        None,
    )))
}

/// List the authenticated user's bookings
#[utoipa::path(
    get,
    path = "/api/bookings/me",
    responses(
        (status = 200, description = "Bookings held by the caller", body = ApiResponse<Vec<BookingResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "bookings",
    security(("bearer_auth" = []))
)]
pub async fn list_my_bookings(
    user: AuthenticatedUser,
    State(service): State<Arc<BookingService>>,
) -> Result<Json<ApiResponse<Vec<BookingResponseDto>>>> {
    let bookings = service.list_by_user(user.id).await?;
    Ok(Json(ApiResponse::success(Some(bookings), None, None)))
}

/// List all bookings (staff schedule view)
#[utoipa::path(
    get,
    path = "/api/bookings",
    params(PaginationQuery),
    responses(
        (status = 200, description = "All bookings, paginated", body = ApiResponse<Vec<BookingResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Staff access required")
    ),
    tag = "bookings",
    security(("bearer_auth" = []))
)]
pub async fn list_bookings(
    RequireStaff(_user): RequireStaff,
    State(service): State<Arc<BookingService>>,
    Query(page): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<BookingResponseDto>>>> {
    let (bookings, total) = service.list_all(&page).await?;
    Ok(Json(ApiResponse::success(
        Some(bookings),
        None,
        Some(Meta { total }),
    )))
}

/// Bookings for a date, for the public availability grid
#[utoipa::path(
    get,
    path = "/api/bookings/date/{date}",
    params(
        ("date" = String, Path, description = "Calendar date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Bookings on that date", body = ApiResponse<Vec<BookingResponseDto>>),
        (status = 400, description = "Malformed date")
    ),
    tag = "bookings"
)]
pub async fn list_bookings_by_date(
    State(service): State<Arc<BookingService>>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<ApiResponse<Vec<BookingResponseDto>>>> {
    let bookings = service.list_by_date(date).await?;
    Ok(Json(ApiResponse::success(Some(bookings), None, None)))
}

/// Transition a booking's status
///
/// Staff may approve or cancel any booking; owners may cancel their own.
#[utoipa::path(
    put,
    path = "/api/bookings/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<BookingResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller may not change this booking"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Transition not allowed from current status")
    ),
    tag = "bookings",
    security(("bearer_auth" = []))
)]
pub async fn update_booking_status(
    user: AuthenticatedUser,
    State(service): State<Arc<BookingService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateBookingStatusDto>,
) -> Result<Json<ApiResponse<BookingResponseDto>>> {
    let booking = service.update_status(id, dto.status, &user).await?;
    Ok(Json(ApiResponse::success(
        Some(booking),
        Some("Booking status updated".to_string()),
        None,
    )))
}
