use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::bookings::models::{Booking, BookingStatus};
use crate::shared::validation::TIME_REGEX;

/// Request DTO for creating a booking
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBookingDto {
    pub court_id: Uuid,

    /// Calendar date of the booking (no timezone component)
    pub booking_date: NaiveDate,

    /// Hour-aligned start time, "HH:MM" or "HH:MM:SS"
    #[validate(regex(path = *TIME_REGEX, message = "start_time must be HH:MM"))]
    pub start_time: String,

    /// Hour-aligned end time, "HH:MM" or "HH:MM:SS"
    #[validate(regex(path = *TIME_REGEX, message = "end_time must be HH:MM"))]
    pub end_time: String,

    /// Reference to the uploaded payment proof (opaque to this service)
    #[validate(url(message = "payment_proof_url must be a valid URL"))]
    pub payment_proof_url: Option<String>,
}

/// Request DTO for a status transition
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookingStatusDto {
    pub status: BookingStatus,
}

/// Response DTO for booking
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingResponseDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub court_id: Uuid,
    /// Present on listings that join court details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_name: Option<String>,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_proof_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponseDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            user_id: b.user_id,
            court_id: b.court_id,
            court_name: None,
            booking_date: b.booking_date,
            start_time: b.start_time,
            end_time: b.end_time,
            status: b.status,
            payment_proof_url: b.payment_proof_url,
            created_at: b.created_at,
        }
    }
}
