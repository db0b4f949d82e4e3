use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::{CategoryClosing, SportCategory};
use crate::shared::validation::TIME_REGEX;

/// Request DTO for creating a sport category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,

    /// Daily opening time, "HH:MM"
    #[validate(regex(path = *TIME_REGEX, message = "open_time must be HH:MM"))]
    pub open_time: String,

    /// Daily closing time, "HH:MM"
    #[validate(regex(path = *TIME_REGEX, message = "close_time must be HH:MM"))]
    pub close_time: String,
}

/// Request DTO for updating a sport category; omitted fields keep their value
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,

    pub is_active: Option<bool>,

    #[validate(regex(path = *TIME_REGEX, message = "open_time must be HH:MM"))]
    pub open_time: Option<String>,

    #[validate(regex(path = *TIME_REGEX, message = "close_time must be HH:MM"))]
    pub close_time: Option<String>,
}

/// Response DTO for sport category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_active: bool,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

impl From<SportCategory> for CategoryResponseDto {
    fn from(c: SportCategory) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            image_url: c.image_url,
            is_active: c.is_active,
            open_time: c.open_time,
            close_time: c.close_time,
            created_at: c.created_at,
        }
    }
}

/// Request DTO for declaring a closure window
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateClosingDto {
    pub closing_date: NaiveDate,

    #[validate(regex(path = *TIME_REGEX, message = "start_time must be HH:MM"))]
    pub start_time: String,

    #[validate(regex(path = *TIME_REGEX, message = "end_time must be HH:MM"))]
    pub end_time: String,

    #[validate(length(max = 200, message = "Reason must be at most 200 characters"))]
    pub reason: Option<String>,
}

/// Response DTO for a closure window
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClosingResponseDto {
    pub id: Uuid,
    pub category_id: Uuid,
    pub closing_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<CategoryClosing> for ClosingResponseDto {
    fn from(c: CategoryClosing) -> Self {
        Self {
            id: c.id,
            category_id: c.category_id,
            closing_date: c.closing_date,
            start_time: c.start_time,
            end_time: c.end_time,
            reason: c.reason,
            created_at: c.created_at,
        }
    }
}
