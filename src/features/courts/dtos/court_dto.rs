use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::courts::models::Court;

/// Query parameters for listing courts
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct CourtQuery {
    /// Restrict to one sport category
    pub category_id: Option<Uuid>,
}

/// Request DTO for creating a court
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCourtDto {
    pub category_id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[serde(rename = "type")]
    pub court_type: Option<String>,

    pub description: Option<String>,

    /// Hourly price; zero is allowed for free courts
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
}

/// Request DTO for updating a court; omitted fields keep their value
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCourtDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub court_type: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,

    pub is_active: Option<bool>,
}

/// Response DTO for court
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CourtResponseDto {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub court_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Court> for CourtResponseDto {
    fn from(c: Court) -> Self {
        Self {
            id: c.id,
            category_id: c.category_id,
            name: c.name,
            court_type: c.court_type,
            description: c.description,
            price: c.price,
            image_url: c.image_url,
            is_active: c.is_active,
            created_at: c.created_at,
        }
    }
}
