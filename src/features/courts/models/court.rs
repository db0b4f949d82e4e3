use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a court
#[derive(Debug, Clone, FromRow)]
pub struct Court {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    /// Free-form kind label, e.g. "indoor" or "grass"
    #[sqlx(rename = "type")]
    pub court_type: Option<String>,
    pub description: Option<String>,
    /// Hourly price
    pub price: Decimal,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
