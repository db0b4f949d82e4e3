use chrono::{DateTime, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a sport category.
///
/// The operating window (`open_time`..`close_time`) applies to every court in
/// the category and bounds what the allocator will accept.
#[derive(Debug, Clone, FromRow)]
pub struct SportCategory {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
