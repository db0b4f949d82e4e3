use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for an admin-declared closure window.
///
/// Closings are immutable in place: they are created and deleted, never
/// edited, so the allocator can treat a loaded snapshot as authoritative.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryClosing {
    pub id: Uuid,
    pub category_id: Uuid,
    pub closing_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}
