use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for one site setting entry
#[derive(Debug, Clone, FromRow)]
pub struct SiteSetting {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}
