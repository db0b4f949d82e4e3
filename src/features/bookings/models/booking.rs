use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Booking status enum matching database enum
///
/// Lifecycle: a booking is created `pending`, approved to `paid` by staff, and
/// voided to `cancelled` by its owner or staff. `cancelled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Paid,
    Cancelled,
}

impl BookingStatus {
    /// The allowed transition set. Everything else, including re-activating a
    /// cancelled booking or "transitioning" to the current status, is invalid.
    pub fn can_transition(self, to: BookingStatus) -> bool {
        matches!(
            (self, to),
            (BookingStatus::Pending, BookingStatus::Paid)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Paid, BookingStatus::Cancelled)
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Paid => write!(f, "paid"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Database model for booking
///
/// Court, date and time fields are immutable after insert; changing a slot is
/// modeled as cancel + re-book.
#[derive(Debug, Clone, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub court_id: Uuid,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: BookingStatus,
    pub payment_proof_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::BookingStatus::*;

    #[test]
    fn test_allowed_transitions() {
        assert!(Pending.can_transition(Paid));
        assert!(Pending.can_transition(Cancelled));
        assert!(Paid.can_transition(Cancelled));
    }

    #[test]
    fn test_cancelled_is_terminal() {
        assert!(!Cancelled.can_transition(Pending));
        assert!(!Cancelled.can_transition(Paid));
        assert!(!Cancelled.can_transition(Cancelled));
    }

    #[test]
    fn test_no_regressions_or_self_transitions() {
        assert!(!Paid.can_transition(Pending));
        assert!(!Pending.can_transition(Pending));
        assert!(!Paid.can_transition(Paid));
    }
}
