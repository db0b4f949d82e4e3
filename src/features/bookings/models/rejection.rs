use axum::http::StatusCode;

use crate::features::bookings::models::BookingStatus;

/// Why a booking request was turned down.
///
/// These are typed outcomes, not faults: the HTTP layer maps each variant to
/// a status code and a user-facing message, and none of them are logged as
/// errors. `SlotConflict` is the pre-check result; `SlotConflictAtCommit`
/// means the request lost a race at the storage guard and is worth retrying
/// with fresh data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    OutsideOperatingHours,
    ClosedForMaintenance { reason: String },
    WalkInOnly,
    DailyQuotaExceeded { hours_remaining: u32 },
    SlotConflict,
    SlotConflictAtCommit,
    InvalidTransition { from: BookingStatus, to: BookingStatus },
    Unauthenticated,
}

impl RejectionReason {
    /// Stable machine-readable code carried in the response body
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::OutsideOperatingHours => "outside_operating_hours",
            RejectionReason::ClosedForMaintenance { .. } => "closed_for_maintenance",
            RejectionReason::WalkInOnly => "walk_in_only",
            RejectionReason::DailyQuotaExceeded { .. } => "daily_quota_exceeded",
            RejectionReason::SlotConflict => "slot_conflict",
            RejectionReason::SlotConflictAtCommit => "slot_conflict_at_commit",
            RejectionReason::InvalidTransition { .. } => "invalid_transition",
            RejectionReason::Unauthenticated => "unauthenticated",
        }
    }

    pub fn http_status(&self) -> StatusCode {
        match self {
            RejectionReason::OutsideOperatingHours => StatusCode::BAD_REQUEST,
            RejectionReason::Unauthenticated => StatusCode::UNAUTHORIZED,
            RejectionReason::WalkInOnly => StatusCode::FORBIDDEN,
            RejectionReason::ClosedForMaintenance { .. }
            | RejectionReason::DailyQuotaExceeded { .. }
            | RejectionReason::SlotConflict
            | RejectionReason::SlotConflictAtCommit
            | RejectionReason::InvalidTransition { .. } => StatusCode::CONFLICT,
        }
    }
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::OutsideOperatingHours => {
                write!(f, "Requested time is outside operating hours")
            }
            RejectionReason::ClosedForMaintenance { reason } => write!(f, "Closed: {}", reason),
            RejectionReason::WalkInOnly => write!(
                f,
                "This time range is reserved for walk-in use and cannot be booked online"
            ),
            RejectionReason::DailyQuotaExceeded { hours_remaining } => write!(
                f,
                "Daily booking limit reached ({} hour(s) remaining today)",
                hours_remaining
            ),
            RejectionReason::SlotConflict => write!(f, "This time slot is already booked"),
            RejectionReason::SlotConflictAtCommit => {
                write!(f, "Someone just booked this time slot, please pick another")
            }
            RejectionReason::InvalidTransition { from, to } => {
                write!(f, "Booking status cannot change from {} to {}", from, to)
            }
            RejectionReason::Unauthenticated => write!(f, "Authentication required"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precheck_and_commit_conflicts_are_distinct() {
        // Callers retry on a commit-time loss but not on a pre-check conflict,
        // so the two must stay distinguishable.
        assert_ne!(RejectionReason::SlotConflict, RejectionReason::SlotConflictAtCommit);
        assert_ne!(
            RejectionReason::SlotConflict.code(),
            RejectionReason::SlotConflictAtCommit.code()
        );
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            RejectionReason::OutsideOperatingHours.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RejectionReason::Unauthenticated.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(RejectionReason::WalkInOnly.http_status(), StatusCode::FORBIDDEN);
        assert_eq!(RejectionReason::SlotConflict.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            RejectionReason::DailyQuotaExceeded { hours_remaining: 0 }.http_status(),
            StatusCode::CONFLICT
        );
    }
}
