//! Slot allocation decision logic.
//!
//! Pure functions over a snapshot of current state: given a requested hour
//! range and everything already known about the court, category and user for
//! that date, accept or reject with a typed reason. Checks run in a fixed
//! order and the first failure wins, so callers always get the most specific
//! reason. The conflict check here is a fast pre-check only; the final
//! authority is the overlap guard at the storage layer (see BookingService).

use chrono::{NaiveTime, Timelike};

use crate::features::bookings::models::RejectionReason;
use crate::shared::constants::{DAILY_QUOTA_HOURS, WALK_IN_END_HOUR, WALK_IN_START_HOUR};

/// A candidate booking, reduced to what the decision needs.
///
/// Times must be hour-aligned with `start_time < end_time`; the service layer
/// validates that before building a request.
#[derive(Debug, Clone)]
pub struct SlotRequest {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Category operating window for the court
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    /// Whether the requesting account belongs to the on-campus class that
    /// must use the walk-in window in person
    pub walk_in_restricted: bool,
}

impl SlotRequest {
    /// Requested duration in whole hours
    pub fn hours(&self) -> u32 {
        self.end_time.hour() - self.start_time.hour()
    }
}

/// An admin-declared closure window on the requested date
#[derive(Debug, Clone)]
pub struct ClosureWindow {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub reason: Option<String>,
}

/// Snapshot of existing state the decision is made against
#[derive(Debug, Clone, Default)]
pub struct AllocationContext {
    /// Closures for the court's category on the requested date
    pub closures: Vec<ClosureWindow>,
    /// Non-cancelled `[start, end)` intervals for the court on that date
    pub existing: Vec<(NaiveTime, NaiveTime)>,
    /// Hours the user already holds (non-cancelled) on that date, any court
    pub booked_hours: u32,
}

/// Half-open interval overlap: `[a_start, a_end)` intersects `[b_start, b_end)`
fn overlaps(a_start: NaiveTime, a_end: NaiveTime, b_start: NaiveTime, b_end: NaiveTime) -> bool {
    a_start < b_end && a_end > b_start
}

/// Decide whether a requested slot may be booked.
///
/// Check order (first failure wins): operating window, closures, walk-in
/// restriction, daily quota, conflicts with existing bookings.
pub fn evaluate(request: &SlotRequest, ctx: &AllocationContext) -> Result<(), RejectionReason> {
    // 1. Operating window
    if request.start_time < request.open_time || request.end_time > request.close_time {
        return Err(RejectionReason::OutsideOperatingHours);
    }

    // 2. Admin closures override everything bookable
    for closure in &ctx.closures {
        if overlaps(
            request.start_time,
            request.end_time,
            closure.start_time,
            closure.end_time,
        ) {
            return Err(RejectionReason::ClosedForMaintenance {
                reason: closure
                    .reason
                    .clone()
                    .unwrap_or_else(|| "Closed for maintenance".to_string()),
            });
        }
    }

    // 3. Walk-in-only window for on-campus accounts
    if request.walk_in_restricted
        && request.start_time.hour() < WALK_IN_END_HOUR
        && request.end_time.hour() > WALK_IN_START_HOUR
    {
        return Err(RejectionReason::WalkInOnly);
    }

    // 4. Daily quota across all courts
    if ctx.booked_hours + request.hours() > DAILY_QUOTA_HOURS {
        return Err(RejectionReason::DailyQuotaExceeded {
            hours_remaining: DAILY_QUOTA_HOURS.saturating_sub(ctx.booked_hours),
        });
    }

    // 5. Conflict pre-check against the snapshot
    for &(start, end) in &ctx.existing {
        if overlaps(request.start_time, request.end_time, start, end) {
            return Err(RejectionReason::SlotConflict);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
    }

    fn request(start: u32, end: u32) -> SlotRequest {
        SlotRequest {
            start_time: at(start),
            end_time: at(end),
            open_time: at(8),
            close_time: at(21),
            walk_in_restricted: false,
        }
    }

    fn closure(start: u32, end: u32, reason: Option<&str>) -> ClosureWindow {
        ClosureWindow {
            start_time: at(start),
            end_time: at(end),
            reason: reason.map(|r| r.to_string()),
        }
    }

    #[test]
    fn test_accepts_free_slot_in_window() {
        assert_eq!(evaluate(&request(16, 17), &AllocationContext::default()), Ok(()));
    }

    #[test]
    fn test_rejects_outside_operating_window() {
        let ctx = AllocationContext::default();
        assert_eq!(
            evaluate(&request(7, 8), &ctx),
            Err(RejectionReason::OutsideOperatingHours)
        );
        assert_eq!(
            evaluate(&request(20, 22), &ctx),
            Err(RejectionReason::OutsideOperatingHours)
        );
        // Boundary ranges are fine
        assert_eq!(evaluate(&request(8, 9), &ctx), Ok(()));
        assert_eq!(evaluate(&request(20, 21), &ctx), Ok(()));
    }

    #[test]
    fn test_rejects_closure_with_reason() {
        let ctx = AllocationContext {
            closures: vec![closure(12, 14, Some("Maintenance"))],
            ..Default::default()
        };
        assert_eq!(
            evaluate(&request(13, 14), &ctx),
            Err(RejectionReason::ClosedForMaintenance {
                reason: "Maintenance".to_string()
            })
        );
        // Adjacent to the closure is bookable
        assert_eq!(evaluate(&request(14, 15), &ctx), Ok(()));
    }

    #[test]
    fn test_closure_without_reason_gets_default() {
        let ctx = AllocationContext {
            closures: vec![closure(12, 14, None)],
            ..Default::default()
        };
        assert_eq!(
            evaluate(&request(12, 13), &ctx),
            Err(RejectionReason::ClosedForMaintenance {
                reason: "Closed for maintenance".to_string()
            })
        );
    }

    #[test]
    fn test_closure_takes_precedence_over_conflict() {
        let ctx = AllocationContext {
            closures: vec![closure(12, 14, Some("Maintenance"))],
            existing: vec![(at(12), at(13))],
            ..Default::default()
        };
        assert!(matches!(
            evaluate(&request(12, 13), &ctx),
            Err(RejectionReason::ClosedForMaintenance { .. })
        ));
    }

    #[test]
    fn test_walk_in_window_blocks_restricted_accounts() {
        let mut req = request(10, 11);
        req.walk_in_restricted = true;
        assert_eq!(
            evaluate(&req, &AllocationContext::default()),
            Err(RejectionReason::WalkInOnly)
        );
    }

    #[test]
    fn test_walk_in_window_edges() {
        let ctx = AllocationContext::default();

        // 15:00-16:00 still touches the window; 16:00-17:00 does not
        let mut inside = request(15, 16);
        inside.walk_in_restricted = true;
        assert_eq!(evaluate(&inside, &ctx), Err(RejectionReason::WalkInOnly));

        let mut after = request(16, 17);
        after.walk_in_restricted = true;
        assert_eq!(evaluate(&after, &ctx), Ok(()));

        // A range straddling the boundary is still blocked
        let mut straddle = request(15, 17);
        straddle.walk_in_restricted = true;
        assert_eq!(evaluate(&straddle, &ctx), Err(RejectionReason::WalkInOnly));
    }

    #[test]
    fn test_walk_in_window_ignores_unrestricted_accounts() {
        assert_eq!(evaluate(&request(10, 11), &AllocationContext::default()), Ok(()));
    }

    #[test]
    fn test_quota_exhausted_reports_zero_remaining() {
        let ctx = AllocationContext {
            booked_hours: 2,
            ..Default::default()
        };
        assert_eq!(
            evaluate(&request(16, 17), &ctx),
            Err(RejectionReason::DailyQuotaExceeded { hours_remaining: 0 })
        );
    }

    #[test]
    fn test_quota_partial_remaining() {
        let ctx = AllocationContext {
            booked_hours: 1,
            ..Default::default()
        };
        // One more hour fits, two do not
        assert_eq!(evaluate(&request(16, 17), &ctx), Ok(()));
        assert_eq!(
            evaluate(&request(16, 18), &ctx),
            Err(RejectionReason::DailyQuotaExceeded { hours_remaining: 1 })
        );
    }

    #[test]
    fn test_quota_counts_request_duration() {
        // Fresh user asking for more than the cap in one go
        assert_eq!(
            evaluate(&request(16, 19), &AllocationContext::default()),
            Err(RejectionReason::DailyQuotaExceeded { hours_remaining: 2 })
        );
    }

    #[test]
    fn test_conflict_on_overlap() {
        let ctx = AllocationContext {
            existing: vec![(at(16), at(17))],
            ..Default::default()
        };
        assert_eq!(
            evaluate(&request(16, 18), &ctx),
            Err(RejectionReason::SlotConflict)
        );
        assert_eq!(
            evaluate(&request(16, 17), &ctx),
            Err(RejectionReason::SlotConflict)
        );
    }

    #[test]
    fn test_adjacent_ranges_do_not_conflict() {
        let ctx = AllocationContext {
            existing: vec![(at(16), at(17))],
            ..Default::default()
        };
        assert_eq!(evaluate(&request(17, 18), &ctx), Ok(()));
        // 15:00-16:00 would hit the walk-in window for restricted users, but
        // this request is unrestricted and merely adjacent
        assert_eq!(evaluate(&request(15, 16), &ctx), Ok(()));
    }

    #[test]
    fn test_enclosing_booking_conflicts() {
        let ctx = AllocationContext {
            existing: vec![(at(15), at(19))],
            ..Default::default()
        };
        assert_eq!(
            evaluate(&request(16, 17), &ctx),
            Err(RejectionReason::SlotConflict)
        );
    }

    #[test]
    fn test_check_order_walk_in_before_quota() {
        let mut req = request(10, 11);
        req.walk_in_restricted = true;
        let ctx = AllocationContext {
            booked_hours: 2,
            ..Default::default()
        };
        // Both would fail; walk-in is reported because it is checked first
        assert_eq!(evaluate(&req, &ctx), Err(RejectionReason::WalkInOnly));
    }

    #[test]
    fn test_check_order_quota_before_conflict() {
        let ctx = AllocationContext {
            booked_hours: 2,
            existing: vec![(at(16), at(17))],
            ..Default::default()
        };
        assert_eq!(
            evaluate(&request(16, 17), &ctx),
            Err(RejectionReason::DailyQuotaExceeded { hours_remaining: 0 })
        );
    }
}
