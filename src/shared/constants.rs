/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - category, user and settings management on top of staff access
pub const ROLE_ADMIN: &str = "admin";

/// Staff role - can approve bookings, manage courts, closures and news
pub const ROLE_STAFF: &str = "staff";

/// Regular user role - can browse facilities and book slots
pub const ROLE_USER: &str = "user";

// =============================================================================
// BOOKING RULES
// =============================================================================

/// Maximum cumulative booked hours per user per calendar date
pub const DAILY_QUOTA_HOURS: u32 = 2;

/// Start of the walk-in-only window (inclusive hour)
pub const WALK_IN_START_HOUR: u32 = 8;

/// End of the walk-in-only window (exclusive hour)
pub const WALK_IN_END_HOUR: u32 = 16;
