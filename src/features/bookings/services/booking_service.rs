use chrono::{NaiveDate, NaiveTime, Timelike};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::bookings::allocator::{self, AllocationContext, ClosureWindow, SlotRequest};
use crate::features::bookings::dtos::{BookingResponseDto, CreateBookingDto};
use crate::features::bookings::models::{Booking, BookingStatus, RejectionReason};
use crate::modules::events::{ChangeHub, ChangeOp};
use crate::shared::types::PaginationQuery;
use crate::shared::validation::parse_time;

/// Court joined with its category's operating window, as needed by the
/// allocator pre-checks
#[derive(Debug, FromRow)]
struct CourtWindow {
    category_id: Uuid,
    is_active: bool,
    open_time: NaiveTime,
    close_time: NaiveTime,
}

#[derive(Debug, FromRow)]
struct ClosureRow {
    start_time: NaiveTime,
    end_time: NaiveTime,
    reason: Option<String>,
}

/// Booking row joined with court name for listings
#[derive(Debug, FromRow)]
struct BookingListRow {
    id: Uuid,
    user_id: Uuid,
    court_id: Uuid,
    court_name: String,
    booking_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    status: BookingStatus,
    payment_proof_url: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<BookingListRow> for BookingResponseDto {
    fn from(r: BookingListRow) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            court_id: r.court_id,
            court_name: Some(r.court_name),
            booking_date: r.booking_date,
            start_time: r.start_time,
            end_time: r.end_time,
            status: r.status,
            payment_proof_url: r.payment_proof_url,
            created_at: r.created_at,
        }
    }
}

/// Parse and validate a requested hour range.
///
/// Slots are hour-aligned by design; anything else is a malformed request,
/// not a policy rejection.
fn parse_slot_times(start: &str, end: &str) -> Result<(NaiveTime, NaiveTime)> {
    let start = parse_time(start)
        .ok_or_else(|| AppError::Validation("start_time must be a valid HH:MM time".to_string()))?;
    let end = parse_time(end)
        .ok_or_else(|| AppError::Validation("end_time must be a valid HH:MM time".to_string()))?;

    if start.minute() != 0 || start.second() != 0 || end.minute() != 0 || end.second() != 0 {
        return Err(AppError::Validation(
            "Booking times must be aligned to whole hours".to_string(),
        ));
    }
    if start >= end {
        return Err(AppError::Validation(
            "start_time must be before end_time".to_string(),
        ));
    }

    Ok((start, end))
}

/// Who may request which status transition. Staff may approve or cancel any
/// booking; an owner may only cancel their own.
fn authorize_transition(
    actor: &AuthenticatedUser,
    owner_id: Uuid,
    new_status: BookingStatus,
) -> Result<()> {
    if actor.has_staff_access() {
        return Ok(());
    }
    if actor.id == owner_id && new_status == BookingStatus::Cancelled {
        return Ok(());
    }
    Err(AppError::Forbidden(
        "Only staff may change booking status".to_string(),
    ))
}

/// Service for booking operations: the slot allocator plus its CRUD surface.
///
/// All mutations go through this service's commit paths, which publish to the
/// change hub after the database write succeeds.
pub struct BookingService {
    pool: PgPool,
    hub: ChangeHub,
    campus_email_domain: String,
}

impl BookingService {
    pub fn new(pool: PgPool, hub: ChangeHub, campus_email_domain: String) -> Self {
        Self {
            pool,
            hub,
            campus_email_domain,
        }
    }

    /// Create a booking for the authenticated user.
    ///
    /// Runs the allocator pre-checks against a snapshot, then commits with a
    /// guarded insert. The pre-checks give specific rejection reasons fast;
    /// the storage guard is what actually serializes concurrent requests.
    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        dto: CreateBookingDto,
    ) -> Result<BookingResponseDto> {
        let (start_time, end_time) = parse_slot_times(&dto.start_time, &dto.end_time)?;

        let court = sqlx::query_as::<_, CourtWindow>(
            r#"
            SELECT c.category_id, c.is_active, sc.open_time, sc.close_time
            FROM courts c
            JOIN sport_categories sc ON sc.id = c.category_id
            WHERE c.id = $1
            "#,
        )
        .bind(dto.court_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load court for booking: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Court not found".to_string()))?;

        if !court.is_active {
            return Err(AppError::BadRequest(
                "Court is not open for booking".to_string(),
            ));
        }

        let closures = self
            .list_closures(court.category_id, dto.booking_date)
            .await?;
        let existing = self
            .list_non_cancelled_intervals(dto.court_id, dto.booking_date)
            .await?;
        let booked_hours = self.sum_user_hours(user.id, dto.booking_date).await?;

        let request = SlotRequest {
            start_time,
            end_time,
            open_time: court.open_time,
            close_time: court.close_time,
            walk_in_restricted: user.is_walk_in_restricted(&self.campus_email_domain),
        };
        let ctx = AllocationContext {
            closures,
            existing,
            booked_hours,
        };
        allocator::evaluate(&request, &ctx).map_err(AppError::Rejected)?;

        // Guarded insert: re-checks overlap inside the statement so a racing
        // request that slipped past the snapshot is refused here. The
        // exclusion constraint on the table backs this up under any isolation.
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (user_id, court_id, booking_date, start_time, end_time, status, payment_proof_url)
            SELECT $1, $2, $3, $4, $5, 'pending', $6
            WHERE NOT EXISTS (
                SELECT 1 FROM bookings
                WHERE court_id = $2
                  AND booking_date = $3
                  AND status <> 'cancelled'
                  AND start_time < $5
                  AND end_time > $4
            )
            RETURNING id, user_id, court_id, booking_date, start_time, end_time,
                      status, payment_proof_url, created_at, updated_at
            "#,
        )
        .bind(user.id)
        .bind(dto.court_id)
        .bind(dto.booking_date)
        .bind(start_time)
        .bind(end_time)
        .bind(&dto.payment_proof_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.constraint() == Some("bookings_no_overlap") => {
                AppError::Rejected(RejectionReason::SlotConflictAtCommit)
            }
            _ => {
                tracing::error!("Failed to create booking: {:?}", e);
                AppError::Database(e)
            }
        })?
        .ok_or(AppError::Rejected(RejectionReason::SlotConflictAtCommit))?;

        tracing::info!(
            "Booking created: id={}, court={}, date={}, {}-{}",
            booking.id,
            booking.court_id,
            booking.booking_date,
            booking.start_time,
            booking.end_time
        );
        self.hub.publish("bookings", ChangeOp::Created, booking.id);

        Ok(booking.into())
    }

    /// Apply a status transition, enforcing the allowed transition set and
    /// the caller's authority over the booking.
    pub async fn update_status(
        &self,
        id: Uuid,
        new_status: BookingStatus,
        actor: &AuthenticatedUser,
    ) -> Result<BookingResponseDto> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, user_id, court_id, booking_date, start_time, end_time,
                   status, payment_proof_url, created_at, updated_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load booking {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Booking '{}' not found", id)))?;

        authorize_transition(actor, booking.user_id, new_status)?;

        if !booking.status.can_transition(new_status) {
            return Err(AppError::Rejected(RejectionReason::InvalidTransition {
                from: booking.status,
                to: new_status,
            }));
        }

        // Guarded update: the WHERE clause pins the status we decided on, so
        // a concurrent transition loses cleanly instead of being overwritten.
        let updated = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET status = $1, updated_at = now()
            WHERE id = $2 AND status = $3
            RETURNING id, user_id, court_id, booking_date, start_time, end_time,
                      status, payment_proof_url, created_at, updated_at
            "#,
        )
        .bind(new_status)
        .bind(id)
        .bind(booking.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update booking status: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::Conflict("Booking status changed concurrently".to_string()))?;

        tracing::info!(
            "Booking {} transitioned {} -> {}",
            updated.id,
            booking.status,
            updated.status
        );
        self.hub.publish("bookings", ChangeOp::Updated, updated.id);

        Ok(updated.into())
    }

    /// Bookings held by a user, newest date first, with court names
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<BookingResponseDto>> {
        let rows = sqlx::query_as::<_, BookingListRow>(
            r#"
            SELECT b.id, b.user_id, b.court_id, c.name AS court_name,
                   b.booking_date, b.start_time, b.end_time, b.status,
                   b.payment_proof_url, b.created_at
            FROM bookings b
            JOIN courts c ON c.id = b.court_id
            WHERE b.user_id = $1
            ORDER BY b.booking_date DESC, b.start_time
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list user bookings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// All bookings for a date, for the public slot grid. Includes cancelled
    /// rows; clients filter by status when rendering availability.
    pub async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<BookingResponseDto>> {
        let rows = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, user_id, court_id, booking_date, start_time, end_time,
                   status, payment_proof_url, created_at, updated_at
            FROM bookings
            WHERE booking_date = $1
            ORDER BY start_time
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list bookings by date: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// All bookings, paginated, for the staff schedule dashboard
    pub async fn list_all(
        &self,
        page: &PaginationQuery,
    ) -> Result<(Vec<BookingResponseDto>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count bookings: {:?}", e);
                AppError::Database(e)
            })?;

        let rows = sqlx::query_as::<_, BookingListRow>(
            r#"
            SELECT b.id, b.user_id, b.court_id, c.name AS court_name,
                   b.booking_date, b.start_time, b.end_time, b.status,
                   b.payment_proof_url, b.created_at
            FROM bookings b
            JOIN courts c ON c.id = b.court_id
            ORDER BY b.booking_date DESC, b.start_time
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list bookings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((rows.into_iter().map(|r| r.into()).collect(), total))
    }

    async fn list_closures(
        &self,
        category_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<ClosureWindow>> {
        let rows = sqlx::query_as::<_, ClosureRow>(
            r#"
            SELECT start_time, end_time, reason
            FROM category_closings
            WHERE category_id = $1 AND closing_date = $2
            "#,
        )
        .bind(category_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list closures: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows
            .into_iter()
            .map(|r| ClosureWindow {
                start_time: r.start_time,
                end_time: r.end_time,
                reason: r.reason,
            })
            .collect())
    }

    async fn list_non_cancelled_intervals(
        &self,
        court_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<(NaiveTime, NaiveTime)>> {
        sqlx::query_as::<_, (NaiveTime, NaiveTime)>(
            r#"
            SELECT start_time, end_time
            FROM bookings
            WHERE court_id = $1 AND booking_date = $2 AND status <> 'cancelled'
            "#,
        )
        .bind(court_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list booked intervals: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Non-cancelled hours the user already holds on a date, across courts.
    /// Slots are hour-aligned, so hour arithmetic on the bounds is exact.
    async fn sum_user_hours(&self, user_id: Uuid, date: NaiveDate) -> Result<u32> {
        let hours: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(date_part('hour', end_time) - date_part('hour', start_time)), 0)::bigint
            FROM bookings
            WHERE user_id = $1 AND booking_date = $2 AND status <> 'cancelled'
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to sum user hours: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(hours.max(0) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{make_admin, make_staff, make_user};

    #[test]
    fn test_parse_slot_times_valid() {
        let (start, end) = parse_slot_times("16:00", "18:00").unwrap();
        assert_eq!(start.hour(), 16);
        assert_eq!(end.hour(), 18);
    }

    #[test]
    fn test_parse_slot_times_rejects_misaligned() {
        assert!(matches!(
            parse_slot_times("16:30", "17:30"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_slot_times_rejects_inverted_range() {
        assert!(matches!(
            parse_slot_times("18:00", "16:00"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            parse_slot_times("16:00", "16:00"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_staff_may_transition_any_booking() {
        let staff = make_staff();
        let owner = Uuid::new_v4();
        assert!(authorize_transition(&staff, owner, BookingStatus::Paid).is_ok());
        assert!(authorize_transition(&staff, owner, BookingStatus::Cancelled).is_ok());
    }

    #[test]
    fn test_admin_has_staff_authority() {
        let admin = make_admin();
        assert!(authorize_transition(&admin, Uuid::new_v4(), BookingStatus::Paid).is_ok());
    }

    #[test]
    fn test_owner_may_only_cancel_own_booking() {
        let user = make_user("somchai.j@ku.th");
        assert!(authorize_transition(&user, user.id, BookingStatus::Cancelled).is_ok());
        assert!(matches!(
            authorize_transition(&user, user.id, BookingStatus::Paid),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_stranger_may_not_cancel() {
        let user = make_user("somchai.j@ku.th");
        assert!(matches!(
            authorize_transition(&user, Uuid::new_v4(), BookingStatus::Cancelled),
            Err(AppError::Forbidden(_))
        ));
    }
}
