use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{ProfileResponseDto, UpdateProfileDto, UpdateRoleDto};
use crate::features::users::models::Profile;
use crate::modules::events::{ChangeHub, ChangeOp};
use crate::shared::constants::{ROLE_ADMIN, ROLE_STAFF, ROLE_USER};
use crate::shared::types::PaginationQuery;

const PROFILE_COLUMNS: &str = "id, email, username, role, created_at, updated_at";

fn validate_role(role: &str) -> Result<()> {
    match role {
        ROLE_USER | ROLE_STAFF | ROLE_ADMIN => Ok(()),
        _ => Err(AppError::Validation(format!(
            "Unknown role '{}'; expected one of {}, {}, {}",
            role, ROLE_USER, ROLE_STAFF, ROLE_ADMIN
        ))),
    }
}

/// Service for profile listing and role management
pub struct UserService {
    pool: PgPool,
    hub: ChangeHub,
}

impl UserService {
    pub fn new(pool: PgPool, hub: ChangeHub) -> Self {
        Self { pool, hub }
    }

    pub async fn list(&self, page: &PaginationQuery) -> Result<(Vec<ProfileResponseDto>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count profiles: {:?}", e);
                AppError::Database(e)
            })?;

        let profiles = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list profiles: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((profiles.into_iter().map(|p| p.into()).collect(), total))
    }

    pub async fn update_role(&self, id: Uuid, dto: UpdateRoleDto) -> Result<ProfileResponseDto> {
        validate_role(&dto.role)?;

        let profile = sqlx::query_as::<_, Profile>(&format!(
            r#"
            UPDATE profiles
            SET role = $1, updated_at = now()
            WHERE id = $2
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(&dto.role)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update role: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))?;

        tracing::info!("Role of user {} set to {}", profile.id, profile.role);
        self.hub.publish("users", ChangeOp::Updated, profile.id);
        Ok(profile.into())
    }

    /// Partial profile edit
    pub async fn update(&self, id: Uuid, dto: UpdateProfileDto) -> Result<ProfileResponseDto> {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            r#"
            UPDATE profiles
            SET username = COALESCE($1, username),
                email = COALESCE($2, email),
                updated_at = now()
            WHERE id = $3
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update profile: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))?;

        self.hub.publish("users", ChangeOp::Updated, profile.id);
        Ok(profile.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => AppError::Conflict(
                    "User has bookings; cancel them before deleting the account".to_string(),
                ),
                _ => {
                    tracing::error!("Failed to delete profile: {:?}", e);
                    AppError::Database(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User '{}' not found", id)));
        }

        self.hub.publish("users", ChangeOp::Deleted, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_roles_pass() {
        assert!(validate_role("user").is_ok());
        assert!(validate_role("staff").is_ok());
        assert!(validate_role("admin").is_ok());
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(matches!(
            validate_role("superuser"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(validate_role(""), Err(AppError::Validation(_))));
        // Roles are case sensitive
        assert!(matches!(
            validate_role("Admin"),
            Err(AppError::Validation(_))
        ));
    }
}
