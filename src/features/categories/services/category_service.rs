use chrono::NaiveTime;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, ClosingResponseDto, CreateCategoryDto, CreateClosingDto,
    UpdateCategoryDto,
};
use crate::features::categories::models::{CategoryClosing, SportCategory};
use crate::modules::events::{ChangeHub, ChangeOp};
use crate::shared::validation::parse_time;

const CATEGORY_COLUMNS: &str =
    "id, name, description, image_url, is_active, open_time, close_time, created_at, updated_at";

fn parse_window(open: &str, close: &str) -> Result<(NaiveTime, NaiveTime)> {
    let open = parse_time(open)
        .ok_or_else(|| AppError::Validation("open_time must be a valid HH:MM time".to_string()))?;
    let close = parse_time(close)
        .ok_or_else(|| AppError::Validation("close_time must be a valid HH:MM time".to_string()))?;
    if open >= close {
        return Err(AppError::Validation(
            "open_time must be before close_time".to_string(),
        ));
    }
    Ok((open, close))
}

/// Service for sport categories and their closure windows
pub struct CategoryService {
    pool: PgPool,
    hub: ChangeHub,
}

impl CategoryService {
    pub fn new(pool: PgPool, hub: ChangeHub) -> Self {
        Self { pool, hub }
    }

    /// List all categories, active and inactive; clients filter on the flag
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, SportCategory>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM sport_categories ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, SportCategory>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM sport_categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category: {:?}", e);
            AppError::Database(e)
        })?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))
    }

    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let (open_time, close_time) = parse_window(&dto.open_time, &dto.close_time)?;

        let category = sqlx::query_as::<_, SportCategory>(&format!(
            r#"
            INSERT INTO sport_categories (name, description, image_url, open_time, close_time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CATEGORY_COLUMNS}
            "#
        ))
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(&dto.image_url)
        .bind(open_time)
        .bind(close_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create category: {:?}", e);
            AppError::Database(e)
        })?;

        self.hub
            .publish("categories", ChangeOp::Created, category.id);
        Ok(category.into())
    }

    /// Partial update; the operating window is re-validated as a whole when
    /// either bound changes.
    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let current = sqlx::query_as::<_, SportCategory>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM sport_categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load category for update: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", id)))?;

        let open_time = match &dto.open_time {
            Some(s) => parse_time(s).ok_or_else(|| {
                AppError::Validation("open_time must be a valid HH:MM time".to_string())
            })?,
            None => current.open_time,
        };
        let close_time = match &dto.close_time {
            Some(s) => parse_time(s).ok_or_else(|| {
                AppError::Validation("close_time must be a valid HH:MM time".to_string())
            })?,
            None => current.close_time,
        };
        if open_time >= close_time {
            return Err(AppError::Validation(
                "open_time must be before close_time".to_string(),
            ));
        }

        let category = sqlx::query_as::<_, SportCategory>(&format!(
            r#"
            UPDATE sport_categories
            SET name = $1, description = $2, image_url = $3, is_active = $4,
                open_time = $5, close_time = $6, updated_at = now()
            WHERE id = $7
            RETURNING {CATEGORY_COLUMNS}
            "#
        ))
        .bind(dto.name.unwrap_or(current.name))
        .bind(dto.description.or(current.description))
        .bind(dto.image_url.or(current.image_url))
        .bind(dto.is_active.unwrap_or(current.is_active))
        .bind(open_time)
        .bind(close_time)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update category: {:?}", e);
            AppError::Database(e)
        })?;

        self.hub
            .publish("categories", ChangeOp::Updated, category.id);
        Ok(category.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM sport_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => AppError::Conflict(
                    "Category still has courts; remove or reassign them first".to_string(),
                ),
                _ => {
                    tracing::error!("Failed to delete category: {:?}", e);
                    AppError::Database(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category '{}' not found", id)));
        }

        self.hub.publish("categories", ChangeOp::Deleted, id);
        Ok(())
    }

    pub async fn list_closings(&self, category_id: Uuid) -> Result<Vec<ClosingResponseDto>> {
        let closings = sqlx::query_as::<_, CategoryClosing>(
            r#"
            SELECT id, category_id, closing_date, start_time, end_time, reason, created_at
            FROM category_closings
            WHERE category_id = $1
            ORDER BY closing_date, start_time
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list closings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(closings.into_iter().map(|c| c.into()).collect())
    }

    pub async fn create_closing(
        &self,
        category_id: Uuid,
        dto: CreateClosingDto,
    ) -> Result<ClosingResponseDto> {
        let start = parse_time(&dto.start_time).ok_or_else(|| {
            AppError::Validation("start_time must be a valid HH:MM time".to_string())
        })?;
        let end = parse_time(&dto.end_time).ok_or_else(|| {
            AppError::Validation("end_time must be a valid HH:MM time".to_string())
        })?;
        if start >= end {
            return Err(AppError::Validation(
                "start_time must be before end_time".to_string(),
            ));
        }

        let closing = sqlx::query_as::<_, CategoryClosing>(
            r#"
            INSERT INTO category_closings (category_id, closing_date, start_time, end_time, reason)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, category_id, closing_date, start_time, end_time, reason, created_at
            "#,
        )
        .bind(category_id)
        .bind(dto.closing_date)
        .bind(start)
        .bind(end)
        .bind(&dto.reason)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::NotFound(format!("Category '{}' not found", category_id))
            }
            _ => {
                tracing::error!("Failed to create closing: {:?}", e);
                AppError::Database(e)
            }
        })?;

        self.hub.publish("closings", ChangeOp::Created, closing.id);
        Ok(closing.into())
    }

    pub async fn delete_closing(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM category_closings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete closing: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Closing '{}' not found", id)));
        }

        self.hub.publish("closings", ChangeOp::Deleted, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window_valid() {
        let (open, close) = parse_window("08:00", "21:00").unwrap();
        assert!(open < close);
    }

    #[test]
    fn test_parse_window_rejects_inverted() {
        assert!(matches!(
            parse_window("21:00", "08:00"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            parse_window("08:00", "08:00"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_window_rejects_garbage() {
        assert!(matches!(
            parse_window("soon", "21:00"),
            Err(AppError::Validation(_))
        ));
    }
}
