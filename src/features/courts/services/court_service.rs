use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::courts::dtos::{CourtResponseDto, CreateCourtDto, UpdateCourtDto};
use crate::features::courts::models::Court;
use crate::modules::events::{ChangeHub, ChangeOp};

const COURT_COLUMNS: &str = r#"id, category_id, name, "type", description, price, image_url, is_active, created_at, updated_at"#;

fn price_from_f64(price: f64) -> Result<Decimal> {
    Decimal::from_f64_retain(price)
        .filter(|p| !p.is_sign_negative())
        .ok_or_else(|| AppError::Validation("Price must be a non-negative number".to_string()))
}

/// Service for the courts catalog
pub struct CourtService {
    pool: PgPool,
    hub: ChangeHub,
}

impl CourtService {
    pub fn new(pool: PgPool, hub: ChangeHub) -> Self {
        Self { pool, hub }
    }

    /// List courts, optionally restricted to a category
    pub async fn list(&self, category_id: Option<Uuid>) -> Result<Vec<CourtResponseDto>> {
        let courts = match category_id {
            Some(category_id) => {
                sqlx::query_as::<_, Court>(&format!(
                    "SELECT {COURT_COLUMNS} FROM courts WHERE category_id = $1 ORDER BY name"
                ))
                .bind(category_id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Court>(&format!(
                    "SELECT {COURT_COLUMNS} FROM courts ORDER BY name"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to list courts: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(courts.into_iter().map(|c| c.into()).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<CourtResponseDto> {
        let court = sqlx::query_as::<_, Court>(&format!(
            "SELECT {COURT_COLUMNS} FROM courts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get court: {:?}", e);
            AppError::Database(e)
        })?;

        court
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Court '{}' not found", id)))
    }

    pub async fn create(&self, dto: CreateCourtDto) -> Result<CourtResponseDto> {
        let price = price_from_f64(dto.price)?;

        let court = sqlx::query_as::<_, Court>(&format!(
            r#"
            INSERT INTO courts (category_id, name, "type", description, price, image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COURT_COLUMNS}
            "#
        ))
        .bind(dto.category_id)
        .bind(&dto.name)
        .bind(&dto.court_type)
        .bind(&dto.description)
        .bind(price)
        .bind(&dto.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::NotFound(format!("Category '{}' not found", dto.category_id))
            }
            _ => {
                tracing::error!("Failed to create court: {:?}", e);
                AppError::Database(e)
            }
        })?;

        self.hub.publish("courts", ChangeOp::Created, court.id);
        Ok(court.into())
    }

    /// Partial update
    pub async fn update(&self, id: Uuid, dto: UpdateCourtDto) -> Result<CourtResponseDto> {
        let current = sqlx::query_as::<_, Court>(&format!(
            "SELECT {COURT_COLUMNS} FROM courts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load court for update: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Court '{}' not found", id)))?;

        let price = match dto.price {
            Some(p) => price_from_f64(p)?,
            None => current.price,
        };

        let court = sqlx::query_as::<_, Court>(&format!(
            r#"
            UPDATE courts
            SET name = $1, "type" = $2, description = $3, price = $4,
                image_url = $5, is_active = $6, updated_at = now()
            WHERE id = $7
            RETURNING {COURT_COLUMNS}
            "#
        ))
        .bind(dto.name.unwrap_or(current.name))
        .bind(dto.court_type.or(current.court_type))
        .bind(dto.description.or(current.description))
        .bind(price)
        .bind(dto.image_url.or(current.image_url))
        .bind(dto.is_active.unwrap_or(current.is_active))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update court: {:?}", e);
            AppError::Database(e)
        })?;

        self.hub.publish("courts", ChangeOp::Updated, court.id);
        Ok(court.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM courts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => AppError::Conflict(
                    "Court has bookings; deactivate it instead of deleting".to_string(),
                ),
                _ => {
                    tracing::error!("Failed to delete court: {:?}", e);
                    AppError::Database(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Court '{}' not found", id)));
        }

        self.hub.publish("courts", ChangeOp::Deleted, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_conversion() {
        assert_eq!(price_from_f64(150.0).unwrap(), Decimal::new(150, 0));
        assert!(price_from_f64(0.0).unwrap().is_zero());
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(matches!(
            price_from_f64(-1.0),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_non_finite_price_rejected() {
        assert!(matches!(
            price_from_f64(f64::NAN),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            price_from_f64(f64::INFINITY),
            Err(AppError::Validation(_))
        ));
    }
}
