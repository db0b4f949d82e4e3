use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::settings::dtos::{SettingsResponseDto, UpdateSettingsDto};
use crate::features::settings::models::SiteSetting;
use crate::modules::events::{ChangeHub, ChangeOp};

/// Service for the site settings key-value store
pub struct SettingService {
    pool: PgPool,
    hub: ChangeHub,
}

impl SettingService {
    pub fn new(pool: PgPool, hub: ChangeHub) -> Self {
        Self { pool, hub }
    }

    pub async fn get_all(&self) -> Result<SettingsResponseDto> {
        let rows = sqlx::query_as::<_, SiteSetting>(
            "SELECT key, value, updated_at FROM site_settings ORDER BY key",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load settings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into())
    }

    /// Upsert the given entries atomically, then return the full map
    pub async fn update(&self, dto: UpdateSettingsDto) -> Result<SettingsResponseDto> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin settings transaction: {:?}", e);
            AppError::Database(e)
        })?;

        for (key, value) in &dto.settings {
            sqlx::query(
                r#"
                INSERT INTO site_settings (key, value)
                VALUES ($1, $2)
                ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()
                "#,
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to upsert setting '{}': {:?}", key, e);
                AppError::Database(e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit settings transaction: {:?}", e);
            AppError::Database(e)
        })?;

        self.hub.publish("settings", ChangeOp::Updated, "site");
        self.get_all().await
    }
}
