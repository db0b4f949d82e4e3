use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::news::dtos::{CreateNewsDto, NewsResponseDto, UpdateNewsDto};
use crate::features::news::models::NewsPost;
use crate::modules::events::{ChangeHub, ChangeOp};
use crate::shared::types::PaginationQuery;

const NEWS_COLUMNS: &str = "id, title, content, image_url, created_by, created_at, updated_at";

/// Service for news posts
pub struct NewsService {
    pool: PgPool,
    hub: ChangeHub,
}

impl NewsService {
    pub fn new(pool: PgPool, hub: ChangeHub) -> Self {
        Self { pool, hub }
    }

    /// List posts, newest first
    pub async fn list(&self, page: &PaginationQuery) -> Result<(Vec<NewsResponseDto>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count news: {:?}", e);
                AppError::Database(e)
            })?;

        let posts = sqlx::query_as::<_, NewsPost>(&format!(
            "SELECT {NEWS_COLUMNS} FROM news ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list news: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((posts.into_iter().map(|n| n.into()).collect(), total))
    }

    pub async fn get(&self, id: Uuid) -> Result<NewsResponseDto> {
        let post =
            sqlx::query_as::<_, NewsPost>(&format!("SELECT {NEWS_COLUMNS} FROM news WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to get news post: {:?}", e);
                    AppError::Database(e)
                })?;

        post.map(|n| n.into())
            .ok_or_else(|| AppError::NotFound(format!("News post '{}' not found", id)))
    }

    pub async fn create(&self, author_id: Uuid, dto: CreateNewsDto) -> Result<NewsResponseDto> {
        let post = sqlx::query_as::<_, NewsPost>(&format!(
            r#"
            INSERT INTO news (title, content, image_url, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING {NEWS_COLUMNS}
            "#
        ))
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(&dto.image_url)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create news post: {:?}", e);
            AppError::Database(e)
        })?;

        self.hub.publish("news", ChangeOp::Created, post.id);
        Ok(post.into())
    }

    /// Partial update
    pub async fn update(&self, id: Uuid, dto: UpdateNewsDto) -> Result<NewsResponseDto> {
        let post = sqlx::query_as::<_, NewsPost>(&format!(
            r#"
            UPDATE news
            SET title = COALESCE($1, title),
                content = COALESCE($2, content),
                image_url = COALESCE($3, image_url),
                updated_at = now()
            WHERE id = $4
            RETURNING {NEWS_COLUMNS}
            "#
        ))
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(&dto.image_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update news post: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("News post '{}' not found", id)))?;

        self.hub.publish("news", ChangeOp::Updated, post.id);
        Ok(post.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete news post: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("News post '{}' not found", id)));
        }

        self.hub.publish("news", ChangeOp::Deleted, id);
        Ok(())
    }
}
