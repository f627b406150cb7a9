//! Repository for the `contents` table.

use catalog_core::content::{Content, ContentDto};
use catalog_core::types::ContentId;
use sqlx::PgPool;

use crate::models::content::ContentRow;

/// Column list for `contents` queries.
const COLUMNS: &str = "\
    id, title, subtitle, description, image_url, duration, \
    start_time, end_time, genre_list, created_at, updated_at";

/// Provides data access for content records.
pub struct ContentRepo;

impl ContentRepo {
    /// List every content record, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContentRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contents ORDER BY created_at, id");
        sqlx::query_as::<_, ContentRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a content record by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: ContentId,
    ) -> Result<Option<ContentRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contents WHERE id = $1");
        sqlx::query_as::<_, ContentRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a fully resolved record.
    ///
    /// Returns `None` when a row with the same id already exists
    /// (`ON CONFLICT (id) DO NOTHING` yields no row).
    pub async fn create(
        pool: &PgPool,
        content: &Content,
    ) -> Result<Option<ContentRow>, sqlx::Error> {
        let query = format!(
            "INSERT INTO contents \
                 (id, title, subtitle, description, image_url, duration, \
                  start_time, end_time, genre_list) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (id) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentRow>(&query)
            .bind(content.id)
            .bind(&content.title)
            .bind(&content.subtitle)
            .bind(&content.description)
            .bind(&content.image_url)
            .bind(content.duration)
            .bind(content.start_time)
            .bind(content.end_time)
            .bind(&content.genre_list)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a content record.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Returns `None`
    /// if no row has this id.
    pub async fn update(
        pool: &PgPool,
        id: ContentId,
        dto: &ContentDto,
    ) -> Result<Option<ContentRow>, sqlx::Error> {
        let query = format!(
            "UPDATE contents SET \
                 title = COALESCE($2, title), \
                 subtitle = COALESCE($3, subtitle), \
                 description = COALESCE($4, description), \
                 image_url = COALESCE($5, image_url), \
                 duration = COALESCE($6, duration), \
                 start_time = COALESCE($7, start_time), \
                 end_time = COALESCE($8, end_time), \
                 genre_list = COALESCE($9, genre_list) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContentRow>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.subtitle)
            .bind(&dto.description)
            .bind(&dto.image_url)
            .bind(dto.duration)
            .bind(dto.start_time)
            .bind(dto.end_time)
            .bind(&dto.genre_list)
            .fetch_optional(pool)
            .await
    }

    /// Delete a content record by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: ContentId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
