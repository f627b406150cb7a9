//! PostgreSQL implementation of the content [`Gateway`].

use async_trait::async_trait;
use catalog_core::content::{Content, ContentDto};
use catalog_core::error::{CoreError, CoreResult};
use catalog_core::gateway::Gateway;
use catalog_core::types::ContentId;
use uuid::Uuid;

use crate::repositories::ContentRepo;
use crate::DbPool;

/// Content gateway backed by the `contents` table.
#[derive(Debug, Clone)]
pub struct PgContentGateway {
    pool: DbPool,
}

impl PgContentGateway {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Gateway<Content, ContentDto> for PgContentGateway {
    async fn read_all(&self) -> CoreResult<Vec<Content>> {
        let rows = ContentRepo::list(&self.pool)
            .await
            .map_err(CoreError::store)?;
        Ok(rows.into_iter().map(Content::from).collect())
    }

    async fn read(&self, id: ContentId) -> CoreResult<Option<Content>> {
        let row = ContentRepo::find_by_id(&self.pool, id)
            .await
            .map_err(CoreError::store)?;
        Ok(row.map(Content::from))
    }

    async fn create(&self, dto: ContentDto) -> CoreResult<Option<Content>> {
        let content = Content::from_dto(Uuid::new_v4(), dto);
        let row = ContentRepo::create(&self.pool, &content)
            .await
            .map_err(CoreError::store)?;

        if row.is_none() {
            tracing::warn!(content_id = %content.id, "Insert skipped, id already taken");
        }
        Ok(row.map(Content::from))
    }

    async fn update(&self, id: ContentId, dto: ContentDto) -> CoreResult<Option<Content>> {
        let row = ContentRepo::update(&self.pool, id, &dto)
            .await
            .map_err(CoreError::store)?;
        Ok(row.map(Content::from))
    }

    async fn delete(&self, id: ContentId) -> CoreResult<ContentId> {
        let deleted = ContentRepo::delete(&self.pool, id)
            .await
            .map_err(CoreError::store)?;
        tracing::debug!(content_id = %id, deleted, "Content delete executed");
        Ok(id)
    }
}
