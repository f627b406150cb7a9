//! Outcome logging around a [`ContentsManager`].
//!
//! Every call ends in exactly one event: `info` on success, `warn` when the
//! record is absent or the listing is empty, `error` on failure. A create
//! that yields no record is a creation failure and is logged as an error.
//! Each event carries the content id (where there is one) and a timestamp.

use async_trait::async_trait;
use chrono::Utc;

use crate::content::{Content, ContentDto};
use crate::error::CoreResult;
use crate::manager::ContentsManager;
use crate::types::ContentId;

/// Decorator that logs the outcome of every wrapped manager call.
pub struct TracedManager<M> {
    inner: M,
}

impl<M> TracedManager<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

fn now() -> String {
    Utc::now().to_rfc3339()
}

/// Log the outcome of a lookup-style call keyed by `id`.
fn log_lookup(
    op: &'static str,
    id: ContentId,
    result: &CoreResult<Option<Content>>,
) {
    match result {
        Ok(Some(_)) => tracing::info!(op, content_id = %id, timestamp = %now(), "Content {op} succeeded"),
        Ok(None) => tracing::warn!(op, content_id = %id, timestamp = %now(), "Content not found"),
        Err(err) => tracing::error!(op, content_id = %id, timestamp = %now(), error = %err, "Content {op} failed"),
    }
}

/// Log the outcome of a listing call with the criteria it ran under.
fn log_listing(
    op: &'static str,
    title: Option<&str>,
    genre: Option<&str>,
    result: &CoreResult<Vec<Content>>,
) {
    match result {
        Ok(list) if list.is_empty() => {
            tracing::warn!(op, ?title, ?genre, timestamp = %now(), "No contents found")
        }
        Ok(list) => tracing::info!(
            op,
            ?title,
            ?genre,
            count = list.len(),
            timestamp = %now(),
            "Contents fetched",
        ),
        Err(err) => tracing::error!(
            op,
            ?title,
            ?genre,
            timestamp = %now(),
            error = %err,
            "Fetching contents failed",
        ),
    }
}

#[async_trait]
impl<M> ContentsManager for TracedManager<M>
where
    M: ContentsManager,
{
    async fn get_many_contents(&self) -> CoreResult<Vec<Content>> {
        let result = self.inner.get_many_contents().await;
        log_listing("get_many", None, None, &result);
        result
    }

    async fn get_filtered_contents(
        &self,
        title: Option<&str>,
        genre: Option<&str>,
    ) -> CoreResult<Vec<Content>> {
        let result = self.inner.get_filtered_contents(title, genre).await;
        log_listing("get_filtered", title, genre, &result);
        result
    }

    async fn create_content(&self, dto: ContentDto) -> CoreResult<Option<Content>> {
        let request = format!("{dto:?}");
        let result = self.inner.create_content(dto).await;
        match &result {
            Ok(Some(content)) => tracing::info!(
                content_id = %content.id,
                timestamp = %now(),
                "Content created",
            ),
            Ok(None) => tracing::error!(
                timestamp = %now(),
                %request,
                "Failed to create content",
            ),
            Err(err) => tracing::error!(
                timestamp = %now(),
                %request,
                error = %err,
                "Content create failed",
            ),
        }
        result
    }

    async fn get_content(&self, id: ContentId) -> CoreResult<Option<Content>> {
        let result = self.inner.get_content(id).await;
        log_lookup("get", id, &result);
        result
    }

    async fn update_content(
        &self,
        id: ContentId,
        dto: ContentDto,
    ) -> CoreResult<Option<Content>> {
        let result = self.inner.update_content(id, dto).await;
        log_lookup("update", id, &result);
        result
    }

    async fn delete_content(&self, id: ContentId) -> CoreResult<ContentId> {
        let result = self.inner.delete_content(id).await;
        match &result {
            Ok(deleted) => {
                tracing::info!(content_id = %deleted, timestamp = %now(), "Content deleted")
            }
            Err(err) => tracing::error!(
                content_id = %id,
                timestamp = %now(),
                error = %err,
                "Content delete failed",
            ),
        }
        result
    }

    async fn add_genres(
        &self,
        id: ContentId,
        genres: Vec<String>,
    ) -> CoreResult<Option<Content>> {
        tracing::debug!(content_id = %id, ?genres, "Adding genres");
        let result = self.inner.add_genres(id, genres).await;
        log_lookup("add_genres", id, &result);
        result
    }

    async fn remove_genres(
        &self,
        id: ContentId,
        genres: Vec<String>,
    ) -> CoreResult<Option<Content>> {
        tracing::debug!(content_id = %id, ?genres, "Removing genres");
        let result = self.inner.remove_genres(id, genres).await;
        log_lookup("remove_genres", id, &result);
        result
    }
}
