//! Content manager: the domain service the HTTP layer talks to.
//!
//! Stateless. Each call is one or two gateway round trips; genre edits read
//! the current record, compute the new list and write back only that field.

use std::sync::Arc;

use async_trait::async_trait;

use crate::content::{Content, ContentDto};
use crate::error::CoreResult;
use crate::gateway::Gateway;
use crate::genres::{self, ContentFilter};
use crate::types::ContentId;

/// Operations exposed to the HTTP layer.
///
/// Object safe so handlers can hold an `Arc<dyn ContentsManager>` and tests
/// can swap in any gateway.
#[async_trait]
pub trait ContentsManager: Send + Sync {
    async fn get_many_contents(&self) -> CoreResult<Vec<Content>>;

    /// Case-insensitive substring filter on title and on any genre entry.
    /// `None` or empty criteria are ignored.
    async fn get_filtered_contents(
        &self,
        title: Option<&str>,
        genre: Option<&str>,
    ) -> CoreResult<Vec<Content>>;

    async fn create_content(&self, dto: ContentDto) -> CoreResult<Option<Content>>;

    async fn get_content(&self, id: ContentId) -> CoreResult<Option<Content>>;

    async fn update_content(&self, id: ContentId, dto: ContentDto)
        -> CoreResult<Option<Content>>;

    async fn delete_content(&self, id: ContentId) -> CoreResult<ContentId>;

    /// Union of the stored genres and `genres`, exact-match de-duplicated.
    async fn add_genres(&self, id: ContentId, genres: Vec<String>)
        -> CoreResult<Option<Content>>;

    /// Stored genres minus every exact match in `genres`.
    async fn remove_genres(
        &self,
        id: ContentId,
        genres: Vec<String>,
    ) -> CoreResult<Option<Content>>;
}

/// [`ContentsManager`] over any content [`Gateway`].
pub struct ContentService<G> {
    gateway: Arc<G>,
}

impl<G> ContentService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }
}

impl<G> Clone for ContentService<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G> ContentService<G>
where
    G: Gateway<Content, ContentDto>,
{
    /// Read the record, rewrite its genre list with `edit`, and store it.
    async fn edit_genres<F>(&self, id: ContentId, edit: F) -> CoreResult<Option<Content>>
    where
        F: FnOnce(&[String]) -> Vec<String> + Send,
    {
        let Some(current) = self.gateway.read(id).await? else {
            return Ok(None);
        };

        let genre_list = edit(&current.genre_list);
        self.gateway
            .update(id, ContentDto::genres_only(genre_list))
            .await
    }
}

#[async_trait]
impl<G> ContentsManager for ContentService<G>
where
    G: Gateway<Content, ContentDto> + 'static,
{
    async fn get_many_contents(&self) -> CoreResult<Vec<Content>> {
        self.gateway.read_all().await
    }

    async fn get_filtered_contents(
        &self,
        title: Option<&str>,
        genre: Option<&str>,
    ) -> CoreResult<Vec<Content>> {
        let filter = ContentFilter::new(title, genre);
        let contents = self.gateway.read_all().await?;
        Ok(filter.apply(contents))
    }

    async fn create_content(&self, dto: ContentDto) -> CoreResult<Option<Content>> {
        self.gateway.create(dto).await
    }

    async fn get_content(&self, id: ContentId) -> CoreResult<Option<Content>> {
        self.gateway.read(id).await
    }

    async fn update_content(
        &self,
        id: ContentId,
        dto: ContentDto,
    ) -> CoreResult<Option<Content>> {
        self.gateway.update(id, dto).await
    }

    async fn delete_content(&self, id: ContentId) -> CoreResult<ContentId> {
        self.gateway.delete(id).await
    }

    async fn add_genres(
        &self,
        id: ContentId,
        added: Vec<String>,
    ) -> CoreResult<Option<Content>> {
        self.edit_genres(id, |existing| genres::merge(existing, &added))
            .await
    }

    async fn remove_genres(
        &self,
        id: ContentId,
        removed: Vec<String>,
    ) -> CoreResult<Option<Content>> {
        self.edit_genres(id, |existing| genres::remove(existing, &removed))
            .await
    }
}
