//! Row model for the `contents` table.

use catalog_core::content::Content;
use catalog_core::types::{ContentId, Timestamp};
use sqlx::FromRow;

/// A row from the `contents` table.
#[derive(Debug, Clone, FromRow)]
pub struct ContentRow {
    pub id: ContentId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_url: String,
    pub duration: i32,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub genre_list: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ContentRow> for Content {
    fn from(row: ContentRow) -> Self {
        Content {
            id: row.id,
            title: row.title,
            subtitle: row.subtitle,
            description: row.description,
            image_url: row.image_url,
            duration: row.duration,
            start_time: row.start_time,
            end_time: row.end_time,
            genre_list: row.genre_list,
        }
    }
}
