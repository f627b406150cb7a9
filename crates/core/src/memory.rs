//! Process-local content store.
//!
//! Backs tests and the `CONTENT_STORE=memory` server mode. Records keep
//! insertion order so listings are stable.

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::content::{Content, ContentDto};
use crate::error::CoreResult;
use crate::gateway::Gateway;
use crate::types::{ContentId, Timestamp};

#[derive(Debug, Default)]
pub struct InMemoryGateway {
    records: RwLock<Vec<Content>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given records already stored.
    pub fn with_records(records: Vec<Content>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// A small catalog for local runs without a database.
    pub fn with_sample_data() -> Self {
        Self::with_records(sample_contents())
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl Gateway<Content, ContentDto> for InMemoryGateway {
    async fn read_all(&self) -> CoreResult<Vec<Content>> {
        Ok(self.records.read().await.clone())
    }

    async fn read(&self, id: ContentId) -> CoreResult<Option<Content>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, dto: ContentDto) -> CoreResult<Option<Content>> {
        let content = Content::from_dto(Uuid::new_v4(), dto);
        let mut records = self.records.write().await;
        if records.iter().any(|c| c.id == content.id) {
            return Ok(None);
        }
        records.push(content.clone());
        Ok(Some(content))
    }

    async fn update(&self, id: ContentId, dto: ContentDto) -> CoreResult<Option<Content>> {
        let mut records = self.records.write().await;
        Ok(records.iter_mut().find(|c| c.id == id).map(|content| {
            content.apply(dto);
            content.clone()
        }))
    }

    async fn delete(&self, id: ContentId) -> CoreResult<ContentId> {
        self.records.write().await.retain(|c| c.id != id);
        Ok(id)
    }
}

fn sample_contents() -> Vec<Content> {
    let base = Utc
        .with_ymd_and_hms(2024, 3, 9, 20, 0, 0)
        .single()
        .unwrap_or(Timestamp::UNIX_EPOCH);

    let entries: [(&str, &str, i32, &[&str]); 3] = [
        ("Title 1", "The first sample", 120, &["Drama", "Thriller"]),
        ("Title 2", "The second sample", 95, &["Comedy"]),
        ("Late Show", "An evening programme", 60, &["Talk Show", "Comedy"]),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, (title, subtitle, minutes, genres))| {
            let start = base + Duration::days(i as i64);
            Content {
                id: Uuid::new_v4(),
                title: title.to_string(),
                subtitle: subtitle.to_string(),
                description: format!("{title}: {subtitle}"),
                image_url: format!("https://image.example/{}.png", i + 1),
                duration: minutes * 60,
                start_time: start,
                end_time: start + Duration::minutes(i64::from(*minutes)),
                genre_list: genres.iter().map(|g| g.to_string()).collect(),
            }
        })
        .collect()
}
