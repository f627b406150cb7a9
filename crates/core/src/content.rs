//! The content record and its partial-update transfer object.

use serde::{Deserialize, Serialize};

use crate::types::{ContentId, Timestamp};

/// Entity name used in not-found errors and log lines.
pub const CONTENT_ENTITY: &str = "Content";

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A catalog item as stored by a gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub id: ContentId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_url: String,
    /// Running time in seconds, never negative.
    pub duration: i32,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    /// Ordered, but treated as a set: mutations keep it free of duplicates.
    pub genre_list: Vec<String>,
}

impl Content {
    /// Build a fresh record from a create DTO, filling unset fields with
    /// creation defaults (empty text, zero duration, Unix epoch, no genres).
    pub fn from_dto(id: ContentId, dto: ContentDto) -> Self {
        Self {
            id,
            title: dto.title.unwrap_or_default(),
            subtitle: dto.subtitle.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            image_url: dto.image_url.unwrap_or_default(),
            duration: dto.duration.unwrap_or_default(),
            start_time: dto.start_time.unwrap_or(Timestamp::UNIX_EPOCH),
            end_time: dto.end_time.unwrap_or(Timestamp::UNIX_EPOCH),
            genre_list: dto.genre_list.unwrap_or_default(),
        }
    }

    /// Overwrite every field the DTO sets; `None` leaves a field untouched.
    pub fn apply(&mut self, dto: ContentDto) {
        if let Some(title) = dto.title {
            self.title = title;
        }
        if let Some(subtitle) = dto.subtitle {
            self.subtitle = subtitle;
        }
        if let Some(description) = dto.description {
            self.description = description;
        }
        if let Some(image_url) = dto.image_url {
            self.image_url = image_url;
        }
        if let Some(duration) = dto.duration {
            self.duration = duration;
        }
        if let Some(start_time) = dto.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = dto.end_time {
            self.end_time = end_time;
        }
        if let Some(genre_list) = dto.genre_list {
            self.genre_list = genre_list;
        }
    }
}

// ---------------------------------------------------------------------------
// DTO
// ---------------------------------------------------------------------------

/// Desired state for a create or a partial update.
///
/// `Some` always wins, including `Some(String::new())` and `Some(vec![])`,
/// so "set to empty" and "leave unchanged" stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDto {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub duration: Option<i32>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub genre_list: Option<Vec<String>>,
}

impl ContentDto {
    /// A DTO that only replaces the genre list.
    pub fn genres_only(genre_list: Vec<String>) -> Self {
        Self {
            genre_list: Some(genre_list),
            ..Self::default()
        }
    }
}
