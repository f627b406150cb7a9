//! Request bodies accepted by the content endpoints.

use catalog_core::content::ContentDto;
use catalog_core::error::CoreError;
use catalog_core::genres;
use catalog_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /content` and `PATCH /content/{id}`.
///
/// Every field is optional. On create an absent field takes its creation
/// default; on update it leaves the stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContentInput {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Seconds.
    #[validate(range(min = 0, message = "duration must not be negative"))]
    pub duration: Option<i32>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub genre_list: Option<Vec<String>>,
}

impl ContentInput {
    /// Run the shape checks, mapping failures to a validation error.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))
    }

    /// Convert into the manager's transfer object. A supplied genre list is
    /// de-duplicated on the way in.
    pub fn into_dto(self) -> ContentDto {
        ContentDto {
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            image_url: self.image_url,
            duration: self.duration,
            start_time: self.start_time,
            end_time: self.end_time,
            genre_list: self.genre_list.map(genres::distinct),
        }
    }
}
