//! Handlers for the content catalog.
//!
//! Each handler makes one manager call and maps the outcome: a value is 200,
//! an absent record or empty listing is 404, an error is 500. Outcome logging
//! happens in the manager decorator, not here.

use axum::extract::{Query, State};
use axum::http::header::LINK;
use axum::http::HeaderName;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::content::{Content, CONTENT_ENTITY};
use catalog_core::error::CoreError;
use catalog_core::types::ContentId;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, Path};
use crate::models::ContentInput;
use crate::query::ContentFilterParams;
use crate::state::AppState;

/// `Deprecation` response header (RFC 9745).
const DEPRECATION: HeaderName = HeaderName::from_static("deprecation");

/// Successor of the deprecated unfiltered listing.
const FILTER_LINK: &str = "</api/v1/content/filter>; rel=\"successor-version\"";

fn not_found(id: ContentId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: CONTENT_ENTITY,
        id,
    })
}

fn non_empty(contents: Vec<Content>) -> AppResult<Vec<Content>> {
    if contents.is_empty() {
        return Err(AppError::NotFound("No contents found".into()));
    }
    Ok(contents)
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /api/v1/content
///
/// List every content record. Deprecated in favour of `/content/filter`.
pub async fn list_contents(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let contents = non_empty(state.manager.get_many_contents().await?)?;

    Ok((
        [(DEPRECATION, "true"), (LINK, FILTER_LINK)],
        Json(contents),
    ))
}

/// GET /api/v1/content/filter?title=&genre=
///
/// List content whose title contains `title` and which has a genre
/// containing `genre`, both case-insensitively.
pub async fn filter_contents(
    State(state): State<AppState>,
    Query(params): Query<ContentFilterParams>,
) -> AppResult<impl IntoResponse> {
    let contents = state
        .manager
        .get_filtered_contents(params.title.as_deref(), params.genre.as_deref())
        .await?;

    Ok(Json(non_empty(contents)?))
}

// ---------------------------------------------------------------------------
// Single record
// ---------------------------------------------------------------------------

/// GET /api/v1/content/{id}
pub async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<ContentId>,
) -> AppResult<impl IntoResponse> {
    let content = state
        .manager
        .get_content(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(content))
}

/// POST /api/v1/content
///
/// Create a content record. A create that yields no record is a 500
/// problem rather than a 404.
pub async fn create_content(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ContentInput>,
) -> AppResult<impl IntoResponse> {
    input.check()?;

    let content = state
        .manager
        .create_content(input.into_dto())
        .await?
        .ok_or_else(|| AppError::Problem("Failed to create content".into()))?;

    Ok(Json(content))
}

/// PATCH /api/v1/content/{id}
///
/// Partially update a content record; absent fields are left unchanged.
pub async fn update_content(
    State(state): State<AppState>,
    Path(id): Path<ContentId>,
    JsonBody(input): JsonBody<ContentInput>,
) -> AppResult<impl IntoResponse> {
    input.check()?;

    let content = state
        .manager
        .update_content(id, input.into_dto())
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(content))
}

/// DELETE /api/v1/content/{id}
///
/// Always answers with the id, whether or not the record existed.
pub async fn delete_content(
    State(state): State<AppState>,
    Path(id): Path<ContentId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.manager.delete_content(id).await?;

    Ok(Json(deleted))
}

// ---------------------------------------------------------------------------
// Genres
// ---------------------------------------------------------------------------

/// POST /api/v1/content/{id}/genre
///
/// Body: JSON array of genre names to add.
pub async fn add_genres(
    State(state): State<AppState>,
    Path(id): Path<ContentId>,
    JsonBody(genres): JsonBody<Vec<String>>,
) -> AppResult<impl IntoResponse> {
    let content = state
        .manager
        .add_genres(id, genres)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(content))
}

/// DELETE /api/v1/content/{id}/genre
///
/// Body: JSON array of genre names to remove.
pub async fn remove_genres(
    State(state): State<AppState>,
    Path(id): Path<ContentId>,
    JsonBody(genres): JsonBody<Vec<String>>,
) -> AppResult<impl IntoResponse> {
    let content = state
        .manager
        .remove_genres(id, genres)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(content))
}
