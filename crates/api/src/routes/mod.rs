pub mod content;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /content                                         list (deprecated), create
/// /content/filter                                  filtered list
/// /content/{id}                                    get, update, delete
/// /content/{id}/genre                              add genres, remove genres
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/content", content::router())
}
