//! Route definitions for the content catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Content routes mounted at `/content`.
///
/// ```text
/// GET    /               -> list_contents (deprecated)
/// POST   /               -> create_content
/// GET    /filter         -> filter_contents
/// GET    /{id}           -> get_content
/// PATCH  /{id}           -> update_content
/// DELETE /{id}           -> delete_content
/// POST   /{id}/genre     -> add_genres
/// DELETE /{id}/genre     -> remove_genres
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(content::list_contents).post(content::create_content),
        )
        .route("/filter", get(content::filter_contents))
        .route(
            "/{id}",
            get(content::get_content)
                .patch(content::update_content)
                .delete(content::delete_content),
        )
        .route(
            "/{id}/genre",
            axum::routing::post(content::add_genres).delete(content::remove_genres),
        )
}
