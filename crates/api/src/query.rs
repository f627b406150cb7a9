//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /content/filter` (`?title=&genre=`).
///
/// Both are optional; an empty value is treated the same as an absent one.
#[derive(Debug, Default, Deserialize)]
pub struct ContentFilterParams {
    pub title: Option<String>,
    pub genre: Option<String>,
}
