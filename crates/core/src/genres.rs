//! Genre list policy and the title/genre listing filter.
//!
//! Two different notions of "match" live here and must not be unified:
//!
//! - Adding and removing genres compares whole values, case-sensitively.
//! - Filtering a listing compares substrings, case-insensitively.

use crate::content::Content;

// ---------------------------------------------------------------------------
// Genre list mutation (exact equality)
// ---------------------------------------------------------------------------

/// Drop repeated genres, keeping the first occurrence of each.
pub fn distinct<I>(genres: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    for genre in genres {
        if !out.contains(&genre) {
            out.push(genre);
        }
    }
    out
}

/// Existing genres followed by `added`, with duplicates collapsed.
pub fn merge(existing: &[String], added: &[String]) -> Vec<String> {
    distinct(existing.iter().chain(added).cloned())
}

/// Existing genres minus every value present in `removed`.
///
/// Removing a genre that is not in the list changes nothing.
pub fn remove(existing: &[String], removed: &[String]) -> Vec<String> {
    existing
        .iter()
        .filter(|g| !removed.contains(g))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Listing filter (case-insensitive substring)
// ---------------------------------------------------------------------------

/// Optional title/genre filter for listings. Both criteria must hold.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    title: Option<String>,
    genre: Option<String>,
}

impl ContentFilter {
    /// Empty strings count as "no filter".
    pub fn new(title: Option<&str>, genre: Option<&str>) -> Self {
        let normalize = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_lowercase);
        Self {
            title: normalize(title),
            genre: normalize(genre),
        }
    }

    /// `true` when the filter lets everything through.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.genre.is_none()
    }

    pub fn matches(&self, content: &Content) -> bool {
        let title_ok = self
            .title
            .as_deref()
            .map_or(true, |needle| content.title.to_lowercase().contains(needle));

        let genre_ok = self.genre.as_deref().map_or(true, |needle| {
            content
                .genre_list
                .iter()
                .any(|g| g.to_lowercase().contains(needle))
        });

        title_ok && genre_ok
    }

    /// Keep only the records that match, preserving order.
    pub fn apply(&self, contents: Vec<Content>) -> Vec<Content> {
        if self.is_empty() {
            return contents;
        }
        contents.into_iter().filter(|c| self.matches(c)).collect()
    }
}
