//! Sparse-page fallback.
//!
//! When the targeted strategies come back nearly empty the page is probably
//! built from markup none of them recognise. Rather than send nothing, take
//! the main-content landmark (or failing that the whole body) as plain text.

use dom_query::Document;

use super::{truncate_chars, FALLBACK_BODY_MAX_CHARS, FALLBACK_LANDMARK_MAX_CHARS};
use crate::dom;
use crate::patterns::MAIN_LANDMARK_SELECTORS;

/// Text of the first non-empty main-content landmark, capped at
/// [`FALLBACK_LANDMARK_MAX_CHARS`]; otherwise the body text capped at
/// [`FALLBACK_BODY_MAX_CHARS`]. `None` only when the page has no text at all.
#[must_use]
pub fn sparse_page_text(doc: &Document) -> Option<String> {
    let landmark = MAIN_LANDMARK_SELECTORS.iter().find_map(|selector| {
        dom::select_first(doc, selector)
            .map(|el| dom::trimmed_text(&el))
            .filter(|text| !text.is_empty())
    });

    let text = match landmark {
        Some(text) => truncate_chars(&text, FALLBACK_LANDMARK_MAX_CHARS).trim_end().to_string(),
        None => {
            let body = dom::body_text(doc);
            truncate_chars(body.trim(), FALLBACK_BODY_MAX_CHARS).trim_end().to_string()
        }
    };

    (!text.is_empty()).then_some(text)
}
