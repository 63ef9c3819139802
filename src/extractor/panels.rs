//! Hidden-panel mining.
//!
//! Material and sustainability details on modern product pages tend to sit in
//! accordions, tab panels and spec blocks that are collapsed on load. This
//! stage reads those containers on every page, whatever the platform.
//! Nested matches (an accordion body inside a `[class*="feature"]` block, say)
//! contribute their text more than once.

use dom_query::Document;

use super::{collect_fragments, truncate_chars, HIDDEN_PANELS_MAX_CHARS};
use crate::patterns::HIDDEN_PANEL_SELECTORS;

/// Fragments this short or shorter are dropped.
const MIN_FRAGMENT_CHARS: usize = 10;

/// Text of all hidden-content containers, joined and capped at
/// [`HIDDEN_PANELS_MAX_CHARS`].
#[must_use]
pub fn mine_hidden_panels(doc: &Document) -> Option<String> {
    let fragments: Vec<String> = HIDDEN_PANEL_SELECTORS
        .iter()
        .flat_map(|selector| collect_fragments(doc, selector, MIN_FRAGMENT_CHARS))
        .collect();

    if fragments.is_empty() {
        return None;
    }

    let joined = fragments.join(" ");
    Some(truncate_chars(&joined, HIDDEN_PANELS_MAX_CHARS).trim_end().to_string())
}
