//! Full-page keyword scan.
//!
//! The recall backstop: structural selectors only know the markup they were
//! written for, so this pass walks every paragraph-sized element and keeps
//! any whose text mentions environmental vocabulary.

use std::collections::HashSet;

use dom_query::Document;
use tracing::trace;

use super::{truncate_chars, ENV_MENTIONS_MAX_CHARS};
use crate::dom;
use crate::keywords::first_match;
use crate::patterns::SCAN_CANDIDATE_SELECTOR;

/// Elements with more direct element children than this are page containers.
const MAX_ELEMENT_CHILDREN: usize = 10;

/// Accepted text length range, in characters (inclusive).
const MIN_TEXT_CHARS: usize = 10;
const MAX_TEXT_CHARS: usize = 2000;

/// Distinct keyword-bearing element texts, in document order.
///
/// Exposed separately from [`scan_env_mentions`] so callers can inspect the
/// individual mentions.
#[must_use]
pub fn env_mention_fragments(doc: &Document) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut mentions = Vec::new();

    for element in dom::select_all(doc, SCAN_CANDIDATE_SELECTOR) {
        if dom::element_child_count(&element) > MAX_ELEMENT_CHILDREN {
            continue;
        }
        let text = dom::trimmed_text(&element);
        let len = text.chars().count();
        if !(MIN_TEXT_CHARS..=MAX_TEXT_CHARS).contains(&len) || seen.contains(&text) {
            continue;
        }
        if let Some(keyword) = first_match(&text) {
            trace!(keyword, chars = len, "environmental mention");
            seen.insert(text.clone());
            mentions.push(text);
        }
    }

    mentions
}

/// Keyword-bearing element texts joined and capped at [`ENV_MENTIONS_MAX_CHARS`].
#[must_use]
pub fn scan_env_mentions(doc: &Document) -> Option<String> {
    let mentions = env_mention_fragments(doc);
    if mentions.is_empty() {
        return None;
    }
    let joined = mentions.join(" ");
    Some(truncate_chars(&joined, ENV_MENTIONS_MAX_CHARS).trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_keyword_paragraphs() {
        let html = r#"<body>
            <p>Free delivery over 50 pounds</p>
            <p>Made with organic cotton grown without pesticides.</p>
            <li>Bluesign approved dyes</li>
        </body>"#;
        let mentions = env_mention_fragments(&dom::parse(html));
        assert_eq!(
            mentions,
            vec![
                "Made with organic cotton grown without pesticides.".to_string(),
                "Bluesign approved dyes".to_string()
            ]
        );
    }

    #[test]
    fn identical_text_kept_once() {
        // div and its only child span share the same text.
        let html = "<div><span>Carbon neutral shipping</span></div><p>Carbon neutral shipping</p>";
        let mentions = env_mention_fragments(&dom::parse(html));
        assert_eq!(mentions, vec!["Carbon neutral shipping".to_string()]);
    }

    #[test]
    fn length_bounds_enforced() {
        let long = format!("recycled {}", "x".repeat(2000));
        let html = format!("<p>eco-tee</p><p>{long}</p><p>Recycled wool</p>");
        let mentions = env_mention_fragments(&dom::parse(&html));
        assert_eq!(mentions, vec!["Recycled wool".to_string()]);
    }

    #[test]
    fn wide_containers_skipped() {
        let items: String = (0..11).map(|i| format!("<span>item {i}</span>")).collect();
        let html = format!("<div>Organic range: {items}</div>");
        let mentions = env_mention_fragments(&dom::parse(&html));
        assert!(mentions.is_empty());
    }

    #[test]
    fn ten_children_still_scanned() {
        let items: String = (0..10).map(|i| format!("<span>item {i}</span>")).collect();
        let html = format!("<div>Organic range: {items}</div>");
        let mentions = env_mention_fragments(&dom::parse(&html));
        assert_eq!(mentions.len(), 1);
    }

    #[test]
    fn joined_output_is_capped() {
        let html: String = (0..400)
            .map(|i| format!("<p>Entry {i}: this garment uses recycled fibres throughout.</p>"))
            .collect();
        let text = scan_env_mentions(&dom::parse(&html)).unwrap_or_default();
        assert!(text.chars().count() <= ENV_MENTIONS_MAX_CHARS);
    }

    #[test]
    fn nothing_found_is_none() {
        assert!(scan_env_mentions(&dom::parse("<p>Regular fit, machine wash.</p>")).is_none());
    }
}
