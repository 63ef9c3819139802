//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate. Every read the pipeline performs
//! goes through these helpers so that stages share one notion of "text
//! content" (all descendant text, rendered or not) and one way of iterating
//! matches in document order.
//!
//! The only mutating helper is [`open_disclosure`].

pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Whitespace-separated class tokens of the first element.
#[must_use]
pub fn has_class(sel: &Selection, class: &str) -> bool {
    sel.attr("class")
        .is_some_and(|c| c.split_whitespace().any(|token| token == class))
}

// === Text Content ===

/// All text of the node and its descendants, including text in collapsed or
/// visually hidden subtrees.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with surrounding whitespace removed.
#[must_use]
pub fn trimmed_text(sel: &Selection) -> String {
    text_content(sel).trim().to_string()
}

/// Number of direct element children (text nodes not counted).
#[must_use]
pub fn element_child_count(sel: &Selection) -> usize {
    sel.children().length()
}

// === Querying ===

/// All elements matching `selector`, each as its own selection, in document order.
#[must_use]
pub fn select_all<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// First element matching `selector` in document order.
#[must_use]
pub fn select_first<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

/// Whether any element matches `selector`.
#[inline]
#[must_use]
pub fn matches_any(doc: &Document, selector: &str) -> bool {
    doc.select(selector).exists()
}

/// Text of the whole `<body>`, or of the document when there is no body.
#[must_use]
pub fn body_text(doc: &Document) -> StrTendril {
    let body = doc.select("body");
    if body.exists() {
        text_content(&body)
    } else {
        doc.root().text()
    }
}

// === Mutation ===

/// Force a disclosure element open. Re-opening an open element is a no-op.
#[inline]
pub fn open_disclosure(sel: &Selection) {
    sel.set_attr("open", "");
}
