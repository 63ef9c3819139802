//! Environmental keyword matching.
//!
//! A single case-insensitive predicate shared by the full-page scan and the
//! image-label pass. Recall is favoured over precision.

use crate::patterns::ENV_KEYWORDS;

/// Returns true if `text` mentions any sustainability or compliance term.
///
/// # Example
///
/// ```rust
/// use canopi_scan::keywords::is_environmental;
///
/// assert!(is_environmental("Shell: 100% recycled polyester"));
/// assert!(!is_environmental("Regular fit"));
/// ```
#[inline]
#[must_use]
pub fn is_environmental(text: &str) -> bool {
    ENV_KEYWORDS.is_match(text)
}

/// The first matched term, for diagnostics.
#[must_use]
pub fn first_match(text: &str) -> Option<&str> {
    ENV_KEYWORDS.find(text).map(|m| m.as_str())
}
