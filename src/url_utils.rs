//! URL Utility Functions
//!
//! Hostname helpers used by platform classification, marketplace
//! detection and the domain-name brand fallback.

use url::Url;

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Lowercased hostname of an absolute URL.
///
/// # Returns
/// * The hostname, or `None` for relative or unparsable input
#[must_use]
pub fn extract_hostname(url_str: &str) -> Option<String> {
    let (_, parsed) = is_absolute_url(url_str);
    parsed
        .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        .filter(|host| !host.is_empty())
}

/// Site label derived from a hostname: leading `www.` removed, first label kept.
///
/// ```rust
/// use canopi_scan::url_utils::site_label;
///
/// assert_eq!(site_label("www.shopexample.co"), "shopexample");
/// assert_eq!(site_label("patagonia.com"), "patagonia");
/// ```
#[must_use]
pub fn site_label(hostname: &str) -> &str {
    let host = hostname.strip_prefix("www.").unwrap_or(hostname);
    host.split('.').next().unwrap_or(host)
}
