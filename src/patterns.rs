//! Compiled regex patterns and CSS selectors for page scanning.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! Patterns are organized by the pipeline stage that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Environmental Vocabulary
// =============================================================================

/// Sustainability and compliance vocabulary.
///
/// Stems rather than words so that "recycled", "recyclable" and "recycling"
/// all match. Short acronyms (GRS, RCS, GOTS) match anywhere in the text;
/// false positives are accepted because the classifier makes the final call.
pub static ENV_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)recycl|organic|sustainab|eco-|environ|certif|carbon|climate|neutral|gots|oeko|bluesign|fair.?trade|b.?corp|GRS|RCS|offset|biodeg|compost|renewable",
    )
    .expect("ENV_KEYWORDS regex")
});

// =============================================================================
// Brand Boilerplate
// =============================================================================

/// Boilerplate stripped from marketplace brand labels, applied in order.
///
/// "by Nike", "from Levi's", "Brand: Patagonia", "Visit the Adidas Store".
pub static BRAND_BOILERPLATE: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)^by\s+").expect("brand by regex"),
        Regex::new(r"(?i)^from\s+").expect("brand from regex"),
        Regex::new(r"(?i)^brand:\s*").expect("brand label regex"),
        Regex::new(r"(?i)^visit the\s+").expect("brand visit regex"),
        Regex::new(r"(?i)\s+store$").expect("brand store regex"),
    ]
});

// =============================================================================
// Report Wording
// =============================================================================

/// Known brand issues serious enough to cap the trust label.
pub static LABOUR_ISSUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)forced labou?r|child labou?r|labou?r exploitation|labou?r violation")
        .expect("LABOUR_ISSUE regex")
});

// =============================================================================
// CSS Selectors
// =============================================================================

/// Closed native disclosure elements.
pub const CLOSED_DISCLOSURE_SELECTOR: &str = "details:not([open])";

/// Containers that commonly hold collapsed product information:
/// accordions, tab panels, collapsibles and spec blocks.
pub const HIDDEN_PANEL_SELECTORS: &[&str] = &[
    r#"[role="tabpanel"]"#,
    ".accordion-panel, .accordion-body, .accordion-content",
    r#"[class*="accordion"] [class*="panel"]"#,
    r#"[class*="accordion"] [class*="body"]"#,
    r#"[class*="accordion"] [class*="content"]"#,
    ".collapse, .collapsible-content",
    r#"[class*="collapsible"] [class*="content"]"#,
    "details",
    ".tab-pane, .tab-panel, .tab-content",
    r#"[class*="product-detail"] [class*="panel"]"#,
    r#"[class*="pdp-detail"]"#,
    r#"[class*="product-info"]"#,
    r#"[class*="material"] [class*="content"]"#,
    r#"[class*="sustain"] [class*="content"]"#,
    r#"[class*="feature"]"#,
    r#"[class*="spec"]"#,
];

/// Leaf-ish element types walked by the full-page keyword scan.
pub const SCAN_CANDIDATE_SELECTOR: &str = "p, span, div, li, td, dd, section, article";

/// Main-content landmarks for sparse pages, in priority order.
pub const MAIN_LANDMARK_SELECTORS: &[&str] = &["main", r#"[role="main"]"#, "#content", ".content", "article"];

/// Linked-data script blocks.
pub const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

/// Page description meta tag.
pub const META_DESCRIPTION_SELECTOR: &str = r#"meta[name="description"]"#;

/// Open Graph site name.
pub const OG_SITE_NAME_SELECTOR: &str = r#"meta[property="og:site_name"]"#;

/// Images carrying alt text.
pub const IMAGE_ALT_SELECTOR: &str = "img[alt]";

/// schema.org brand microdata as consulted on marketplaces.
pub const MARKETPLACE_SCHEMA_BRAND_SELECTOR: &str = r#"[itemprop="brand"] [itemprop="name"], [itemtype*="schema.org/Brand"] [itemprop="name"], meta[itemprop="brand"]"#;

/// schema.org brand microdata as consulted on brand-owned sites.
pub const SCHEMA_BRAND_SELECTOR: &str =
    r#"[itemtype*="schema.org/Brand"] [itemprop="name"], [itemprop="brand"] [itemprop="name"]"#;
