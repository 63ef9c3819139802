//! Brand resolution.
//!
//! Resolution is a priority chain of independent strategies; the first one
//! that produces a name wins and nothing is scored or combined. The chain
//! depends on whether the host is a known marketplace:
//!
//! - marketplace: product-brand selectors → schema.org microdata →
//!   linked data (incl. manufacturer) → marketplace display name
//! - brand-owned store: linked data → schema.org microdata →
//!   `og:site_name` → hostname label
//!
//! Every chain ends in a strategy that cannot fail for a page with a URL,
//! and [`UNKNOWN_BRAND`] covers pages without one.

pub mod marketplace;

use std::fmt;

use dom_query::Document;
use tracing::debug;

use crate::dom;
use crate::metadata::{json_ld, meta_tags};
use crate::patterns::{BRAND_BOILERPLATE, MARKETPLACE_SCHEMA_BRAND_SELECTOR, SCHEMA_BRAND_SELECTOR};
use crate::url_utils;

pub use marketplace::{find_marketplace, MarketplaceProfile, MARKETPLACES};

/// Returned when neither markup nor URL names a brand.
pub const UNKNOWN_BRAND: &str = "Unknown brand";

/// Cleaned marketplace labels must be strictly between these lengths.
const MIN_LABEL_CHARS: usize = 1;
const MAX_LABEL_CHARS: usize = 100;

/// One step of a resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandStrategy {
    /// Marketplace product-brand element, boilerplate stripped.
    MarketplaceSelectors,
    /// schema.org brand microdata as marketplaces publish it.
    MarketplaceSchema,
    /// Linked-data `brand.name` / `brand` / `manufacturer.name`.
    MarketplaceLinkedData,
    /// The marketplace's own name.
    MarketplaceName,
    /// Linked-data `brand.name` / `brand`.
    LinkedData,
    /// schema.org brand microdata.
    SchemaMarkup,
    /// `og:site_name`.
    SiteName,
    /// First hostname label without `www.`.
    DomainLabel,
}

const MARKETPLACE_CHAIN: &[BrandStrategy] = &[
    BrandStrategy::MarketplaceSelectors,
    BrandStrategy::MarketplaceSchema,
    BrandStrategy::MarketplaceLinkedData,
    BrandStrategy::MarketplaceName,
];

const STORE_CHAIN: &[BrandStrategy] = &[
    BrandStrategy::LinkedData,
    BrandStrategy::SchemaMarkup,
    BrandStrategy::SiteName,
    BrandStrategy::DomainLabel,
];

/// What the strategies read.
#[derive(Clone, Copy)]
pub struct BrandSignals<'a> {
    pub doc: &'a Document,
    pub hostname: Option<&'a str>,
    pub marketplace: Option<&'static MarketplaceProfile>,
}

impl fmt::Debug for BrandSignals<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrandSignals")
            .field("hostname", &self.hostname)
            .field("marketplace", &self.marketplace.map(|m| m.domain_token))
            .finish_non_exhaustive()
    }
}

impl BrandStrategy {
    /// Run this strategy alone.
    #[must_use]
    pub fn apply(self, signals: &BrandSignals) -> Option<String> {
        match self {
            BrandStrategy::MarketplaceSelectors => signals
                .marketplace
                .and_then(|m| marketplace_selector_brand(signals.doc, m)),
            BrandStrategy::MarketplaceSchema => {
                meta_tags::schema_brand(signals.doc, MARKETPLACE_SCHEMA_BRAND_SELECTOR)
                    .filter(|name| name.chars().count() > MIN_LABEL_CHARS)
            }
            BrandStrategy::MarketplaceLinkedData => json_ld::linked_data_brand(signals.doc, true),
            BrandStrategy::MarketplaceName => signals.marketplace.map(|m| m.display_name.to_string()),
            BrandStrategy::LinkedData => json_ld::linked_data_brand(signals.doc, false),
            BrandStrategy::SchemaMarkup => meta_tags::schema_brand(signals.doc, SCHEMA_BRAND_SELECTOR),
            BrandStrategy::SiteName => meta_tags::site_name(signals.doc),
            BrandStrategy::DomainLabel => signals
                .hostname
                .map(url_utils::site_label)
                .filter(|label| !label.is_empty())
                .map(str::to_string),
        }
    }
}

/// Strip marketplace boilerplate ("by ", "Visit the ", " Store", ...) from a label.
///
/// ```rust
/// use canopi_scan::brand::clean_brand_label;
///
/// assert_eq!(clean_brand_label("by Nike"), "Nike");
/// assert_eq!(clean_brand_label("Visit the Adidas Store"), "Adidas");
/// ```
#[must_use]
pub fn clean_brand_label(text: &str) -> String {
    let mut cleaned = text.trim().to_string();
    for pattern in BRAND_BOILERPLATE.iter() {
        cleaned = pattern.replace(&cleaned, "").into_owned();
    }
    cleaned.trim().to_string()
}

fn marketplace_selector_brand(doc: &Document, marketplace: &MarketplaceProfile) -> Option<String> {
    marketplace.brand_selectors.iter().find_map(|selector| {
        let element = dom::select_first(doc, selector)?;
        let cleaned = clean_brand_label(&dom::text_content(&element));
        let len = cleaned.chars().count();
        (len > MIN_LABEL_CHARS && len < MAX_LABEL_CHARS).then_some(cleaned)
    })
}

/// Resolve the brand and report which strategy produced it.
///
/// `None` as the strategy means nothing matched and [`UNKNOWN_BRAND`] was used.
#[must_use]
pub fn resolve_brand_with_source(doc: &Document, url: Option<&str>) -> (String, Option<BrandStrategy>) {
    let hostname = url.and_then(url_utils::extract_hostname);
    let marketplace = hostname.as_deref().and_then(find_marketplace);
    let signals = BrandSignals {
        doc,
        hostname: hostname.as_deref(),
        marketplace,
    };

    let chain = if marketplace.is_some() { MARKETPLACE_CHAIN } else { STORE_CHAIN };

    let resolved = chain
        .iter()
        .find_map(|strategy| strategy.apply(&signals).map(|name| (name, *strategy)));

    match resolved {
        Some((name, strategy)) => {
            debug!(brand = %name, ?strategy, marketplace = marketplace.map(|m| m.display_name), "resolved brand");
            (name, Some(strategy))
        }
        None => (UNKNOWN_BRAND.to_string(), None),
    }
}

/// Resolve the brand name of the page. Always non-empty.
#[must_use]
pub fn resolve_brand(doc: &Document, url: Option<&str>) -> String {
    resolve_brand_with_source(doc, url).0
}
