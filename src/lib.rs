//! # canopi-scan
//!
//! Environmental claim text and brand extraction for e-commerce product pages.
//!
//! The library reads a product page, gathers every piece of text that could
//! carry a sustainability claim (product descriptions, collapsed "materials"
//! and "care" panels, keyword-bearing fragments anywhere on the page, meta
//! descriptions, image labels, linked data), works out which brand the page
//! is selling, and forwards the result to a classification service.
//!
//! ## Quick Start
//!
//! ```rust
//! use canopi_scan::{extract_sections, Options, SectionKey};
//!
//! let html = r#"<html><head><meta name="description" content="Organic cotton tee"></head>
//! <body><main><p>Made from 100% GOTS certified organic cotton.</p></main></body></html>"#;
//!
//! let sections = extract_sections(html, &Options::default());
//! assert!(sections.get(SectionKey::EnvMentions).is_some());
//! println!("{}", sections.full_text());
//! ```
//!
//! ## Features
//!
//! - **Platform profiles**: Shopify, WooCommerce and generic selector sets
//! - **Hidden content**: Text inside collapsed disclosures and tab panels
//! - **Structured data**: JSON-LD descriptions, materials and brand
//! - **Brand resolution**: Marketplace-aware priority chains
//! - **Scanning**: Async request/response channel to the classification service

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Environmental vocabulary matching.
pub mod keywords;

/// URL utilities for hostname and site-label handling.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Platform classification and per-platform selector profiles.
pub mod platform;

/// Extraction stages and the aggregator that runs them.
pub mod extractor;

/// Metadata extraction (JSON-LD, HTML meta tags, schema.org microdata).
pub mod metadata;

/// Brand resolution and the marketplace table.
pub mod brand;

/// Classification service trait and HTTP client.
pub mod client;

/// Scan orchestration.
pub mod scan;

/// Request/response channel to a page agent.
pub mod channel;

/// Plain-text result views.
pub mod report;

// Public API - re-exports
pub use channel::{spawn_agent, AgentHandle, Page};
pub use client::{ClassificationService, HttpClassifier};
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL};
pub use platform::Platform;
pub use report::ScanSession;
pub use result::{
    BrandContext, Certification, Claim, Classification, DisplayScore, ExtractionRequest, ExtractionResult,
    PageSections, Remediation, ScanFailure, SectionKey, Severity, SiteCrawl,
};
pub use scan::Scanner;

/// Extracts claim-bearing text sections from an HTML page.
///
/// `options.url` drives platform detection; leave it `None` for generic
/// extraction. Never fails: stages that find nothing contribute nothing.
///
/// # Example
///
/// ```rust
/// use canopi_scan::{extract_sections, Options, SectionKey};
///
/// let html = r#"<body><details><summary>Materials</summary>
/// <p>GRS certified recycled polyester</p></details></body>"#;
/// let options = Options::default().with_url("https://shop.example.com/item");
/// let sections = extract_sections(html, &options);
/// assert!(sections.full_text().contains("GRS certified recycled polyester"));
/// ```
#[must_use]
pub fn extract_sections(html: &str, options: &Options) -> PageSections {
    let doc = dom::parse(html);
    extractor::extract_page_sections(&doc, options)
}

/// Like [`extract_sections`], for raw bytes in any declared encoding.
///
/// # Example
///
/// ```rust
/// use canopi_scan::{extract_sections_bytes, Options};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Coton biologique certifi\xE9 GOTS</p></body></html>";
/// let sections = extract_sections_bytes(html, &Options::default());
/// assert!(sections.full_text().contains("certifié"));
/// ```
#[must_use]
pub fn extract_sections_bytes(html: &[u8], options: &Options) -> PageSections {
    let html_str = encoding::decode_page(html, None);
    extract_sections(&html_str, options)
}

/// Resolves the brand a page is selling. Always non-empty.
///
/// # Example
///
/// ```rust
/// use canopi_scan::{brand_name, Options};
///
/// let html = r#"<div data-testid="product-brand">by Nike</div>"#;
/// let options = Options::default().with_url("https://www.asos.com/nike/prd/1");
/// assert_eq!(brand_name(html, &options), "Nike");
/// ```
#[must_use]
pub fn brand_name(html: &str, options: &Options) -> String {
    let doc = dom::parse(html);
    brand::resolve_brand(&doc, options.url.as_deref())
}

/// Scans a page against the configured classification service.
///
/// Every outcome is a typed [`ExtractionResult`]; an unusable configuration
/// is reported as an `"error"` failure.
pub async fn scan(html: &str, options: &Options) -> ExtractionResult {
    match HttpClassifier::new(options) {
        Ok(service) => Scanner::new(service, options.clone()).scan(html, None).await,
        Err(err) => ExtractionResult::failure(err.to_string(), DisplayScore::Error),
    }
}
