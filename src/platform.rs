//! Platform classification and per-platform selector profiles.
//!
//! Classification is a fixed-order list of marker checks; the first that
//! fires decides the platform and [`Platform::Generic`] catches everything
//! else. Each platform carries the selector profile the section extractor
//! uses. Retailers without a tuned profile share the generic one.

use dom_query::Document;

use crate::dom;
use crate::result::SectionKey;
use crate::url_utils;

/// Storefront family of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Shopify,
    WooCommerce,
    Zalando,
    Asos,
    Hm,
    Zara,
    Generic,
}

/// Section selectors for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    pub platform: Platform,
    pub selectors: &'static [(SectionKey, &'static str)],
}

const SHOPIFY_SELECTORS: &[(SectionKey, &str)] = &[
    (
        SectionKey::Title,
        ".product-single__title, .product__title, h1.product-title, [data-product-title]",
    ),
    (
        SectionKey::Description,
        ".product-single__description, .product__description, .product-description, .rte, [data-product-description]",
    ),
    (
        SectionKey::Sustainability,
        r#"[class*="sustain"], [class*="eco"], [class*="environment"], [data-sustainability]"#,
    ),
    (
        SectionKey::Materials,
        r#"[class*="material"], [class*="composition"], [class*="fabric"]"#,
    ),
];

const WOOCOMMERCE_SELECTORS: &[(SectionKey, &str)] = &[
    (SectionKey::Title, ".product_title, h1.entry-title"),
    (
        SectionKey::Description,
        ".woocommerce-product-details__short-description, .product-description, .entry-content",
    ),
    (SectionKey::Sustainability, r#"[class*="sustain"], [class*="eco"]"#),
    (SectionKey::Materials, r#".product_meta, [class*="material"]"#),
];

const GENERIC_SELECTORS: &[(SectionKey, &str)] = &[
    (SectionKey::Title, "h1"),
    (
        SectionKey::Description,
        r#"[class*="product-desc"], [class*="product-detail"], [class*="pdp-desc"], [itemprop="description"], .product-description"#,
    ),
    (
        SectionKey::Sustainability,
        r#"[class*="sustain"], [class*="eco"], [class*="green-claim"], [class*="environment"], [class*="conscious"], [class*="responsible"]"#,
    ),
    (
        SectionKey::Materials,
        r#"[class*="material"], [class*="composition"], [class*="fabric"], [class*="ingredient"]"#,
    ),
];

impl Platform {
    /// Every platform, in classification priority order.
    pub const ALL: [Platform; 7] = [
        Platform::Shopify,
        Platform::WooCommerce,
        Platform::Zalando,
        Platform::Asos,
        Platform::Hm,
        Platform::Zara,
        Platform::Generic,
    ];

    /// Stable identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Platform::Shopify => "shopify",
            Platform::WooCommerce => "woocommerce",
            Platform::Zalando => "zalando",
            Platform::Asos => "asos",
            Platform::Hm => "hm",
            Platform::Zara => "zara",
            Platform::Generic => "generic",
        }
    }

    /// Selector profile used by the section extractor.
    #[must_use]
    pub const fn profile(self) -> PlatformProfile {
        let selectors = match self {
            Platform::Shopify => SHOPIFY_SELECTORS,
            Platform::WooCommerce => WOOCOMMERCE_SELECTORS,
            Platform::Zalando | Platform::Asos | Platform::Hm | Platform::Zara | Platform::Generic => {
                GENERIC_SELECTORS
            }
        };
        PlatformProfile {
            platform: self,
            selectors,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// What a marker check can look at.
struct PageSignals<'a> {
    doc: &'a Document,
    url: &'a str,
    host: String,
}

type Marker = fn(&PageSignals) -> bool;

fn shopify_marker(page: &PageSignals) -> bool {
    dom::matches_any(page.doc, r#"meta[name="shopify-checkout-api-token"]"#)
        || page.url.contains("/products/")
}

fn woocommerce_marker(page: &PageSignals) -> bool {
    dom::has_class(&page.doc.select("body"), "single-product")
        || dom::matches_any(page.doc, ".woocommerce-product-details__short-description")
}

fn zalando_marker(page: &PageSignals) -> bool {
    page.host.contains("zalando")
}

fn asos_marker(page: &PageSignals) -> bool {
    page.host.contains("asos")
}

fn hm_marker(page: &PageSignals) -> bool {
    page.host.contains("hm.com") || page.host.contains("h&m")
}

fn zara_marker(page: &PageSignals) -> bool {
    page.host.contains("zara.com")
}

const MARKERS: &[(Platform, Marker)] = &[
    (Platform::Shopify, shopify_marker),
    (Platform::WooCommerce, woocommerce_marker),
    (Platform::Zalando, zalando_marker),
    (Platform::Asos, asos_marker),
    (Platform::Hm, hm_marker),
    (Platform::Zara, zara_marker),
];

/// Classify the page. Never fails; unmatched pages are [`Platform::Generic`].
#[must_use]
pub fn detect_platform(doc: &Document, url: Option<&str>) -> Platform {
    let url = url.unwrap_or_default();
    let signals = PageSignals {
        doc,
        url,
        host: url_utils::extract_hostname(url).unwrap_or_default(),
    };

    MARKERS
        .iter()
        .find(|(_, marker)| marker(&signals))
        .map_or(Platform::Generic, |(platform, _)| *platform)
}
