//! Known multi-brand marketplaces.
//!
//! On these sites the page's brand is the product's maker, not the site
//! operator, so each entry lists selectors for the product-brand element.
//! Lookup is by hostname substring and the table order is significant: the
//! first entry whose token appears in the hostname wins.

/// A multi-brand retailer and where it prints the product brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketplaceProfile {
    /// Substring of the hostname identifying the site.
    pub domain_token: &'static str,
    /// Name returned when no product brand can be found.
    pub display_name: &'static str,
    /// Product-brand selectors, tried in order.
    pub brand_selectors: &'static [&'static str],
}

pub const MARKETPLACES: &[MarketplaceProfile] = &[
    MarketplaceProfile {
        domain_token: "asos.com",
        display_name: "ASOS",
        brand_selectors: &[
            r#"[data-testid="product-brand"]"#,
            ".product-brand",
            r#"a[data-testid="brand-link"]"#,
            r#"[class*="brandName"]"#,
            ".product-hero h2 a",
        ],
    },
    MarketplaceProfile {
        domain_token: "zalando",
        display_name: "Zalando",
        brand_selectors: &[
            r#"[class*="BrandName"]"#,
            r#"[data-testid="brand-name"]"#,
            r#"h3[class*="brand"]"#,
            ".z-brand-logo",
            r#"a[href*="/brand/"]"#,
        ],
    },
    MarketplaceProfile {
        domain_token: "farfetch.com",
        display_name: "Farfetch",
        brand_selectors: &[
            r#"[data-component="ProductDesignerName"]"#,
            r#"[data-tstid="productDesignerName"]"#,
            r#"a[href*="/designer/"]"#,
            r#"h2[class*="designer"]"#,
        ],
    },
    MarketplaceProfile {
        domain_token: "nordstrom.com",
        display_name: "Nordstrom",
        brand_selectors: &[
            r#"[class*="brand-title"]"#,
            r#"a[class*="brand"]"#,
            "h2.product-title a",
            r#"[data-element="brand-link"]"#,
        ],
    },
    MarketplaceProfile {
        domain_token: "aboutyou",
        display_name: "About You",
        brand_selectors: &[r#"[class*="brandName"]"#, r#"a[href*="/brand/"]"#, r#"[data-testid="brand"]"#],
    },
    MarketplaceProfile {
        domain_token: "boozt.com",
        display_name: "Boozt",
        brand_selectors: &[r#"[class*="brand"]"#, ".product-brand", r#"a[href*="/brand/"]"#],
    },
    MarketplaceProfile {
        domain_token: "ssense.com",
        display_name: "SSENSE",
        brand_selectors: &[r#"[class*="designer"]"#, r#"a[href*="/designer/"]"#, ".product-designer"],
    },
    MarketplaceProfile {
        domain_token: "mrporter.com",
        display_name: "Mr Porter",
        brand_selectors: &[r#"[class*="designer"]"#, r#"a[href*="/designer/"]"#, ".product-designer-name"],
    },
    MarketplaceProfile {
        domain_token: "net-a-porter",
        display_name: "Net-a-Porter",
        brand_selectors: &[r#"[class*="designer"]"#, r#"a[href*="/designer/"]"#],
    },
    MarketplaceProfile {
        domain_token: "depop.com",
        display_name: "Depop",
        brand_selectors: &[r#"[class*="brand"]"#],
    },
    MarketplaceProfile {
        domain_token: "vestiaire",
        display_name: "Vestiaire",
        brand_selectors: &[r#"[class*="brand"]"#, r#"[data-testid="brand"]"#],
    },
    MarketplaceProfile {
        domain_token: "amazon",
        display_name: "Amazon",
        brand_selectors: &["#bylineInfo", "#brand", "a#bylineInfo", ".po-brand .po-break-word"],
    },
];

/// The marketplace whose token occurs in `hostname`, if any.
#[must_use]
pub fn find_marketplace(hostname: &str) -> Option<&'static MarketplaceProfile> {
    let host = hostname.to_ascii_lowercase();
    MARKETPLACES.iter().find(|m| host.contains(m.domain_token))
}
