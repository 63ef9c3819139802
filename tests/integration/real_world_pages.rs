//! Realistic product pages from the main storefront families.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use canopi_scan::platform::detect_platform;
use canopi_scan::{brand_name, dom, extract_sections, Options, Platform, SectionKey};

const WOOCOMMERCE_PAGE: &str = r#"<!DOCTYPE html>
<html><head>
  <meta property="og:site_name" content="Hemp &amp; Co">
  <meta name="description" content="Hemp tote bag, handmade in Lisbon.">
</head>
<body class="product-template-default single-product woocommerce">
  <div class="product">
    <h1 class="product_title entry-title">Market Tote</h1>
    <div class="woocommerce-product-details__short-description">
      <p>A sturdy everyday tote in undyed hemp canvas.</p>
    </div>
    <div class="product_meta"><span class="posted_in">Category: Bags</span></div>
    <div class="woocommerce-tabs">
      <div class="woocommerce-Tabs-panel" role="tabpanel" id="tab-description">
        <p>Hemp grows without pesticides and needs little water. Our canvas is OEKO-TEX Standard 100 certified.</p>
      </div>
      <div class="woocommerce-Tabs-panel" role="tabpanel" id="tab-additional">
        <table><tr><th>Weight</th><td>320 g</td></tr></table>
      </div>
    </div>
  </div>
</body></html>"#;

const ZALANDO_PAGE: &str = r#"<html><head>
  <script type="application/ld+json">{"@context":"https://schema.org","@type":"Product",
    "name":"Parka","manufacturer":{"name":"Ecoalf"},
    "description":"Water-repellent parka made from recycled ocean plastic.",
    "material":"100% recycled polyester"}</script>
</head><body>
  <h1>Parka</h1>
  <h3 class="brand-heading">Ecoalf</h3>
  <div class="product-detail-panel">Outer material: 100% polyester (recycled)</div>
</body></html>"#;

#[test]
fn woocommerce_page() {
    let options = Options::default().with_url("https://hempandco.example/shop/market-tote/");
    let doc = dom::parse(WOOCOMMERCE_PAGE);
    assert_eq!(detect_platform(&doc, options.url.as_deref()), Platform::WooCommerce);

    let sections = extract_sections(WOOCOMMERCE_PAGE, &options);
    assert_eq!(sections.get(SectionKey::Title), Some("Market Tote"));
    assert_eq!(
        sections.get(SectionKey::Description),
        Some("A sturdy everyday tote in undyed hemp canvas.")
    );
    assert!(sections
        .get(SectionKey::HiddenPanels)
        .is_some_and(|t| t.contains("OEKO-TEX Standard 100 certified")));
    assert_eq!(sections.get(SectionKey::Meta), Some("Hemp tote bag, handmade in Lisbon."));

    assert_eq!(brand_name(WOOCOMMERCE_PAGE, &options), "Hemp & Co");
}

#[test]
fn zalando_page() {
    let options = Options::default().with_url("https://en.zalando.de/ecoalf-parka.html");
    let doc = dom::parse(ZALANDO_PAGE);
    assert_eq!(detect_platform(&doc, options.url.as_deref()), Platform::Zalando);

    let sections = extract_sections(ZALANDO_PAGE, &options);
    assert_eq!(
        sections.get(SectionKey::StructuredData),
        Some("Water-repellent parka made from recycled ocean plastic.")
    );
    assert_eq!(
        sections.get(SectionKey::StructuredMaterial),
        Some(r#""100% recycled polyester""#)
    );
    assert!(sections
        .get(SectionKey::Description)
        .is_some_and(|t| t.contains("Outer material")));

    // `h3[class*="brand"]` is the third Zalando selector.
    assert_eq!(brand_name(ZALANDO_PAGE, &options), "Ecoalf");
}

#[test]
fn hm_page_is_classified_by_host() {
    let html = "<html><body><h1>Relaxed Fit Hoodie</h1><p>Conscious choice: recycled cotton.</p></body></html>";
    let doc = dom::parse(html);
    assert_eq!(
        detect_platform(&doc, Some("https://www2.hm.com/en_gb/productpage.1.html")),
        Platform::Hm
    );
    let sections = extract_sections(html, &Options::default().with_url("https://www2.hm.com/en_gb/productpage.1.html"));
    assert_eq!(sections.get(SectionKey::Title), Some("Relaxed Fit Hoodie"));
    assert_eq!(sections.get(SectionKey::EnvMentions), Some("Conscious choice: recycled cotton."));
}
