//! Option combination tests

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use canopi_scan::{extract_sections, Options, SectionKey};

const PAGE: &str = r#"<html><head>
    <meta name="description" content="Merino crew neck">
    </head><body>
    <main><h1>Crew Neck</h1><p>Soft and warm.</p></main>
    <details><summary>Materials</summary><p>ZQ certified merino wool</p></details>
    </body></html>"#;

#[test]
fn sparse_threshold_zero_disables_fallback() {
    let opts = Options {
        sparse_threshold: 0,
        ..Options::default()
    };
    let sections = extract_sections(PAGE, &opts);
    assert!(!sections.contains(SectionKey::Fallback));
}

#[test]
fn high_sparse_threshold_forces_fallback_from_main() {
    let opts = Options {
        sparse_threshold: 10_000,
        ..Options::default()
    };
    let sections = extract_sections(PAGE, &opts);
    let fallback = sections.get(SectionKey::Fallback).expect("fallback");
    assert!(fallback.contains("Crew Neck"));
    assert!(!fallback.contains("ZQ certified"), "main landmark preferred over body");
}

#[test]
fn reveal_toggle_does_not_change_text_reads() {
    let revealed = extract_sections(PAGE, &Options::default());
    let untouched = extract_sections(
        PAGE,
        &Options {
            reveal_disclosures: false,
            ..Options::default()
        },
    );
    // Text content includes collapsed subtrees either way.
    assert_eq!(revealed, untouched);
}

#[test]
fn url_switches_platform_profile() {
    let html = r#"<html><body>
        <h1 class="product-single__title">Everyday Tee</h1>
        <div class="rte">Garment dyed in small batches with low-impact dyes.</div>
    </body></html>"#;

    let generic = extract_sections(html, &Options::default());
    assert_eq!(generic.get(SectionKey::Title), Some("Everyday Tee"));
    assert!(!generic.contains(SectionKey::Description));

    let shopify = extract_sections(
        html,
        &Options::default().with_url("https://everyday.example/products/everyday-tee"),
    );
    assert_eq!(
        shopify.get(SectionKey::Description),
        Some("Garment dyed in small batches with low-impact dyes.")
    );
}
