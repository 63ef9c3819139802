//! Performance benchmarks for canopi-scan.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A synthetic Shopify-style product page (~4KB) for the full extraction pass
//! - Brand resolution on a marketplace page
//! - A page padded with repeated keyword fragments to exercise the scanner bounds

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use canopi_scan::{brand_name, extract_sections, Options};

const PRODUCT_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="shopify-checkout-api-token" content="abc123">
    <meta name="description" content="The Juniper shirt, made with organic cotton.">
    <meta property="og:site_name" content="Tentree">
    <script type="application/ld+json">
    {"@context": "https://schema.org", "@type": "Product", "name": "Juniper Shirt",
     "brand": {"@type": "Brand", "name": "Tentree"},
     "description": "A relaxed button-up made from TENCEL lyocell and organic cotton.",
     "material": ["TENCEL Lyocell", "Organic Cotton"]}
    </script>
</head>
<body>
    <nav><a href="/">Home</a><a href="/collections/men">Men</a></nav>
    <main>
        <h1 class="product__title">Juniper Shirt</h1>
        <div class="product__description rte">
            <p>A relaxed button-up for every season. For every item purchased, ten trees are planted.</p>
            <p>Climate neutral shipping on all orders.</p>
        </div>
        <details>
            <summary>Materials</summary>
            <p>55% TENCEL lyocell, 45% GOTS certified organic cotton.</p>
        </details>
        <details>
            <summary>Care</summary>
            <p>Machine wash cold, hang to dry.</p>
        </details>
        <div class="accordion__content">
            <p>Our factories are Fair Trade certified and audited annually.</p>
        </div>
        <img src="/badges/b-corp.png" alt="Certified B Corp badge">
        <img src="/product.jpg" alt="Model wearing the Juniper shirt">
    </main>
    <footer><p>Copyright 2026</p></footer>
</body>
</html>
"#;

const MARKETPLACE_HTML: &str = r#"
<html><body>
    <div class="product-hero">
        <h2><a href="/nike/cat">Nike</a></h2>
        <h1>Sportswear Club Fleece hoodie</h1>
    </div>
    <div data-testid="product-brand">by Nike</div>
    <div class="product-description"><p>Contains recycled polyester.</p></div>
</body></html>
"#;

fn bench_extract_product(c: &mut Criterion) {
    let options = Options::default().with_url("https://www.tentree.com/products/juniper-shirt");

    c.bench_function("extract_product", |b| {
        b.iter(|| extract_sections(black_box(PRODUCT_HTML), black_box(&options)));
    });
}

fn bench_brand_marketplace(c: &mut Criterion) {
    let options = Options::default().with_url("https://www.asos.com/nike/prd/12345");

    c.bench_function("brand_marketplace", |b| {
        b.iter(|| brand_name(black_box(MARKETPLACE_HTML), black_box(&options)));
    });
}

/// Pages with many keyword-bearing fragments, to keep the scanner's cost in view.
fn bench_keyword_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyword_heavy");

    for count in [100usize, 1_000, 5_000] {
        let fragments: String = (0..count)
            .map(|i| format!("<li>Item {i}: recycled polyester, organic cotton lining</li>"))
            .collect();
        let html = format!("<html><body><ul>{fragments}</ul></body></html>");

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract", count), &html, |b, html| {
            b.iter(|| extract_sections(black_box(html), &Options::default()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_product,
    bench_brand_marketplace,
    bench_keyword_heavy
);
criterion_main!(benches);
