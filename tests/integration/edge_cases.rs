//! Edge case integration tests
//!
//! Tests for unusual inputs, boundary conditions and hostile markup.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use canopi_scan::{brand_name, extract_sections, Options, SectionKey};

#[test]
fn test_extract_minimal_html() {
    let html = "<html><body><p>Minimal content.</p></body></html>";
    let sections = extract_sections(html, &Options::default());
    assert_eq!(sections.get(SectionKey::Fallback), Some("Minimal content."));
}

#[test]
fn test_extract_empty_input() {
    let sections = extract_sections("", &Options::default());
    assert!(sections.is_empty());
    assert_eq!(brand_name("", &Options::default()), "Unknown brand");
}

#[test]
fn test_extract_no_body() {
    let html = r#"<html><head><title>No Body</title><meta name="description" content="Organic socks"></head></html>"#;
    let sections = extract_sections(html, &Options::default());
    assert_eq!(sections.get(SectionKey::Meta), Some("Organic socks"));
}

#[test]
fn test_extract_malformed_html() {
    let html = "<html><body><p>Unclosed recycled paragraph<div>Nested<p>Badly</body>";
    let sections = extract_sections(html, &Options::default());
    assert!(sections.full_text().contains("Unclosed recycled paragraph"));
}

#[test]
fn test_extract_deeply_nested_html() {
    let mut html = String::from("<html><body>");
    for i in 0..50 {
        html.push_str(&format!("<div class='level-{i}'>"));
    }
    html.push_str("<p>Deep recycled content here</p>");
    for _ in 0..50 {
        html.push_str("</div>");
    }
    html.push_str("</body></html>");

    let sections = extract_sections(&html, &Options::default());
    // Every wrapper has the same text; the scanner keeps one copy.
    assert_eq!(sections.get(SectionKey::EnvMentions), Some("Deep recycled content here"));
}

#[test]
fn test_extract_very_large_document() {
    let paragraphs: String = (0..5000)
        .map(|i| format!("<p>Paragraph {i} mentions organic cotton.</p>"))
        .collect::<Vec<_>>()
        .join("\n");
    let html = format!("<html><body><article>{paragraphs}</article></body></html>");

    let sections = extract_sections(&html, &Options::default());

    let env = sections.get(SectionKey::EnvMentions).expect("mentions");
    assert!(env.chars().count() <= 10_000);
    assert!(env.starts_with("Paragraph 0 mentions organic cotton."));
}

#[test]
fn test_extract_broken_json_ld_only() {
    let html = r#"<html><head>
        <script type="application/ld+json">{ not json at all</script>
        <script type="application/ld+json"></script>
        </head><body><p>Simple page</p></body></html>"#;
    let sections = extract_sections(html, &Options::default());
    assert!(!sections.contains(SectionKey::StructuredData));
    assert!(sections.contains(SectionKey::Fallback));
}

#[test]
fn test_unicode_counts_are_characters() {
    // 60 three-byte characters: above the byte threshold, below the character one.
    let text = "環".repeat(60);
    let html = format!("<html><body><p>{text}</p></body></html>");
    let sections = extract_sections(&html, &Options::default());
    assert_eq!(sections.get(SectionKey::Fallback), Some(text.as_str()));
}

#[test]
fn test_script_and_style_text_in_fallback() {
    let html = "<html><body><script>var eco = 1;</script><p>Short</p></body></html>";
    let sections = extract_sections(html, &Options::default());
    // Fallback is raw text content; it does not render the page.
    assert!(sections.get(SectionKey::Fallback).is_some_and(|t| t.contains("Short")));
}
