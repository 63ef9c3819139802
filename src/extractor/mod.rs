//! Page text extraction pipeline.
//!
//! Several overlapping strategies each contribute one [`PageSections`] entry.
//! Overlap between them is expected and not deduplicated; the classifier
//! downstream tolerates repeated text.
//!
//! # Module Structure
//!
//! - `disclosure`: opens closed `<details>` elements (the only DOM mutation)
//! - `sections`: platform-profile sections (title, description, sustainability, materials)
//! - `panels`: accordion / tab / spec-block text, platform independent
//! - `scanner`: full-page walk for keyword-bearing leaf elements
//! - `fallback`: main-content or body text for sparse pages
//!
//! Meta description, image labels and linked data come from [`crate::metadata`].
//!
//! # Usage
//!
//! ```rust
//! use canopi_scan::{dom, extractor, Options, SectionKey};
//!
//! let doc = dom::parse("<html><body><h1>Wool Jumper</h1><p>Knitted from recycled wool.</p></body></html>");
//! let sections = extractor::extract_page_sections(&doc, &Options::default());
//! assert_eq!(sections.get(SectionKey::Title), Some("Wool Jumper"));
//! ```

pub mod disclosure;
pub mod fallback;
pub mod panels;
pub mod scanner;
pub mod sections;

use dom_query::Document;
use tracing::debug;

use crate::metadata::{json_ld, meta_tags};
use crate::platform;
use crate::result::{PageSections, SectionKey};
use crate::Options;

pub use disclosure::reveal_disclosures;
pub use fallback::sparse_page_text;
pub use panels::mine_hidden_panels;
pub use scanner::scan_env_mentions;
pub use sections::extract_profile_sections;

/// Upper bound on `hidden_panels`, in characters.
pub const HIDDEN_PANELS_MAX_CHARS: usize = 15_000;

/// Upper bound on `env_mentions`, in characters.
pub const ENV_MENTIONS_MAX_CHARS: usize = 10_000;

/// Upper bound on `fallback` when a main-content landmark exists.
pub const FALLBACK_LANDMARK_MAX_CHARS: usize = 10_000;

/// Upper bound on `fallback` when only the body is available.
pub const FALLBACK_BODY_MAX_CHARS: usize = 5_000;

/// Run every extraction strategy against `doc`.
///
/// Stage order is fixed: the sparse-page check must see the output of all
/// earlier stages, measured after their own truncation.
#[must_use]
pub fn extract_page_sections(doc: &Document, opts: &Options) -> PageSections {
    if opts.reveal_disclosures {
        let opened = reveal_disclosures(doc);
        debug!(opened, "revealed disclosure elements");
    }

    let platform = platform::detect_platform(doc, opts.url.as_deref());
    debug!(platform = platform.id(), "classified page");

    let mut sections = PageSections::new();

    extract_profile_sections(doc, &platform.profile(), &mut sections);

    if let Some(text) = mine_hidden_panels(doc) {
        sections.insert(SectionKey::HiddenPanels, text);
    }

    if let Some(text) = scan_env_mentions(doc) {
        sections.insert(SectionKey::EnvMentions, text);
    }

    if let Some(text) = meta_tags::meta_description(doc) {
        sections.insert(SectionKey::Meta, text);
    }

    if let Some(text) = meta_tags::image_labels(doc) {
        sections.insert(SectionKey::ImageLabels, text);
    }

    json_ld::extract_structured_data(doc, &mut sections);

    let collected = sections.joined(" ").chars().count();
    if collected < opts.sparse_threshold {
        debug!(collected, "sparse page, using fallback text");
        if let Some(text) = sparse_page_text(doc) {
            sections.insert(SectionKey::Fallback, text);
        }
    }

    debug!(
        keys = sections.len(),
        chars = sections.full_text().chars().count(),
        "extraction finished"
    );
    sections
}

/// Longest prefix of `text` holding at most `max_chars` characters.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Trimmed text of every element matching `selector` whose length exceeds
/// `min_exclusive` characters, in document order.
pub(crate) fn collect_fragments(doc: &Document, selector: &str, min_exclusive: usize) -> Vec<String> {
    crate::dom::select_all(doc, selector)
        .iter()
        .map(crate::dom::trimmed_text)
        .filter(|text| text.chars().count() > min_exclusive)
        .collect()
}
