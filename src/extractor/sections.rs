//! Platform-profile section extraction.

use dom_query::Document;
use tracing::trace;

use super::collect_fragments;
use crate::platform::PlatformProfile;
use crate::result::PageSections;

/// Fragments this short or shorter are dropped (stray labels, bullets, icons).
const MIN_FRAGMENT_CHARS: usize = 3;

/// Fill the profile's semantic sections.
///
/// Each key gets the trimmed text of every matching element, joined with a
/// single space. Keys with no surviving fragment are left out.
pub fn extract_profile_sections(doc: &Document, profile: &PlatformProfile, sections: &mut PageSections) {
    for (key, selector) in profile.selectors {
        let fragments = collect_fragments(doc, selector, MIN_FRAGMENT_CHARS);
        trace!(section = key.as_str(), fragments = fragments.len(), "profile section");
        if !fragments.is_empty() {
            sections.insert(*key, fragments.join(" "));
        }
    }
}
