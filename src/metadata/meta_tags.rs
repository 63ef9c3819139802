//! HTML meta tags, image labels and schema.org brand microdata.

use dom_query::Document;

use crate::dom;
use crate::keywords::is_environmental;
use crate::patterns::{IMAGE_ALT_SELECTOR, META_DESCRIPTION_SELECTOR, OG_SITE_NAME_SELECTOR};

fn meta_content(doc: &Document, selector: &str) -> Option<String> {
    dom::select_first(doc, selector)
        .and_then(|meta| dom::get_attribute(&meta, "content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

/// `<meta name="description">` content.
#[must_use]
pub fn meta_description(doc: &Document) -> Option<String> {
    meta_content(doc, META_DESCRIPTION_SELECTOR)
}

/// `<meta property="og:site_name">` content. On brand-owned stores this is
/// usually the brand itself.
#[must_use]
pub fn site_name(doc: &Document) -> Option<String> {
    meta_content(doc, OG_SITE_NAME_SELECTOR)
}

/// Alt texts of images that mention environmental vocabulary, joined with a space.
///
/// Certification badges and eco labels are often images with no other text.
#[must_use]
pub fn image_labels(doc: &Document) -> Option<String> {
    let labels: Vec<String> = dom::select_all(doc, IMAGE_ALT_SELECTOR)
        .iter()
        .filter_map(|img| dom::get_attribute(img, "alt"))
        .filter(|alt| is_environmental(alt))
        .collect();

    (!labels.is_empty()).then(|| labels.join(" "))
}

/// Brand from schema.org microdata: the first element matching `selector`,
/// read from its `content` attribute when it has one, else from its text.
#[must_use]
pub fn schema_brand(doc: &Document, selector: &str) -> Option<String> {
    let element = dom::select_first(doc, selector)?;
    let value = dom::get_attribute(&element, "content")
        .filter(|content| !content.trim().is_empty())
        .unwrap_or_else(|| dom::text_content(&element).to_string());
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
