//! Linked-data (JSON-LD) parsing.
//!
//! Product pages embed `<script type="application/ld+json">` blocks that
//! carry descriptions, materials and the brand independently of what the
//! page renders. Malformed blocks are common and are skipped one by one.
//!
//! A block may be a single object, an array of objects, or an object with an
//! `@graph` array; all three are flattened into candidate objects in order.

use dom_query::Document;
use serde_json::{Map, Value};
use tracing::trace;

use crate::dom;
use crate::patterns::JSON_LD_SELECTOR;
use crate::result::{PageSections, SectionKey};

/// Descriptions this short or shorter are ignored.
const MIN_DESCRIPTION_CHARS: usize = 10;

/// Brand names must be longer than this.
const MIN_BRAND_CHARS: usize = 1;

/// Every linked-data block that parses as JSON, in document order.
#[must_use]
pub fn linked_data_blocks(doc: &Document) -> Vec<Value> {
    dom::select_all(doc, JSON_LD_SELECTOR)
        .iter()
        .filter_map(|script| {
            let raw = dom::text_content(script);
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            match serde_json::from_str::<Value>(raw) {
                Ok(value) => Some(value),
                Err(err) => {
                    trace!(error = %err, "skipping malformed linked-data block");
                    None
                }
            }
        })
        .collect()
}

/// Objects of a block worth inspecting: the block itself, array members,
/// and `@graph` members.
fn candidate_objects(block: &Value) -> Vec<&Map<String, Value>> {
    let mut out = Vec::new();
    match block {
        Value::Object(map) => {
            out.push(map);
            if let Some(Value::Array(graph)) = map.get("@graph") {
                out.extend(graph.iter().filter_map(Value::as_object));
            }
        }
        Value::Array(items) => {
            for item in items {
                out.extend(candidate_objects(item));
            }
        }
        _ => {}
    }
    out
}

/// JavaScript-style truthiness for JSON values.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn non_empty_str<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Record `structured_data` (description) and `structured_material` from
/// linked data. Later blocks overwrite earlier ones.
pub fn extract_structured_data(doc: &Document, sections: &mut PageSections) {
    for block in linked_data_blocks(doc) {
        for object in candidate_objects(&block) {
            let description =
                non_empty_str(object, "description").or_else(|| non_empty_str(object, "productDescription"));
            if let Some(desc) = description {
                if desc.chars().count() > MIN_DESCRIPTION_CHARS {
                    sections.insert(SectionKey::StructuredData, desc);
                }
            }

            if let Some(material) = object.get("material").filter(|m| is_truthy(m)) {
                if let Ok(serialized) = serde_json::to_string(material) {
                    sections.insert(SectionKey::StructuredMaterial, serialized);
                }
            }
        }
    }
}

/// Brand name of one linked-data object: `brand.name`, then `brand` as a
/// string, then (when allowed) `manufacturer.name`.
fn object_brand(object: &Map<String, Value>, with_manufacturer: bool) -> Option<String> {
    let brand = object.get("brand");
    let from_brand_object = brand
        .and_then(Value::as_object)
        .and_then(|b| non_empty_str(b, "name"));
    let from_brand_string = brand.and_then(Value::as_str).filter(|s| !s.is_empty());
    let from_manufacturer = with_manufacturer
        .then(|| {
            object
                .get("manufacturer")
                .and_then(Value::as_object)
                .and_then(|m| non_empty_str(m, "name"))
        })
        .flatten();

    from_brand_object
        .or(from_brand_string)
        .or(from_manufacturer)
        .map(str::trim)
        .filter(|name| name.chars().count() > MIN_BRAND_CHARS)
        .map(str::to_string)
}

/// First usable brand name across all linked-data blocks.
#[must_use]
pub fn linked_data_brand(doc: &Document, with_manufacturer: bool) -> Option<String> {
    linked_data_blocks(doc)
        .iter()
        .flat_map(candidate_objects)
        .find_map(|object| object_brand(object, with_manufacturer))
}
