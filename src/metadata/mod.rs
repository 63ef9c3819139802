//! Page metadata and structured data.
//!
//! Two kinds of consumer read from here: the extraction pipeline (meta
//! description, image labels, product description and material from linked
//! data) and the brand resolver (linked-data brand, schema.org brand
//! microdata, Open Graph site name).

pub mod json_ld;
pub mod meta_tags;

pub use json_ld::{extract_structured_data, linked_data_blocks, linked_data_brand};
pub use meta_tags::{image_labels, meta_description, schema_brand, site_name};
