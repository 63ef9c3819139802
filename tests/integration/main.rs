//! Integration tests for canopi-scan
//!
//! These tests run the complete extraction and brand pipeline end-to-end
//! with realistic product-page markup from several storefront families.

mod edge_cases;
mod feature_combinations;
mod real_world_pages;
