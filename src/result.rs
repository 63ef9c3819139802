//! Result types for scanning output.
//!
//! [`PageSections`] is what extraction produces, [`ExtractionRequest`] is what
//! goes to the classification service, and [`ExtractionResult`] is what a
//! scan hands back to its caller. The [`Classification`] family mirrors the
//! service response; unknown fields are retained so the body can be relayed
//! unchanged.

use serde::de::DeserializeOwned;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::metadata::json_ld::is_truthy;

// =============================================================================
// Page Sections
// =============================================================================

/// Key of one extraction strategy's contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Title,
    Description,
    Sustainability,
    Materials,
    HiddenPanels,
    EnvMentions,
    Meta,
    ImageLabels,
    StructuredData,
    StructuredMaterial,
    Fallback,
}

impl SectionKey {
    /// Every key, in pipeline order.
    pub const ALL: [SectionKey; 11] = [
        SectionKey::Title,
        SectionKey::Description,
        SectionKey::Sustainability,
        SectionKey::Materials,
        SectionKey::HiddenPanels,
        SectionKey::EnvMentions,
        SectionKey::Meta,
        SectionKey::ImageLabels,
        SectionKey::StructuredData,
        SectionKey::StructuredMaterial,
        SectionKey::Fallback,
    ];

    /// Wire name of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionKey::Title => "title",
            SectionKey::Description => "description",
            SectionKey::Sustainability => "sustainability",
            SectionKey::Materials => "materials",
            SectionKey::HiddenPanels => "hidden_panels",
            SectionKey::EnvMentions => "env_mentions",
            SectionKey::Meta => "meta",
            SectionKey::ImageLabels => "image_labels",
            SectionKey::StructuredData => "structured_data",
            SectionKey::StructuredMaterial => "structured_material",
            SectionKey::Fallback => "fallback",
        }
    }

    /// Parse a wire name.
    #[must_use]
    pub fn parse_str(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracted text keyed by strategy, in insertion order.
///
/// Values are trimmed and never empty: [`PageSections::insert`] drops blank
/// text instead of storing it. Re-inserting a key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSections {
    entries: Vec<(SectionKey, String)>,
}

impl PageSections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` under `key`. Returns false if the text was blank.
    pub fn insert(&mut self, key: SectionKey, text: impl Into<String>) -> bool {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        let value = if trimmed.len() == text.len() {
            text
        } else {
            trimmed.to_string()
        };
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        true
    }

    #[must_use]
    pub fn get(&self, key: SectionKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, key: SectionKey) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = SectionKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All values joined with `separator`, in insertion order.
    #[must_use]
    pub fn joined(&self, separator: &str) -> String {
        self.entries
            .iter()
            .map(|(_, v)| v.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// The payload text sent for classification.
    #[must_use]
    pub fn full_text(&self) -> String {
        self.joined("\n\n")
    }
}

impl Serialize for PageSections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

// =============================================================================
// Request / Result
// =============================================================================

/// Body of the outbound classification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub text: String,
    pub url: String,
    pub brand_name: String,
}

/// Score shown when a scan could not produce a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayScore {
    /// The page did not have enough text to judge.
    Unknown,
    /// The service could not be reached or refused the request.
    Error,
}

impl DisplayScore {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DisplayScore::Unknown => "unknown",
            DisplayScore::Error => "error",
        }
    }
}

/// A scan that ended without a classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailure {
    pub reason: String,
    pub display_score: DisplayScore,
}

impl ScanFailure {
    #[must_use]
    pub fn new(reason: impl Into<String>, display_score: DisplayScore) -> Self {
        Self {
            reason: reason.into(),
            display_score,
        }
    }
}

impl Serialize for ScanFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ScanFailure", 3)?;
        state.serialize_field("error", &true)?;
        state.serialize_field("message", &self.reason)?;
        state.serialize_field("score", &self.display_score)?;
        state.end()
    }
}

/// Outcome of one scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractionResult {
    Success(Box<Classification>),
    Failure(ScanFailure),
}

impl ExtractionResult {
    #[must_use]
    pub fn failure(reason: impl Into<String>, display_score: DisplayScore) -> Self {
        Self::Failure(ScanFailure::new(reason, display_score))
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn classification(&self) -> Option<&Classification> {
        match self {
            Self::Success(c) => Some(c),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    pub fn failure_info(&self) -> Option<&ScanFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(f) => Some(f),
        }
    }
}

// =============================================================================
// Classification Payload
// =============================================================================

/// Read a documented field, treating `null` or a value of the wrong shape as
/// absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Classification service response.
///
/// Every documented field is optional on the wire and may be `null`; anything
/// else the service sends is kept in `extra` and written back out on
/// serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classification {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub trust_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub score_label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub claims: Vec<Claim>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub banned_claims: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub restricted_claims: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub certifications_found: Vec<Certification>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub brand_context: Option<BrandContext>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub site_crawl: Option<SiteCrawl>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Classification {
    /// The service's own error report, if the body carries a truthy `error`.
    ///
    /// Returns the body's `message`, or a generic one when it has none.
    #[must_use]
    pub fn service_error(&self) -> Option<String> {
        if !self.extra.get("error").is_some_and(is_truthy) {
            return None;
        }
        let message = match self.extra.get("message") {
            Some(Value::String(m)) if !m.is_empty() => m.clone(),
            _ => SERVICE_ERROR_FALLBACK.to_string(),
        };
        Some(message)
    }
}

/// Message used when the service reports an error without saying what.
pub const SERVICE_ERROR_FALLBACK: &str = "Scan failed.";

/// Severity of a flagged claim.
///
/// Only `banned` is singled out; any other label is kept verbatim and treated
/// like `restricted`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Severity {
    Banned,
    #[default]
    Restricted,
    Other(String),
}

impl Severity {
    /// Wire label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Banned => "banned",
            Severity::Restricted => "restricted",
            Severity::Other(label) => label,
        }
    }

    #[must_use]
    pub fn is_banned(&self) -> bool {
        matches!(self, Severity::Banned)
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(match label.as_str() {
            "banned" => Severity::Banned,
            "restricted" => Severity::Restricted,
            _ => Severity::Other(label),
        })
    }
}

/// One flagged environmental claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Claim {
    #[serde(deserialize_with = "lenient")]
    pub severity: Severity,
    #[serde(deserialize_with = "lenient")]
    pub description: String,
    #[serde(deserialize_with = "lenient")]
    pub matched_text: String,
    #[serde(deserialize_with = "lenient")]
    pub sentence: String,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub consumer_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub remediation: Option<Remediation>,
    #[serde(deserialize_with = "lenient")]
    pub jurisdictions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub ecgt_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub ftc_reference: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Guidance attached to a claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Remediation {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub guidance: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub compliant_alternatives: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A certification mentioned on the page or known for the brand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(deserialize_with = "lenient")]
    pub certification_name: String,
    #[serde(deserialize_with = "lenient")]
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub license_number: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Brand-level disclosure profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandContext {
    #[serde(deserialize_with = "lenient")]
    pub known_brand: bool,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub brand_summary: Option<String>,
    /// Tier identifier; the service has sent both strings and numbers.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub transparency_tier: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub transparency_tier_label: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub known_issues: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub b_corp: bool,
    #[serde(deserialize_with = "lenient")]
    pub fair_wear: bool,
    #[serde(deserialize_with = "lenient")]
    pub sbti: bool,
    #[serde(deserialize_with = "lenient")]
    pub sbti_validated: bool,
    #[serde(deserialize_with = "lenient")]
    pub publishes_supplier_list: bool,
    #[serde(deserialize_with = "lenient")]
    pub publishes_impact_report: bool,
    #[serde(deserialize_with = "lenient")]
    pub third_party_certs: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl BrandContext {
    /// Tier as display text, whatever JSON type it arrived as.
    #[must_use]
    pub fn tier_text(&self) -> Option<String> {
        match self.transparency_tier.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// How much of the brand's own site the service looked at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteCrawl {
    #[serde(deserialize_with = "lenient")]
    pub pages_scanned: u32,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
