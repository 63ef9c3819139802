//! Scan orchestration.
//!
//! A scan is two phases. [`Scanner::prepare`] is synchronous: it parses the
//! page, runs extraction and brand resolution, and either builds the outbound
//! request or decides the page is too short to judge. Only then does
//! [`Scanner::scan`] await the classification service. The parsed document
//! never lives across that await.

use std::result::Result as StdResult;

use tracing::{info, warn};

use crate::brand;
use crate::client::ClassificationService;
use crate::dom;
use crate::extractor::{extract_page_sections, truncate_chars};
use crate::result::{DisplayScore, ExtractionRequest, ExtractionResult, PageSections, ScanFailure};
use crate::Options;

/// Failure reason for pages with too little text.
pub const NOT_ENOUGH_TEXT: &str = "Not enough text found on this page to scan.";

/// Runs extraction and forwards the result to a classification service.
#[derive(Debug, Clone)]
pub struct Scanner<S> {
    service: S,
    opts: Options,
}

impl<S: ClassificationService> Scanner<S> {
    #[must_use]
    pub fn new(service: S, opts: Options) -> Self {
        Self { service, opts }
    }

    fn page_url<'a>(&'a self, url: Option<&'a str>) -> Option<&'a str> {
        url.or(self.opts.url.as_deref())
    }

    /// Extraction only. `url` overrides [`Options::url`].
    #[must_use]
    pub fn extract_text(&self, html: &str, url: Option<&str>) -> PageSections {
        let url = self.page_url(url);
        let doc = dom::parse(html);
        let opts = Options {
            url: url.map(str::to_string),
            ..self.opts.clone()
        };
        extract_page_sections(&doc, &opts)
    }

    /// Build the outbound request, or the failure to report without calling out.
    pub fn prepare(&self, html: &str, url: Option<&str>) -> StdResult<ExtractionRequest, ScanFailure> {
        let url = self.page_url(url);
        let doc = dom::parse(html);
        let opts = Options {
            url: url.map(str::to_string),
            ..self.opts.clone()
        };

        let sections = extract_page_sections(&doc, &opts);
        let full_text = sections.full_text();
        let brand_name = brand::resolve_brand(&doc, url);

        if full_text.trim().chars().count() < self.opts.min_scan_chars {
            info!(brand = %brand_name, "not enough text to scan");
            return Err(ScanFailure::new(NOT_ENOUGH_TEXT, DisplayScore::Unknown));
        }

        Ok(ExtractionRequest {
            text: truncate_chars(&full_text, self.opts.max_request_chars).to_string(),
            url: url.unwrap_or_default().to_string(),
            brand_name,
        })
    }

    /// Full scan. Always produces a result; every failure is typed.
    pub async fn scan(&self, html: &str, url: Option<&str>) -> ExtractionResult {
        match self.prepare(html, url) {
            Ok(request) => self.classify(&request).await,
            Err(failure) => ExtractionResult::Failure(failure),
        }
    }

    /// Send a prepared request and fold any error into a failure.
    pub async fn classify(&self, request: &ExtractionRequest) -> ExtractionResult {
        info!(brand = %request.brand_name, chars = request.text.chars().count(), "scanning page");
        match self.service.classify(request).await {
            Ok(classification) => {
                if let Some(message) = classification.service_error() {
                    warn!(service = self.service.name(), %message, "service reported an error");
                    return ExtractionResult::failure(message, DisplayScore::Error);
                }
                info!(trust_score = ?classification.trust_score, claims = classification.claims.len(), "scan finished");
                ExtractionResult::Success(Box::new(classification))
            }
            Err(err) => {
                warn!(service = self.service.name(), error = %err, "classification failed");
                ExtractionResult::failure(
                    format!("Could not connect to {}: {err}", self.service.name()),
                    DisplayScore::Error,
                )
            }
        }
    }
}
