//! Classification service seam.
//!
//! The orchestrator only knows [`ClassificationService`]; production uses
//! [`HttpClassifier`], tests substitute a stub that records calls.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::result::{Classification, ExtractionRequest};
use crate::{Error, Options, Result};

/// Something that classifies extracted page text.
#[async_trait]
pub trait ClassificationService: Send + Sync {
    /// Human-readable name used in failure messages.
    fn name(&self) -> &str;

    /// Classify one page.
    async fn classify(&self, request: &ExtractionRequest) -> Result<Classification>;
}

/// JSON-over-HTTP client for the hosted classification API.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: Client,
    endpoint: String,
    name: String,
}

impl HttpClassifier {
    /// Build a client from the service settings in `opts`.
    pub fn new(opts: &Options) -> Result<Self> {
        opts.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(opts.request_timeout_secs))
            .connect_timeout(Duration::from_secs(opts.connect_timeout_secs))
            .user_agent(concat!("canopi-scan/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::InvalidConfig(format!("http client: {e}")))?;

        Ok(Self {
            client,
            endpoint: opts.scan_endpoint(),
            name: opts.service_name.clone(),
        })
    }

    /// Endpoint requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ClassificationService for HttpClassifier {
    fn name(&self) -> &str {
        &self.name
    }

    async fn classify(&self, request: &ExtractionRequest) -> Result<Classification> {
        debug!(endpoint = %self.endpoint, chars = request.text.len(), "posting scan request");
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        Ok(response.json::<Classification>().await?)
    }
}
