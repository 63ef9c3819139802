//! Configuration options for page scanning.
//!
//! The `Options` struct carries the page URL, the classification service
//! endpoint and the size limits applied by the orchestrator. Defaults match
//! the production service; `Options::from_env` lets deployments override the
//! endpoint and timeouts without recompiling.

use url::Url;

use crate::{Error, Result};

/// Default classification service endpoint.
pub const DEFAULT_SERVICE_URL: &str = "https://greencheck-production.up.railway.app";

/// Default human-readable service name used in failure messages.
pub const DEFAULT_SERVICE_NAME: &str = "canopi API";

/// Configuration options for extraction and scanning.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use canopi_scan::Options;
///
/// let options = Options {
///     url: Some("https://www.asos.com/nike/some-product".to_string()),
///     ..Options::default()
/// };
/// assert_eq!(options.max_request_chars, 50_000);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// URL of the page being scanned.
    ///
    /// Drives platform classification, marketplace detection and the
    /// domain-name brand fallback. Pages without a URL classify as generic
    /// and resolve their brand from markup only.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Base URL of the classification service. Requests go to `{service_url}/api/scan`.
    ///
    /// Default: [`DEFAULT_SERVICE_URL`]
    pub service_url: String,

    /// Name used in "Could not connect to ..." failure messages.
    ///
    /// Default: [`DEFAULT_SERVICE_NAME`]
    pub service_name: String,

    /// Total request timeout for the classification call, in seconds.
    ///
    /// Default: `30`
    pub request_timeout_secs: u64,

    /// Connection timeout for the classification call, in seconds.
    ///
    /// Default: `10`
    pub connect_timeout_secs: u64,

    /// Maximum number of characters of joined text sent to the service.
    ///
    /// Default: `50000`
    pub max_request_chars: usize,

    /// Joined text shorter than this aborts the scan without a network call.
    ///
    /// Default: `20`
    pub min_scan_chars: usize,

    /// Collected text shorter than this activates the sparse-page fallback.
    ///
    /// Default: `100`
    pub sparse_threshold: usize,

    /// Open closed `<details>` elements before reading text.
    ///
    /// Default: `true`
    pub reveal_disclosures: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            service_url: DEFAULT_SERVICE_URL.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            max_request_chars: 50_000,
            min_scan_chars: 20,
            sparse_threshold: 100,
            reveal_disclosures: true,
        }
    }
}

impl Options {
    /// Defaults overlaid with environment overrides.
    ///
    /// - `CANOPI_API_URL` → `service_url`
    /// - `CANOPI_TIMEOUT_SECS` → `request_timeout_secs`
    /// - `CANOPI_CONNECT_TIMEOUT_SECS` → `connect_timeout_secs`
    ///
    /// Blank or unparsable values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            service_url: env_string("CANOPI_API_URL").unwrap_or(defaults.service_url),
            request_timeout_secs: env_parse("CANOPI_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
            connect_timeout_secs: env_parse("CANOPI_CONNECT_TIMEOUT_SECS")
                .unwrap_or(defaults.connect_timeout_secs),
            ..defaults
        }
    }

    /// Builder: set the page URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Check that the options describe a usable configuration.
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.service_url)
            .map_err(|e| Error::InvalidConfig(format!("service_url {:?}: {e}", self.service_url)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::InvalidConfig(format!(
                "service_url must be http(s), got {}",
                parsed.scheme()
            )));
        }
        if self.max_request_chars == 0 {
            return Err(Error::InvalidConfig("max_request_chars must be positive".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::InvalidConfig("request_timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    /// Full endpoint of the scan operation.
    #[must_use]
    pub fn scan_endpoint(&self) -> String {
        format!("{}/api/scan", self.service_url.trim_end_matches('/'))
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env_string(key).and_then(|v| v.parse().ok())
}
