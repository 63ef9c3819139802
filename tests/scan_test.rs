//! Orchestrator and channel behaviour against stub and unreachable services.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use canopi_scan::{
    spawn_agent, ClassificationService, Classification, DisplayScore, Error, ExtractionRequest, ExtractionResult,
    HttpClassifier, Options, Page, Result, Scanner, SectionKey,
};

#[derive(Default)]
struct Recorder {
    calls: AtomicUsize,
    status: Option<u16>,
}

#[derive(Clone, Default)]
struct StubService(Arc<Recorder>);

impl StubService {
    fn failing(status: u16) -> Self {
        Self(Arc::new(Recorder {
            calls: AtomicUsize::new(0),
            status: Some(status),
        }))
    }

    fn calls(&self) -> usize {
        self.0.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClassificationService for StubService {
    fn name(&self) -> &str {
        "canopi API"
    }

    async fn classify(&self, request: &ExtractionRequest) -> Result<Classification> {
        self.0.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.0.status {
            return Err(Error::Status(status));
        }
        let body = serde_json::json!({
            "trust_score": 41,
            "summary": "One banned generic claim.",
            "claims": [{"severity": "banned", "description": "Generic claim", "matched_text": "eco-friendly",
                        "sentence": request.text.chars().take(40).collect::<String>()}],
            "brand_name": request.brand_name,
            "model_version": "2026-09"
        });
        Ok(serde_json::from_value(body).expect("valid payload"))
    }
}

const PAGE: &str = r#"<html><head>
    <script type="application/ld+json">{"@type": "Product", "brand": {"name": "Acme"},
      "description": "An eco-friendly rain shell made from recycled nylon."}</script>
    </head><body>
    <h1>Storm Shell</h1>
    <details><summary>Materials</summary><p>GRS certified recycled polyester</p></details>
    </body></html>"#;

#[tokio::test]
async fn short_text_short_circuits_without_network() {
    let stub = StubService::default();
    let scanner = Scanner::new(stub.clone(), Options::default());

    let result = scanner.scan("<html><body><p>Buy now</p></body></html>", None).await;

    let failure = result.failure_info().expect("failure");
    assert_eq!(failure.display_score, DisplayScore::Unknown);
    assert_eq!(stub.calls(), 0);
    let json = serde_json::to_value(&result).expect("serialize");
    assert_eq!(json["error"], true);
    assert_eq!(json["score"], "unknown");
}

#[tokio::test]
async fn success_relays_payload_unchanged() {
    let stub = StubService::default();
    let scanner = Scanner::new(stub.clone(), Options::default());

    let result = scanner.scan(PAGE, Some("https://www.acmeclothing.com/p/storm")).await;

    assert_eq!(stub.calls(), 1);
    let classification = result.classification().expect("success");
    assert_eq!(classification.brand_name.as_deref(), Some("Acme"));
    let json = serde_json::to_value(&result).expect("serialize");
    assert_eq!(json["model_version"], "2026-09");
    assert_eq!(json["claims"][0]["severity"], "banned");
}

#[tokio::test]
async fn non_success_status_is_error_failure() {
    let stub = StubService::failing(500);
    let scanner = Scanner::new(stub.clone(), Options::default());

    let result = scanner.scan(PAGE, None).await;

    assert_eq!(stub.calls(), 1);
    match result {
        ExtractionResult::Failure(failure) => {
            assert_eq!(failure.display_score, DisplayScore::Error);
            assert_eq!(failure.reason, "Could not connect to canopi API: API returned 500");
        }
        ExtractionResult::Success(_) => panic!("expected failure"),
    }
}

/// Answers every request with a 200-style body reporting its own error.
struct RefusingService;

#[async_trait]
impl ClassificationService for RefusingService {
    fn name(&self) -> &str {
        "canopi API"
    }

    async fn classify(&self, _request: &ExtractionRequest) -> Result<Classification> {
        let body = serde_json::json!({"error": true, "message": "Daily scan limit reached"});
        Ok(serde_json::from_value(body).expect("valid payload"))
    }
}

#[tokio::test]
async fn error_shaped_body_becomes_failure() {
    let scanner = Scanner::new(RefusingService, Options::default());

    let result = scanner.scan(PAGE, None).await;

    let failure = result.failure_info().expect("failure");
    assert_eq!(failure.reason, "Daily scan limit reached");
    assert_eq!(failure.display_score, DisplayScore::Error);
}

#[tokio::test]
async fn unreachable_service_reports_connection_failure() {
    let opts = Options {
        service_url: "http://127.0.0.1:1".to_string(),
        connect_timeout_secs: 2,
        request_timeout_secs: 5,
        ..Options::default()
    };
    let service = HttpClassifier::new(&opts).expect("valid options");
    let scanner = Scanner::new(service, opts);

    let result = scanner.scan(PAGE, None).await;

    let failure = result.failure_info().expect("failure");
    assert_eq!(failure.display_score, DisplayScore::Error);
    assert!(failure.reason.starts_with("Could not connect to canopi API: "));
}

#[tokio::test]
async fn agent_serves_both_request_kinds() {
    let stub = StubService::default();
    let scanner = Scanner::new(stub.clone(), Options::default());
    let agent = spawn_agent(Page::new(PAGE, Some("https://www.acmeclothing.com/p/storm".to_string())), scanner);

    let sections = agent.extract_text().await;
    assert!(sections.contains(SectionKey::HiddenPanels));
    assert_eq!(stub.calls(), 0);

    let result = agent.scan().await;
    assert!(result.is_success());
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn empty_page_answers_with_unknown() {
    let stub = StubService::default();
    let scanner = Scanner::new(stub, Options::default());
    let agent = spawn_agent(Page::default(), scanner);

    let result = agent.scan().await;
    assert_eq!(result.failure_info().map(|f| f.display_score), Some(DisplayScore::Unknown));
    assert!(agent.is_running());
}
