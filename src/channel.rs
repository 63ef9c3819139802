//! Request/response channel between a caller and the page agent.
//!
//! The agent is a task that owns the current page and a [`Scanner`]. Callers
//! talk to it through a cloneable [`AgentHandle`]; every request carries its
//! own oneshot responder, so each request gets exactly one response, and a
//! scan's response is only sent once the network leg has resolved.
//!
//! Requests are served one at a time in arrival order.

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::client::ClassificationService;
use crate::result::{DisplayScore, ExtractionResult, PageSections};
use crate::scan::Scanner;

/// Queue depth of pending requests per agent.
const REQUEST_BUFFER: usize = 16;

/// Failure reason when the agent has gone away.
pub const AGENT_STOPPED: &str = "Page agent is no longer running";

/// The page an agent works on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub html: String,
    pub url: Option<String>,
}

impl Page {
    #[must_use]
    pub fn new(html: impl Into<String>, url: Option<String>) -> Self {
        Self {
            html: html.into(),
            url,
        }
    }
}

#[derive(Debug)]
enum Request {
    Scan(oneshot::Sender<ExtractionResult>),
    ExtractText(oneshot::Sender<PageSections>),
    Replace(Page),
}

/// Caller side of an agent.
#[derive(Debug, Clone)]
pub struct AgentHandle {
    tx: mpsc::Sender<Request>,
}

impl AgentHandle {
    /// Run the full pipeline on the agent's current page.
    pub async fn scan(&self) -> ExtractionResult {
        let (reply, response) = oneshot::channel();
        if self.tx.send(Request::Scan(reply)).await.is_err() {
            return ExtractionResult::failure(AGENT_STOPPED, DisplayScore::Error);
        }
        response
            .await
            .unwrap_or_else(|_| ExtractionResult::failure(AGENT_STOPPED, DisplayScore::Error))
    }

    /// Run extraction only and return the raw sections.
    pub async fn extract_text(&self) -> PageSections {
        let (reply, response) = oneshot::channel();
        if self.tx.send(Request::ExtractText(reply)).await.is_err() {
            return PageSections::new();
        }
        response.await.unwrap_or_default()
    }

    /// Point the agent at new page content. Later requests see the new page.
    ///
    /// Returns `false` if the agent has stopped.
    pub async fn replace_page(&self, page: Page) -> bool {
        self.tx.send(Request::Replace(page)).await.is_ok()
    }

    /// Whether the agent task is still accepting requests.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.tx.is_closed()
    }
}

/// Start an agent task for `page`. The task ends when every handle is dropped.
///
/// Must be called from within a tokio runtime.
pub fn spawn_agent<S>(page: Page, scanner: Scanner<S>) -> AgentHandle
where
    S: ClassificationService + 'static,
{
    let (tx, mut rx) = mpsc::channel(REQUEST_BUFFER);

    tokio::spawn(async move {
        let mut page = page;
        while let Some(request) = rx.recv().await {
            match request {
                Request::Scan(reply) => {
                    let result = scanner.scan(&page.html, page.url.as_deref()).await;
                    if reply.send(result).is_err() {
                        debug!("scan requester went away before the response");
                    }
                }
                Request::ExtractText(reply) => {
                    let sections = scanner.extract_text(&page.html, page.url.as_deref());
                    if reply.send(sections).is_err() {
                        debug!("extract requester went away before the response");
                    }
                }
                Request::Replace(next) => {
                    debug!(url = next.url.as_deref(), "page replaced");
                    page = next;
                }
            }
        }
        debug!("page agent stopped");
    });

    AgentHandle { tx }
}
