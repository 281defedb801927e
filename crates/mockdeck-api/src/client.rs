//! Base-configured HTTP client with boundary error surfacing
//!
//! One [`ApiClient`] exists per backend, differing only in base URL and
//! timeout. Success bodies are parsed as JSON; any transport or non-2xx
//! failure emits a single notification through the injected notifier and
//! is returned to the caller as an [`Error`].

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use mockdeck_core::{Error, Notice, Notifier, Result};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A reqwest wrapper bound to one backend's base address.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for one backend.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            notifier,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a JSON body.
    pub async fn get(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        debug!("GET {url}");
        let outcome = self.http.get(&url).send().await;
        self.settle(outcome).await.map(|v| v.unwrap_or(Value::Null))
    }

    /// POST a JSON payload; the response body, if any, is returned.
    pub async fn post(&self, path: &str, body: &impl Serialize) -> Result<Option<Value>> {
        let url = self.url(path);
        debug!("POST {url}");
        let outcome = self.http.post(&url).json(body).send().await;
        self.settle(outcome).await
    }

    /// PUT a JSON payload; the response body, if any, is returned.
    pub async fn put(&self, path: &str, body: &impl Serialize) -> Result<Option<Value>> {
        let url = self.url(path);
        debug!("PUT {url}");
        let outcome = self.http.put(&url).json(body).send().await;
        self.settle(outcome).await
    }

    /// DELETE; the backend's acknowledgment body is discarded.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        debug!("DELETE {url}");
        let outcome = self.http.delete(&url).send().await;
        self.settle(outcome).await.map(|_| ())
    }

    /// Resolve a reqwest outcome into a parsed body, notifying on failure.
    ///
    /// Single choke point for boundary reporting: exactly one notice per
    /// failed round trip, server-supplied message preferred.
    async fn settle(
        &self,
        outcome: std::result::Result<reqwest::Response, reqwest::Error>,
    ) -> Result<Option<Value>> {
        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                let err = Error::transport(transport_detail(&e));
                warn!("request failed: {err}");
                self.notifier.notify(Notice::error(err.user_message()));
                return Err(err);
            }
        };

        let status = response.status();
        if status.is_success() {
            // Acknowledgment-only endpoints return empty bodies.
            let text = response.text().await.unwrap_or_default();
            if text.trim().is_empty() {
                return Ok(None);
            }
            let value: Value = serde_json::from_str(&text)?;
            return Ok(Some(value));
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_server_message(status.as_u16(), &body);
        let err = Error::server(status.as_u16(), message);
        warn!("request failed: {err}");
        self.notifier.notify(Notice::error(err.user_message()));
        Err(err)
    }
}

/// Human-readable detail for a transport-level failure.
fn transport_detail(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        "connection refused".to_string()
    } else {
        e.to_string()
    }
}

/// Prefer a server-supplied `{"message": ...}` field, fall back to the
/// HTTP status line.
fn extract_server_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            if !message.is_empty() {
                return message.to_string();
            }
        }
    }
    let reason = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("request failed");
    format!("{status} {reason}")
}
