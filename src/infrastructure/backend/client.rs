//! # Remote Client
//!
//! Provides the `RemoteClient` struct, the single entry point for backend interactions.
//! It resolves logical operations to URLs, performs the HTTP exchange and retries
//! transport failures with a bounded attempt counter.

use reqwest::{Client, Url};
use serde_json::Value;

use super::classify::{classify, error_chain};
use crate::domain::config::BackendConfig;
use crate::domain::traits::RemoteInvoker;
use crate::domain::types::{ErrorKind, Method, Payload, RemoteCall, RemoteResult};
use async_trait::async_trait;

/// One failed attempt: the classification plus a log-friendly description.
type AttemptError = (ErrorKind, String);

/// HTTP client for the bot backend. Cheap to share; holds no per-call state.
pub struct RemoteClient {
    http: Client,
    base_url: Url,
    config: BackendConfig,
}

impl RemoteClient {
    /// Create a new client from the backend configuration
    pub fn new(config: BackendConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let http = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            http,
            base_url,
            config,
        })
    }

    fn url_for(&self, call: &RemoteCall) -> Result<Url, AttemptError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                (
                    ErrorKind::Unknown,
                    format!("base url {} cannot take a path", self.base_url),
                )
            })?
            .pop_if_empty()
            .extend(call.operation.path_segments());
        Ok(url)
    }

    /// Execute a call, retrying transport failures up to `max_retries` times.
    pub async fn execute(&self, call: &RemoteCall) -> RemoteResult {
        let operation = call.operation.name();
        let max_retries = self.config.max_retries;
        let mut attempt: u32 = 0;

        loop {
            tracing::debug!(operation, attempt, "Backend request");

            match self.attempt(call).await {
                Ok(payload) => {
                    if attempt > 0 {
                        tracing::info!(operation, attempt, "Backend request succeeded after retry");
                    } else {
                        tracing::debug!(operation, "Backend request succeeded");
                    }
                    return RemoteResult::Success(payload);
                }
                Err((kind, detail)) if kind.is_retryable() && attempt < max_retries => {
                    let delay = self.config.retry_delay(attempt);
                    tracing::warn!(
                        operation,
                        attempt = attempt + 1,
                        max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "Backend request failed ({}): {}; retrying",
                        kind,
                        detail
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err((kind, detail)) => {
                    tracing::error!(
                        operation,
                        attempts = attempt + 1,
                        "Backend request failed ({}): {}",
                        kind,
                        detail
                    );
                    return RemoteResult::failure(
                        kind,
                        format!("{operation} failed after {} attempt(s): {detail}", attempt + 1),
                    );
                }
            }
        }
    }

    async fn attempt(&self, call: &RemoteCall) -> Result<Payload, AttemptError> {
        let url = self.url_for(call)?;

        let request = match call.method {
            Method::Get => self.http.get(url),
            Method::Post => {
                let body = call.payload.clone().unwrap_or_default();
                self.http.post(url).json(&body)
            }
        };

        let response = request
            .send()
            .await
            .map_err(|e| (classify(&e), error_chain(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err((
                ErrorKind::RemoteError(status.as_u16()),
                format!("HTTP {status}"),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| (classify(&e), error_chain(&e)))?;

        serde_json::from_str::<Value>(&body)
            .map(Payload::from_json)
            .map_err(|e| (ErrorKind::MalformedResponse, format!("invalid JSON body: {e}")))
    }
}

#[async_trait]
impl RemoteInvoker for RemoteClient {
    async fn invoke(&self, call: RemoteCall) -> RemoteResult {
        self.execute(&call).await
    }
}
