//! HTTP backend client.

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use super::types::{BackendError, ChatReply, ChatRequest, ErrorBody, HealthReply};

/// Request-issuing seam shared by the submission controller, the liveness
/// monitor, and session reset. Tests substitute a stub.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Sends one user message and returns the raw reply text.
    async fn chat(&self, message: &str) -> Result<String, BackendError>;

    /// Queries the health endpoint.
    async fn health(&self) -> Result<HealthReply, BackendError>;

    /// Asks the backend to discard its conversational state.
    async fn reset(&self) -> Result<(), BackendError>;
}

/// reqwest-backed client for the chat backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    endpoint: String,
    http: Client,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Maps a non-success response to a classified error. 503 and 504 win
    /// over the detail field; an unparsable body degrades to the plain
    /// status variant.
    async fn classify_failure(response: Response) -> BackendError {
        let status = response.status().as_u16();
        match status {
            503 => BackendError::Unavailable,
            504 => BackendError::GatewayTimeout,
            _ => {
                let body: ErrorBody = response.json().await.unwrap_or_default();
                match body.detail {
                    Some(detail) if !detail.is_empty() => BackendError::Detail { status, detail },
                    _ => BackendError::Status { status },
                }
            }
        }
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn chat(&self, message: &str) -> Result<String, BackendError> {
        let url = self.build_url("/chat");
        debug!(bytes = message.len(), "sending chat request");

        let response = self
            .http
            .post(&url)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(BackendError::from_reqwest)?;

        if !response.status().is_success() {
            return Err(Self::classify_failure(response).await);
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| BackendError::invalid_response(e.to_string()))?;
        Ok(reply.reply)
    }

    async fn health(&self) -> Result<HealthReply, BackendError> {
        let url = self.build_url("/health");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(BackendError::from_reqwest)?;

        response
            .json()
            .await
            .map_err(|e| BackendError::invalid_response(e.to_string()))
    }

    async fn reset(&self) -> Result<(), BackendError> {
        let url = self.build_url("/reset");
        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(BackendError::from_reqwest)?;

        if !response.status().is_success() {
            return Err(Self::classify_failure(response).await);
        }
        Ok(())
    }
}
