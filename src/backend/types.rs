//! Wire types and the classified backend error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Entity body for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Success body from the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Optional diagnostic carried by failure responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Health endpoint payload. Only the literal value `connected` counts as a
/// live backend; anything else, or a missing field, reads as down.
#[derive(Debug, Deserialize)]
pub struct HealthReply {
    #[serde(default)]
    pub ollama: Option<String>,
}

impl HealthReply {
    pub fn is_connected(&self) -> bool {
        self.ollama.as_deref() == Some("connected")
    }
}

/// Failures from the backend endpoints, classified by status code.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend model service unavailable (503)")]
    Unavailable,

    #[error("backend request timed out (504)")]
    GatewayTimeout,

    #[error("backend returned {status}: {detail}")]
    Detail { status: u16, detail: String },

    #[error("backend returned HTTP {status}")]
    Status { status: u16 },

    #[error("{source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid response from backend: {reason}")]
    InvalidResponse { reason: String },
}

impl BackendError {
    pub(crate) fn from_reqwest(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            BackendError::GatewayTimeout
        } else {
            BackendError::Network { source }
        }
    }

    pub(crate) fn invalid_response(reason: impl Into<String>) -> Self {
        BackendError::InvalidResponse {
            reason: reason.into(),
        }
    }

    /// User-facing explanation, rendered into the transcript as an
    /// assistant turn. Markdown constructs here go through the same
    /// renderer as real replies.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Unavailable => "⚠️ **Ollama is not running!**\n\n\
                Make sure Ollama is installed and running:\n\n\
                ```bash\nollama serve\n```\n\n\
                Once Ollama is running, try your question again."
                .to_string(),
            BackendError::GatewayTimeout => "⏱️ **Request timed out.**\n\n\
                The model took too long to respond. This usually happens if:\n\
                - The machine is low on memory\n\
                - The system is under heavy load\n\n\
                Try asking a simpler question or check system resources."
                .to_string(),
            BackendError::Detail { detail, .. } => format!("Error: {detail}"),
            BackendError::Status { status } => format!(
                "HTTP Error {status}: Please check that:\n\
                 1. The backend server is running\n\
                 2. Ollama is installed and running (ollama serve)\n\
                 3. The tinyllama model is downloaded (ollama pull tinyllama)"
            ),
            BackendError::Network { source } => source.to_string(),
            BackendError::InvalidResponse { .. } => self.to_string(),
        }
    }
}
