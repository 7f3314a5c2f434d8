//! Submission controller: the send lifecycle for one user message.
//!
//! The lifecycle is three total steps. `begin` validates and echoes, `perform`
//! issues the request and classifies every failure into a user-facing
//! outcome, `finish` appends the assistant turn and clears the busy flag.
//! `perform` cannot fail, so every begun submission reaches `finish` exactly
//! once; the flag can never be left stuck by an error path.

use std::sync::Arc;
use tracing::debug;

use super::state::{ChatState, Exchange};
use crate::backend::ChatBackend;

/// Terminal result of one submission. Both variants end up in the
/// transcript as an assistant exchange, so failures read like replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Reply(String),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn text(&self) -> &str {
        match self {
            SubmissionOutcome::Reply(text) | SubmissionOutcome::Failure(text) => text,
        }
    }
}

/// Owns the backend handle for chat submissions. State cells are passed in
/// by the caller; the controller holds no transcript of its own.
pub struct SubmissionController<B> {
    backend: Arc<B>,
}

impl<B> Clone for SubmissionController<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: ChatBackend> SubmissionController<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Validates and opens a submission: trims the input, rejects empty text
    /// or a busy session as a silent no-op, appends the optimistic user
    /// echo, and sets the busy flag. Returns the message to send.
    pub fn begin(&self, state: &mut ChatState, text: &str) -> Option<String> {
        if state.submission.is_busy() {
            return None;
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        state.push_exchange(Exchange::user(trimmed));
        state.submission.begin();
        Some(trimmed.to_string())
    }

    /// Issues the chat request. Total: every transport or status failure is
    /// classified into a displayable outcome, nothing propagates.
    pub async fn perform(&self, message: &str) -> SubmissionOutcome {
        match self.backend.chat(message).await {
            Ok(reply) => SubmissionOutcome::Reply(reply),
            Err(err) => {
                debug!(error = %err, "chat request failed");
                SubmissionOutcome::Failure(err.user_message())
            }
        }
    }

    /// Closes the submission: appends the assistant exchange and clears the
    /// busy flag. Runs for every begun submission, success or failure.
    pub fn finish(&self, state: &mut ChatState, outcome: SubmissionOutcome) {
        state.push_exchange(Exchange::assistant(outcome.text()));
        state.submission.finish();
    }

    /// Full lifecycle in one call, for flows that can await inline.
    pub async fn submit(&self, state: &mut ChatState, text: &str) {
        let Some(message) = self.begin(state, text) else {
            return;
        };
        let outcome = self.perform(&message).await;
        self.finish(state, outcome);
    }
}
