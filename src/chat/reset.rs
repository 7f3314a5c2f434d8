//! Session reset: clear the visible history, best-effort notify the backend.

use tracing::warn;

use super::state::ChatState;
use crate::backend::{BackendError, ChatBackend};

/// Fire-and-forget result of the backend reset notification. Inspected only
/// for logging, never for control flow: the visible reset has already
/// succeeded by the time this exists.
#[derive(Debug)]
pub enum NotifyOutcome {
    Delivered,
    Dropped(BackendError),
}

impl NotifyOutcome {
    /// Logs a dropped notification and nothing else.
    pub fn log(self) {
        if let NotifyOutcome::Dropped(err) = self {
            warn!(error = %err, "backend reset notification failed");
        }
    }
}

/// Clears the transcript back to the single welcome exchange and restores
/// the input for typing. Always succeeds, regardless of what the backend
/// notification later does.
pub fn apply_reset(state: &mut ChatState) {
    state.transcript.clear_to_welcome();
    state.input.clear();
    state.cursor_pos = 0;
    state.scroll_offset = 0;
    state.pending_reset = false;
    state.status_message = Some("Conversation cleared".into());
}

/// Tells the backend to discard its conversational state.
pub async fn notify_backend<B: ChatBackend>(backend: &B) -> NotifyOutcome {
    match backend.reset().await {
        Ok(()) => NotifyOutcome::Delivered,
        Err(err) => NotifyOutcome::Dropped(err),
    }
}
