//! Message lifecycle: transcript state, the submission controller, the
//! liveness monitor, and session reset.

mod liveness;
mod reset;
mod state;
mod submission;

pub use liveness::{ConnectivityStatus, LivenessMonitor, POLL_INTERVAL};
pub use reset::{NotifyOutcome, apply_reset, notify_backend};
pub use state::{ChatState, Exchange, Sender, SubmissionState, Transcript, WELCOME};
pub use submission::{SubmissionController, SubmissionOutcome};
