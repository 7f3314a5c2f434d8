//! Liveness monitor: periodic backend health polling.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::backend::ChatBackend;

/// Fixed poll cadence.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Process-wide connectivity cell. Written only by the liveness monitor,
/// read by the status display.
#[derive(Debug, Default)]
pub struct ConnectivityStatus {
    connected: AtomicBool,
}

impl ConnectivityStatus {
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::Relaxed);
    }
}

/// Polls the health endpoint and resolves every outcome to a boolean.
pub struct LivenessMonitor<B> {
    backend: Arc<B>,
    status: Arc<ConnectivityStatus>,
}

impl<B: ChatBackend> LivenessMonitor<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            status: Arc::new(ConnectivityStatus::default()),
        }
    }

    /// Handle for the status display.
    pub fn status(&self) -> Arc<ConnectivityStatus> {
        Arc::clone(&self.status)
    }

    /// One health check. Never fails: a transport error or malformed
    /// payload reads as disconnected, at most logged.
    pub async fn poll(&self) -> bool {
        let connected = match self.backend.health().await {
            Ok(reply) => reply.is_connected(),
            Err(err) => {
                debug!(error = %err, "health check failed");
                false
            }
        };
        self.status.set_connected(connected);
        connected
    }

    /// Polls once immediately, then on the fixed interval, for the lifetime
    /// of the process. Polls are single-flight by construction: the next
    /// tick is not serviced until the previous request resolves.
    pub async fn run(self) {
        let mut ticker = time::interval(POLL_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.poll().await;
        }
    }
}
