//! Cooperative shutdown and cancellable sleeping.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tracing::{info, warn};

/// Suspends the orchestrator between cycles.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Sleep for `duration`.
    ///
    /// Returns `false` if shutdown was requested before or during the sleep,
    /// in which case the caller must stop.
    async fn sleep(&self, duration: Duration) -> bool;
}

/// Shutdown signal shared between the orchestrator and whoever stops it.
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    flag: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown and wake any pending sleep.
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Trigger shutdown on Ctrl-C.
    pub fn listen_for_ctrl_c(&self) {
        let shutdown = self.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Ctrl-C received, requesting shutdown");
                    shutdown.trigger();
                }
                Err(err) => warn!(error = %err, "Failed to listen for Ctrl-C"),
            }
        });
    }
}

#[async_trait]
impl Sleeper for Shutdown {
    async fn sleep(&self, duration: Duration) -> bool {
        // Register before checking the flag so a concurrent trigger is not lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();

        if self.is_triggered() {
            return false;
        }

        tokio::select! {
            _ = tokio::time::sleep(duration) => !self.is_triggered(),
            _ = notified => false,
        }
    }
}
