//! Ctrl+C handling
//!
//! The observation loop races its sleep against `ShutdownSignal::wait`, so an
//! interrupt ends the process cleanly instead of mid-sleep.

use thiserror::Error;
use tokio::sync::watch;

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Failed to install Ctrl+C handler: {0}")]
    Install(#[from] ctrlc::Error),
}

/// Receiving side of the shutdown request
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

/// Triggering side, used by tests and by the Ctrl+C handler
#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

impl ShutdownTrigger {
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

impl ShutdownSignal {
    /// Register the process-wide Ctrl+C handler
    ///
    /// Can only succeed once per process.
    pub fn install() -> Result<Self, SignalError> {
        let (trigger, signal) = Self::manual();
        ctrlc::set_handler(move || trigger.trigger())?;
        Ok(signal)
    }

    /// A signal that only fires through the returned trigger
    pub fn manual() -> (ShutdownTrigger, Self) {
        let (tx, rx) = watch::channel(false);
        (ShutdownTrigger { tx }, Self { rx })
    }

    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once shutdown has been requested
    ///
    /// If every trigger is dropped without firing, this never resolves.
    pub async fn wait(&mut self) {
        if self.rx.wait_for(|stop| *stop).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_manual_trigger() {
        let (trigger, mut signal) = ShutdownSignal::manual();
        assert!(!signal.is_triggered());

        trigger.trigger();
        assert!(signal.is_triggered());
        tokio::time::timeout(Duration::from_secs(1), signal.wait())
            .await
            .expect("wait should resolve after trigger");
    }

    #[tokio::test]
    async fn test_wait_pending_without_trigger() {
        let (_trigger, mut signal) = ShutdownSignal::manual();
        let result = tokio::time::timeout(Duration::from_millis(20), signal.wait()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_dropped_trigger_never_fires() {
        let (trigger, mut signal) = ShutdownSignal::manual();
        drop(trigger);
        let result = tokio::time::timeout(Duration::from_millis(20), signal.wait()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_clones_share_state() {
        let (trigger, signal) = ShutdownSignal::manual();
        let other = signal.clone();
        trigger.trigger();
        assert!(other.is_triggered());
    }
}
