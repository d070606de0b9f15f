//! Background refresh scheduling
//!
//! Spawns a tokio task that emits periodic refresh ticks over a channel.
//! The channel holds a single tick; a tick that arrives while the consumer
//! is still busy with the previous cycle is dropped rather than queued.

use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::time::MissedTickBehavior;

/// Messages sent from the background scheduler to the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMessage {
    /// Time to run a refresh cycle
    Tick,
}

/// Configuration for the refresh scheduler
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Interval between refresh ticks
    pub interval: Duration,
    /// Whether periodic refresh is enabled
    pub enabled: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(300), // 5 minutes
            enabled: true,
        }
    }
}

/// Handle for controlling the background refresh scheduler
pub struct RefreshHandle {
    /// Channel delivering refresh ticks
    pub receiver: mpsc::Receiver<RefreshMessage>,
    /// Channel used to signal shutdown
    shutdown_tx: mpsc::Sender<()>,
}

impl RefreshHandle {
    /// Creates a RefreshHandle and spawns the background tick task
    ///
    /// The first tick fires one full interval after the spawn; the initial
    /// refresh is the caller's responsibility.
    ///
    /// # Arguments
    /// * `config` - Interval and enablement for the scheduler
    pub fn spawn(config: RefreshConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(1);
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        if config.enabled {
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(config.interval);
                interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
                // The first interval tick completes immediately; skip it
                interval.tick().await;

                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            match msg_tx.try_send(RefreshMessage::Tick) {
                                Ok(()) => {}
                                Err(TrySendError::Full(_)) => {
                                    debug!("refresh tick dropped: previous cycle still running");
                                }
                                Err(TrySendError::Closed(_)) => break,
                            }
                        }
                        _ = shutdown_rx.recv() => {
                            break;
                        }
                    }
                }
            });
        }

        Self {
            receiver: msg_rx,
            shutdown_tx,
        }
    }

    /// Shuts down the background tick task
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}
