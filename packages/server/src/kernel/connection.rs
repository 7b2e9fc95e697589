//! Storage connection lifecycle.
//!
//! The monitor is a small state machine over {disconnected, connected,
//! degraded}. Storage operations and the periodic probe feed it events;
//! health checks read it synchronously. Request handlers never gate on it.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::BaseJobStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Disconnected,
    Connected,
    Degraded,
}

/// Connectivity events driving the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionEvent {
    /// Initial connection established.
    Established,
    /// An operation or probe failed for reachability reasons.
    Fault,
    /// An operation or probe succeeded.
    Success,
    /// Process is shutting down; the pool is being closed.
    Shutdown,
}

impl ConnectionState {
    pub fn next(self, event: ConnectionEvent) -> ConnectionState {
        use ConnectionEvent::*;
        use ConnectionState::*;

        match (self, event) {
            (_, Shutdown) => Disconnected,
            (_, Established) => Connected,
            (Connected, Fault) => Degraded,
            (Degraded, Success) => Connected,
            // Before connect or after shutdown, traffic does not revive the state.
            (state, _) => state,
        }
    }

    pub fn is_ready(self) -> bool {
        self == ConnectionState::Connected
    }
}

/// Shared handle to the current connection state.
#[derive(Clone)]
pub struct ConnectionMonitor {
    state: Arc<watch::Sender<ConnectionState>>,
}

impl ConnectionMonitor {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ConnectionState::Disconnected);
        Self {
            state: Arc::new(tx),
        }
    }

    /// A monitor that starts out connected.
    pub fn connected() -> Self {
        let monitor = Self::new();
        monitor.record(ConnectionEvent::Established);
        monitor
    }

    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    pub fn record(&self, event: ConnectionEvent) {
        let mut transition = None;
        self.state.send_if_modified(|current| {
            let next = current.next(event);
            if next == *current {
                return false;
            }
            transition = Some((*current, next));
            *current = next;
            true
        });

        if let Some((from, to)) = transition {
            match to {
                ConnectionState::Degraded => {
                    warn!(?from, ?to, "storage connection degraded")
                }
                _ => info!(?from, ?to, "storage connection state changed"),
            }
        }
    }

    pub fn report_success(&self) {
        self.record(ConnectionEvent::Success);
    }

    pub fn report_fault(&self) {
        self.record(ConnectionEvent::Fault);
    }

    pub fn shutdown(&self) {
        self.record(ConnectionEvent::Shutdown);
    }
}

impl Default for ConnectionMonitor {
    fn default() -> Self {
        Self::new()
    }
}

/// Periodically ping the store so a degraded connection is noticed, and its
/// recovery picked up, even when no requests arrive. Stops once the monitor
/// reports disconnected.
pub fn spawn_health_probe(
    store: Arc<dyn BaseJobStore>,
    monitor: ConnectionMonitor,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        let mut state_rx = monitor.subscribe();

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                changed = state_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }

            if monitor.state() == ConnectionState::Disconnected {
                debug!("storage disconnected, stopping health probe");
                break;
            }

            match store.ping().await {
                Ok(()) => monitor.report_success(),
                Err(e) if e.is_connectivity() => {
                    warn!(error = %e, "storage health probe failed");
                    monitor.report_fault();
                }
                Err(e) => warn!(error = %e, "storage health probe returned an error"),
            }
        }
    })
}
