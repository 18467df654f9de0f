//! Connection state tracking for a MongoDB client.
//!
//! The driver does not expose a connection state of its own, so a background
//! heartbeat pings the server and records the outcome in a shared atomic.

use mongodb::Client;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::health::ping;

/// Connectivity of the database client.
///
/// Numeric codes are the ones clients see as `readyState` in 503 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConnectionState {
    Disconnected = 0,
    Connected = 1,
    Connecting = 2,
    Disconnecting = 3,
}

impl ConnectionState {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Disconnected),
            1 => Some(Self::Connected),
            2 => Some(Self::Connecting),
            3 => Some(Self::Disconnecting),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connected => "connected",
            Self::Connecting => "connecting",
            Self::Disconnecting => "disconnecting",
        }
    }

    pub fn is_connected(self) -> bool {
        self == Self::Connected
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared, cheaply clonable view of the connection state
#[derive(Clone)]
pub struct ConnectionMonitor {
    state: Arc<AtomicU8>,
}

impl ConnectionMonitor {
    /// Starts in [`ConnectionState::Connecting`]
    pub fn new() -> Self {
        Self::with_state(ConnectionState::Connecting)
    }

    pub fn connected() -> Self {
        Self::with_state(ConnectionState::Connected)
    }

    pub fn with_state(state: ConnectionState) -> Self {
        Self {
            state: Arc::new(AtomicU8::new(state.code())),
        }
    }

    pub fn state(&self) -> ConnectionState {
        ConnectionState::from_code(self.state.load(Ordering::Acquire))
            .unwrap_or(ConnectionState::Disconnected)
    }

    pub fn is_connected(&self) -> bool {
        self.state().is_connected()
    }

    /// Store a new state and return the previous one
    pub fn set(&self, state: ConnectionState) -> ConnectionState {
        let previous = ConnectionState::from_code(self.state.swap(state.code(), Ordering::AcqRel))
            .unwrap_or(ConnectionState::Disconnected);

        if previous != state {
            match state {
                ConnectionState::Connected => info!(from = %previous, "MongoDB connection established"),
                ConnectionState::Disconnected => {
                    warn!(from = %previous, "MongoDB connection lost")
                }
                _ => debug!(from = %previous, to = %state, "MongoDB connection state changed"),
            }
        }

        previous
    }

    /// Record the outcome of a connectivity probe.
    ///
    /// A monitor in [`ConnectionState::Disconnecting`] is left untouched.
    pub fn record_probe(&self, healthy: bool) -> ConnectionState {
        if self.state() == ConnectionState::Disconnecting {
            return ConnectionState::Disconnecting;
        }

        let next = if healthy {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        };
        self.set(next);
        next
    }

    /// Ping `client` every `interval` and record the result.
    ///
    /// Each probe is bounded by `interval`. The task ends once the monitor is
    /// moved to [`ConnectionState::Disconnecting`].
    pub fn spawn_heartbeat(&self, client: Client, interval: Duration) -> JoinHandle<()> {
        let monitor = self.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                if monitor.state() == ConnectionState::Disconnecting {
                    debug!("Stopping MongoDB heartbeat");
                    break;
                }

                let healthy = match tokio::time::timeout(interval, ping(&client)).await {
                    Ok(Ok(())) => true,
                    Ok(Err(e)) => {
                        debug!(error = %e, "MongoDB heartbeat failed");
                        false
                    }
                    Err(_) => {
                        debug!(timeout_ms = interval.as_millis() as u64, "MongoDB heartbeat timed out");
                        false
                    }
                };

                monitor.record_probe(healthy);
            }
        })
    }
}

impl Default for ConnectionMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConnectionMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionMonitor")
            .field("state", &self.state())
            .finish()
    }
}
