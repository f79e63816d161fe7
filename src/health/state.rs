//! Per-service health state and the values the tracker emits.
//!
//! # States
//! - Healthy (`is_in_error == false`): the service is believed up
//! - Unhealthy (`is_in_error == true`): the service is believed down
//!
//! # State Transitions
//! ```text
//! Healthy → Unhealthy: anomaly_streak reaches anomaly_threshold (probes failing)
//! Unhealthy → Healthy: anomaly_streak reaches anomaly_threshold (probes passing)
//! ```
//!
//! # Design Decisions
//! - Every service starts Healthy
//! - The streak counts probes that contradict the current belief
//! - The streak resets on agreement and on every flip

use serde::Serialize;
use std::fmt;

/// Believed health of a service, as announced in notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Up,
    Down,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Up => "UP",
            HealthStatus::Down => "DOWN",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable health belief for one service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceHealthState {
    /// Current belief: `false` = up, `true` = down.
    pub is_in_error: bool,
    /// Consecutive probes that disagreed with `is_in_error`.
    pub anomaly_streak: u32,
}

impl ServiceHealthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> HealthStatus {
        if self.is_in_error {
            HealthStatus::Down
        } else {
            HealthStatus::Up
        }
    }
}

/// A confirmed flip of a service's believed health.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub service: String,
    pub status: HealthStatus,
    pub message: String,
}

/// Read-only view of one tracked service, published after every sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceSnapshot {
    pub name: String,
    pub url: String,
    pub status: HealthStatus,
    pub anomaly_streak: u32,
}
