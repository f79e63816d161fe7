//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! Polling loop (poller.rs):
//!     Sweep timer
//!     → Probe each service in order (probe.rs)
//!     → Feed result to tracker.rs
//!     → Transition? → notifier
//!     → Publish snapshot to board.rs
//!
//! State machine (state.rs, tracker.rs):
//!     Healthy ←→ Unhealthy
//!     With an anomaly threshold to prevent flapping
//! ```
//!
//! # Design Decisions
//! - One sequential sweep at a time, never concurrent probes
//! - State transitions require consecutive contradicting probes
//! - Health state is per-service and owned by the poller task

pub mod board;
pub mod poller;
pub mod probe;
pub mod state;
pub mod tracker;

pub use board::StatusBoard;
pub use poller::HealthPoller;
pub use probe::{HttpProber, ProbeDetail, ProbeResult, Prober};
pub use state::{HealthStatus, ServiceHealthState, ServiceSnapshot, Transition};
pub use tracker::HealthTracker;
