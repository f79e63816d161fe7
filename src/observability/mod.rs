//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Tracker, poller and notifiers produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Every failed probe is logged, even below the debounce threshold
//! - Metrics are cheap and optional

pub mod logging;
pub mod metrics;
