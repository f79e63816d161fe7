//! Debounced HTTP service health watchdog.

pub mod admin;
pub mod config;
pub mod health;
pub mod lifecycle;
pub mod notify;
pub mod observability;

pub use config::WatchConfig;
pub use health::{HealthPoller, HealthTracker};
pub use lifecycle::Shutdown;
