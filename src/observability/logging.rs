//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Resolve the active filter from CLI, environment and config
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, pretty format for development
//! - Log level configurable via config and environment

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when nothing else is configured.
pub const DEFAULT_LOG_FILTER: &str = "healthwatch=info";

/// Pick the log filter: CLI > `RUST_LOG` > config > default.
///
/// A bare level from the config (e.g. "debug") is scoped to this crate so
/// dependencies stay quiet.
pub fn resolve_filter(cli: Option<&str>, env: Option<&str>, config_level: &str) -> String {
    if let Some(filter) = cli.filter(|f| !f.is_empty()) {
        return filter.to_string();
    }
    if let Some(filter) = env.filter(|f| !f.is_empty()) {
        return filter.to_string();
    }
    match config_level.trim() {
        "" => DEFAULT_LOG_FILTER.to_string(),
        level if is_bare_level(level) => format!("healthwatch={},tower_http=info", level),
        directive => directive.to_string(),
    }
}

fn is_bare_level(level: &str) -> bool {
    matches!(
        level.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error" | "off"
    )
}

/// Install the global subscriber.
pub fn init_logging(filter: &str, json: bool) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{}': {}, using default", filter, e);
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
