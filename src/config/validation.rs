//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check service names are unique and URLs are probe-able
//! - Validate value ranges (interval > 0, threshold >= 1)
//! - Check that enabled integrations carry their credentials
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: WatchConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::WatchConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no services configured")]
    NoServices,

    #[error("service #{0} has an empty name")]
    EmptyServiceName(usize),

    #[error("service '{0}' is defined more than once")]
    DuplicateService(String),

    #[error("service '{name}' has an invalid url '{url}': {reason}")]
    InvalidUrl { name: String, url: String, reason: String },

    #[error("monitor.{0} must be greater than zero")]
    Zero(&'static str),

    #[error("telegram is enabled but {0}")]
    Telegram(&'static str),

    #[error("{field} '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("admin is enabled but admin.api_key is empty")]
    MissingAdminKey,
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &WatchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.services.is_empty() {
        errors.push(ValidationError::NoServices);
    }

    let mut seen = HashSet::new();
    for (i, service) in config.services.iter().enumerate() {
        if service.name.trim().is_empty() {
            errors.push(ValidationError::EmptyServiceName(i));
        } else if !seen.insert(service.name.as_str()) {
            errors.push(ValidationError::DuplicateService(service.name.clone()));
        }

        if let Err(reason) = check_url(&service.url) {
            errors.push(ValidationError::InvalidUrl {
                name: service.name.clone(),
                url: service.url.clone(),
                reason,
            });
        }
    }

    if config.monitor.interval_secs == 0 {
        errors.push(ValidationError::Zero("interval_secs"));
    }
    if config.monitor.anomaly_threshold == 0 {
        errors.push(ValidationError::Zero("anomaly_threshold"));
    }
    if config.monitor.timeout_secs == 0 {
        errors.push(ValidationError::Zero("timeout_secs"));
    }

    if config.telegram.enabled {
        if config.telegram.bot_token.trim().is_empty() {
            errors.push(ValidationError::Telegram("telegram.bot_token is empty"));
        }
        if config.telegram.chat_ids.is_empty() {
            errors.push(ValidationError::Telegram("telegram.chat_ids is empty"));
        }
        if check_url(&config.telegram.api_base).is_err() {
            errors.push(ValidationError::Telegram("telegram.api_base is not an http(s) url"));
        }
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.admin.enabled {
        if config.admin.bind_address.parse::<SocketAddr>().is_err() {
            errors.push(ValidationError::InvalidAddress {
                field: "admin.bind_address",
                value: config.admin.bind_address.clone(),
            });
        }
        if config.admin.api_key.is_empty() {
            errors.push(ValidationError::MissingAdminKey);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme '{}'", other)),
    }
}
