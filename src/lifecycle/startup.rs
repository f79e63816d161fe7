//! Startup orchestration.
//!
//! # Responsibilities
//! - Build prober, notifier and tracker from a validated config
//! - Assemble the poller
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Telegram when enabled, log-only notifications otherwise

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::WatchConfig;
use crate::health::{HealthPoller, HealthTracker, HttpProber};
use crate::notify::{LogNotifier, Notifier, NotifyError, TelegramNotifier};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to build HTTP prober: {0}")]
    Prober(#[source] reqwest::Error),

    #[error("failed to build notifier: {0}")]
    Notifier(#[from] NotifyError),
}

pub fn build_notifier(config: &WatchConfig) -> Result<Arc<dyn Notifier>, StartupError> {
    if config.telegram.enabled {
        tracing::info!(chats = config.telegram.chat_ids.len(), "Telegram notifications enabled");
        Ok(Arc::new(TelegramNotifier::new(&config.telegram)?))
    } else {
        tracing::info!("Telegram disabled, transitions will only be logged");
        Ok(Arc::new(LogNotifier))
    }
}

/// Build a ready-to-run poller from a validated configuration.
pub fn build_poller(config: &WatchConfig) -> Result<HealthPoller, StartupError> {
    let prober = HttpProber::new(&config.monitor).map_err(StartupError::Prober)?;
    let notifier = build_notifier(config)?;
    let tracker = HealthTracker::from_config(&config.services, config.monitor.anomaly_threshold);

    Ok(HealthPoller::new(
        tracker,
        Arc::new(prober),
        notifier,
        Duration::from_secs(config.monitor.interval_secs),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;

    #[test]
    fn test_build_poller_tracks_every_service() {
        let mut config = WatchConfig::default();
        config.monitor.anomaly_threshold = 4;
        config.services = vec![
            ServiceConfig { name: "api".into(), url: "http://api".into() },
            ServiceConfig { name: "web".into(), url: "http://web".into() },
        ];

        let poller = build_poller(&config).unwrap();
        assert_eq!(poller.tracker().len(), 2);
        assert_eq!(poller.tracker().threshold(), 4);
        assert_eq!(poller.board().load().len(), 2);
    }

    #[test]
    fn test_telegram_notifier_when_enabled() {
        let mut config = WatchConfig::default();
        config.telegram.enabled = true;
        config.telegram.bot_token = "123:abc".into();
        config.telegram.chat_ids = vec![42];
        assert!(build_notifier(&config).is_ok());
    }
}
