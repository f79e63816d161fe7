//! Transition notifications.
//!
//! # Data Flow
//! ```text
//! HealthPoller receives a Transition
//!     → Notifier::broadcast(message, service, status)
//!         - telegram.rs (Bot API sendMessage to every chat)
//!         - log.rs (structured log event only)
//! ```
//!
//! # Design Decisions
//! - One capability trait, chosen once at startup
//! - Delivery failures are returned to the caller, which logs them
//! - No retry: the next transition is the next chance to notify

pub mod log;
pub mod telegram;

use async_trait::async_trait;
use thiserror::Error;

use crate::health::state::HealthStatus;

pub use self::log::LogNotifier;
pub use self::telegram::TelegramNotifier;

/// Errors raised while delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API answered with a non-success status.
    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    /// Some recipients did not receive the message.
    #[error("delivered to {delivered} of {total} recipients")]
    Partial { delivered: usize, total: usize },
}

/// Capability to broadcast a health transition.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn broadcast(
        &self,
        message: &str,
        service: &str,
        status: HealthStatus,
    ) -> Result<(), NotifyError>;
}
