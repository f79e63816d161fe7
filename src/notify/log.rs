//! Log-only notifier.

use async_trait::async_trait;

use crate::health::state::HealthStatus;
use crate::notify::{Notifier, NotifyError};

/// Writes transitions to the log; used when no chat integration is enabled.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn broadcast(
        &self,
        message: &str,
        service: &str,
        status: HealthStatus,
    ) -> Result<(), NotifyError> {
        match status {
            HealthStatus::Down => tracing::error!(service = %service, status = %status, "{}", message),
            HealthStatus::Up => tracing::info!(service = %service, status = %status, "{}", message),
        }
        Ok(())
    }
}
