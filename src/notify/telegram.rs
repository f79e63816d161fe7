//! Telegram Bot API broadcaster.
//!
//! # Responsibilities
//! - Send every transition message to each configured chat
//! - Report partial delivery when some chats fail
//!
//! # Design Decisions
//! - All chats are attempted even after a failure
//! - Errors never carry the request URL, which contains the bot token
//! - Plain text messages, no parse mode (service URLs stay verbatim)

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use crate::config::TelegramConfig;
use crate::health::state::HealthStatus;
use crate::notify::{Notifier, NotifyError};

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
}

/// Broadcasts transitions to Telegram chats through a bot.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: reqwest::Client,
    endpoint: String,
    chat_ids: Vec<i64>,
}

impl TelegramNotifier {
    pub fn new(config: &TelegramConfig) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: &TelegramConfig) -> Self {
        Self {
            client,
            endpoint: send_message_url(&config.api_base, &config.bot_token),
            chat_ids: config.chat_ids.clone(),
        }
    }

    async fn send(&self, chat_id: i64, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SendMessage { chat_id, text })
            .send()
            .await
            // The endpoint embeds the bot token.
            .map_err(|e| NotifyError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

fn send_message_url(api_base: &str, token: &str) -> String {
    format!("{}/bot{}/sendMessage", api_base.trim_end_matches('/'), token)
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn broadcast(
        &self,
        message: &str,
        service: &str,
        status: HealthStatus,
    ) -> Result<(), NotifyError> {
        let total = self.chat_ids.len();
        let mut delivered = 0;
        let mut last_error = None;

        for &chat_id in &self.chat_ids {
            match self.send(chat_id, message).await {
                Ok(()) => delivered += 1,
                Err(e) => {
                    tracing::warn!(chat_id, service = %service, status = %status, error = %e, "Telegram delivery failed");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            None => {
                tracing::debug!(service = %service, chats = total, "Telegram broadcast delivered");
                Ok(())
            }
            Some(e) if delivered == 0 => Err(e),
            Some(_) => Err(NotifyError::Partial { delivered, total }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            send_message_url("https://api.telegram.org/", "123:abc"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
        assert_eq!(
            send_message_url("http://127.0.0.1:8443", "t"),
            "http://127.0.0.1:8443/bott/sendMessage"
        );
    }

    #[test]
    fn test_payload_shape() {
        let payload = serde_json::to_value(SendMessage {
            chat_id: -100123,
            text: "api is OK, all issues resolved.",
        })
        .unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "chat_id": -100123,
                "text": "api is OK, all issues resolved."
            })
        );
    }
}
