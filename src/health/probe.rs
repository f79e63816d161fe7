//! Service probing.
//!
//! # Responsibilities
//! - Issue one HTTP GET against a service URL
//! - Fold every outcome (response or transport failure) into a `ProbeResult`
//!
//! # Design Decisions
//! - Probing never fails: transport errors become data, not `Err`
//! - Only 2xx counts as healthy
//! - The per-request timeout is the client's, there is no retry

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

use crate::config::MonitorConfig;

/// What a probe observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeDetail {
    /// The service answered with this HTTP status code.
    Status(u16),
    /// The request never produced a response (connect, DNS, timeout...).
    Transport(String),
}

impl fmt::Display for ProbeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeDetail::Status(code) => write!(f, "{}", code),
            ProbeDetail::Transport(error) => f.write_str(error),
        }
    }
}

/// Outcome of one health probe for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub detail: ProbeDetail,
}

impl ProbeResult {
    pub fn status(code: u16) -> Self {
        Self { detail: ProbeDetail::Status(code) }
    }

    pub fn transport(error: impl Into<String>) -> Self {
        Self { detail: ProbeDetail::Transport(error.into()) }
    }

    /// True only for a 2xx response.
    pub fn is_ok(&self) -> bool {
        matches!(self.detail, ProbeDetail::Status(code) if (200..300).contains(&code))
    }
}

/// Capability to probe a service URL.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeResult;
}

/// HTTP GET prober backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new(config: &MonitorConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> ProbeResult {
        match self.client.get(url).send().await {
            Ok(response) => ProbeResult::status(response.status().as_u16()),
            Err(e) => {
                let description = describe_transport_error(e);
                tracing::debug!(url = %url, error = %description, "Probe request failed");
                ProbeResult::transport(description)
            }
        }
    }
}

/// Flatten a request error and its cause chain, leaving out the URL.
fn describe_transport_error(error: reqwest::Error) -> String {
    let error = error.without_url();
    let mut description = error.to_string();
    let mut source = std::error::Error::source(&error);
    while let Some(cause) = source {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        source = cause.source();
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_2xx_is_ok() {
        assert!(ProbeResult::status(200).is_ok());
        assert!(ProbeResult::status(204).is_ok());
        assert!(ProbeResult::status(299).is_ok());
        assert!(!ProbeResult::status(199).is_ok());
        assert!(!ProbeResult::status(301).is_ok());
        assert!(!ProbeResult::status(404).is_ok());
        assert!(!ProbeResult::status(503).is_ok());
        assert!(!ProbeResult::transport("connection refused").is_ok());
    }

    #[test]
    fn test_detail_display() {
        assert_eq!(ProbeResult::status(503).detail.to_string(), "503");
        assert_eq!(
            ProbeResult::transport("dns error").detail.to_string(),
            "dns error"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_failure() {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .no_proxy()
            .build()
            .unwrap();
        let prober = HttpProber::with_client(client);
        let result = prober.probe("http://127.0.0.1:9/health").await;
        assert!(matches!(result.detail, ProbeDetail::Transport(_)));
        assert!(!result.is_ok());
    }
}
