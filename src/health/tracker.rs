//! Debounced health tracking.
//!
//! Holds one `ServiceHealthState` per configured service and decides, for each
//! new probe, whether enough consecutive contradicting evidence has piled up
//! to flip the service's believed health.

use std::collections::HashMap;

use crate::config::ServiceConfig;
use crate::health::probe::{ProbeDetail, ProbeResult};
use crate::health::state::{HealthStatus, ServiceHealthState, ServiceSnapshot, Transition};

#[derive(Debug)]
struct TrackedService {
    name: String,
    url: String,
    state: ServiceHealthState,
}

/// Owns the health belief of every configured service.
#[derive(Debug)]
pub struct HealthTracker {
    /// Services in configuration order.
    services: Vec<TrackedService>,
    /// Service name -> index into `services`.
    index: HashMap<String, usize>,
    anomaly_threshold: u32,
}

impl HealthTracker {
    /// Create a tracker with every service starting healthy.
    ///
    /// A threshold of 0 is treated as 1.
    pub fn new<I>(services: I, anomaly_threshold: u32) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut tracked = Vec::new();
        let mut index = HashMap::new();
        for (name, url) in services {
            if index.contains_key(&name) {
                tracing::warn!(service = %name, "Duplicate service ignored");
                continue;
            }
            index.insert(name.clone(), tracked.len());
            tracked.push(TrackedService {
                name,
                url,
                state: ServiceHealthState::new(),
            });
        }

        Self {
            services: tracked,
            index,
            anomaly_threshold: anomaly_threshold.max(1),
        }
    }

    pub fn from_config(services: &[ServiceConfig], anomaly_threshold: u32) -> Self {
        Self::new(
            services.iter().map(|s| (s.name.clone(), s.url.clone())),
            anomaly_threshold,
        )
    }

    /// Feed one probe result for `service`.
    ///
    /// Returns a `Transition` only on the probe that completes a streak of
    /// `anomaly_threshold` consecutive disagreeing observations.
    pub fn observe(&mut self, service: &str, probe: &ProbeResult) -> Option<Transition> {
        let threshold = self.anomaly_threshold;
        let Some(&idx) = self.index.get(service) else {
            tracing::warn!(service = %service, "Probe result for unknown service ignored");
            return None;
        };
        let tracked = &mut self.services[idx];

        let probe_ok = probe.is_ok();
        if !probe_ok {
            tracing::warn!(service = %tracked.name, detail = %probe.detail, "{} returned {}", tracked.name, probe.detail);
        }

        let believed_down = tracked.state.is_in_error;

        // true when belief and observation match: down + failing, or up + ok.
        if believed_down ^ probe_ok {
            tracked.state.anomaly_streak = 0;
            return None;
        }

        tracked.state.anomaly_streak += 1;
        if tracked.state.anomaly_streak < threshold {
            tracing::debug!(
                service = %tracked.name,
                streak = tracked.state.anomaly_streak,
                threshold,
                "Anomaly within debounce window"
            );
            return None;
        }

        let (status, message) = if believed_down {
            (
                HealthStatus::Up,
                format!("{} is OK, all issues resolved.", tracked.name),
            )
        } else {
            let message = match &probe.detail {
                ProbeDetail::Transport(error) => format!(
                    "{} is down, received the exception {} when trying to access {}",
                    tracked.name, error, tracked.url
                ),
                ProbeDetail::Status(code) => format!(
                    "{} is down, received {} trying to access {}",
                    tracked.name, code, tracked.url
                ),
            };
            (HealthStatus::Down, message)
        };

        tracing::info!(service = %tracked.name, status = %status, "{} was considered {}", tracked.name, status);

        tracked.state.is_in_error = !believed_down;
        tracked.state.anomaly_streak = 0;

        Some(Transition {
            service: tracked.name.clone(),
            status,
            message,
        })
    }

    pub fn state(&self, service: &str) -> Option<&ServiceHealthState> {
        self.index.get(service).map(|&idx| &self.services[idx].state)
    }

    /// (name, url) pairs in configuration order.
    pub fn services(&self) -> impl Iterator<Item = (&str, &str)> {
        self.services.iter().map(|s| (s.name.as_str(), s.url.as_str()))
    }

    pub fn snapshot(&self) -> Vec<ServiceSnapshot> {
        self.services
            .iter()
            .map(|s| ServiceSnapshot {
                name: s.name.clone(),
                url: s.url.clone(),
                status: s.state.status(),
                anomaly_streak: s.state.anomaly_streak,
            })
            .collect()
    }

    pub fn threshold(&self) -> u32 {
        self.anomaly_threshold
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
