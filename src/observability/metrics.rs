//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define watchdog metrics (probes, latency, health, transitions)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `healthwatch_probes_total` (counter): probes by service, outcome
//! - `healthwatch_probe_duration_seconds` (histogram): probe latency
//! - `healthwatch_service_up` (gauge): 1=believed up, 0=believed down
//! - `healthwatch_transitions_total` (counter): confirmed flips by service, status
//! - `healthwatch_notify_failures_total` (counter): failed broadcasts by service
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Labels carry the configured service name

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Duration;

use crate::health::state::HealthStatus;

/// Install the Prometheus recorder and its HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_probe(service: &str, ok: bool, elapsed: Duration) {
    let outcome = if ok { "ok" } else { "fail" };
    counter!(
        "healthwatch_probes_total",
        "service" => service.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    histogram!("healthwatch_probe_duration_seconds", "service" => service.to_string())
        .record(elapsed.as_secs_f64());
}

pub fn record_service_health(service: &str, status: HealthStatus) {
    let value = match status {
        HealthStatus::Up => 1.0,
        HealthStatus::Down => 0.0,
    };
    gauge!("healthwatch_service_up", "service" => service.to_string()).set(value);
}

pub fn record_transition(service: &str, status: HealthStatus) {
    counter!(
        "healthwatch_transitions_total",
        "service" => service.to_string(),
        "status" => status.as_str()
    )
    .increment(1);
}

pub fn record_notify_failure(service: &str) {
    counter!("healthwatch_notify_failures_total", "service" => service.to_string()).increment(1);
}
