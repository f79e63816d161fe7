//! Periodic health polling.
//!
//! # Responsibilities
//! - Sweep every configured service, one at a time
//! - Feed probe results to the tracker
//! - Forward confirmed transitions to the notifier
//! - Publish the tracker state after each sweep

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::broadcast;
use tokio::time;

use crate::health::board::StatusBoard;
use crate::health::probe::Prober;
use crate::health::state::Transition;
use crate::health::tracker::HealthTracker;
use crate::notify::Notifier;
use crate::observability::metrics;

pub struct HealthPoller {
    tracker: HealthTracker,
    prober: Arc<dyn Prober>,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    board: Arc<StatusBoard>,
}

impl HealthPoller {
    pub fn new(
        tracker: HealthTracker,
        prober: Arc<dyn Prober>,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
    ) -> Self {
        let board = Arc::new(StatusBoard::new());
        board.publish(tracker.snapshot());

        Self {
            tracker,
            prober,
            notifier,
            interval,
            board,
        }
    }

    /// Board the poller publishes to after every sweep.
    pub fn board(&self) -> Arc<StatusBoard> {
        self.board.clone()
    }

    pub fn tracker(&self) -> &HealthTracker {
        &self.tracker
    }

    /// Sweep, sleep, repeat until shutdown is signalled.
    ///
    /// A sweep in progress is always completed before the signal is seen.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            services = self.tracker.len(),
            interval_secs = self.interval.as_secs(),
            anomaly_threshold = self.tracker.threshold(),
            "Health poller starting"
        );

        loop {
            self.sweep().await;

            tokio::select! {
                _ = time::sleep(self.interval) => {}
                _ = shutdown.recv() => {
                    tracing::info!("Health poller received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    /// Probe every service once, in configuration order.
    ///
    /// Returns the transitions that fired during this sweep.
    pub async fn sweep(&mut self) -> Vec<Transition> {
        let targets: Vec<(String, String)> = self
            .tracker
            .services()
            .map(|(name, url)| (name.to_string(), url.to_string()))
            .collect();

        let mut transitions = Vec::new();
        for (name, url) in targets {
            let started = Instant::now();
            let result = self.prober.probe(&url).await;
            metrics::record_probe(&name, result.is_ok(), started.elapsed());

            let Some(transition) = self.tracker.observe(&name, &result) else {
                continue;
            };

            metrics::record_transition(&transition.service, transition.status);
            if let Err(e) = self
                .notifier
                .broadcast(&transition.message, &transition.service, transition.status)
                .await
            {
                tracing::error!(
                    service = %transition.service,
                    status = %transition.status,
                    error = %e,
                    "Failed to broadcast transition"
                );
                metrics::record_notify_failure(&transition.service);
            }
            transitions.push(transition);
        }

        let snapshot = self.tracker.snapshot();
        for service in &snapshot {
            metrics::record_service_health(&service.name, service.status);
        }
        self.board.publish(snapshot);

        transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::probe::ProbeResult;
    use crate::health::state::HealthStatus;
    use crate::notify::NotifyError;
    use async_trait::async_trait;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    /// Replays scripted status codes per URL; 200 once a script runs out.
    #[derive(Default)]
    struct ScriptedProber {
        scripts: Mutex<HashMap<String, VecDeque<u16>>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedProber {
        fn script(self, url: &str, codes: &[u16]) -> Self {
            self.scripts
                .lock()
                .unwrap()
                .insert(url.to_string(), codes.iter().copied().collect());
            self
        }
    }

    #[async_trait]
    impl Prober for ScriptedProber {
        async fn probe(&self, url: &str) -> ProbeResult {
            self.calls.lock().unwrap().push(url.to_string());
            let code = self
                .scripts
                .lock()
                .unwrap()
                .get_mut(url)
                .and_then(|codes| codes.pop_front())
                .unwrap_or(200);
            ProbeResult::status(code)
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<(String, String, HealthStatus)>>,
        fail: bool,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn broadcast(
            &self,
            message: &str,
            service: &str,
            status: HealthStatus,
        ) -> Result<(), NotifyError> {
            self.sent
                .lock()
                .unwrap()
                .push((message.to_string(), service.to_string(), status));
            if self.fail {
                return Err(NotifyError::Partial { delivered: 0, total: 1 });
            }
            Ok(())
        }
    }

    fn poller(
        threshold: u32,
        prober: Arc<ScriptedProber>,
        notifier: Arc<RecordingNotifier>,
    ) -> HealthPoller {
        let tracker = HealthTracker::new(
            vec![
                ("api".to_string(), "http://api".to_string()),
                ("web".to_string(), "http://web".to_string()),
            ],
            threshold,
        );
        HealthPoller::new(tracker, prober, notifier, Duration::from_millis(10))
    }

    #[tokio::test]
    async fn test_sweep_probes_in_order_and_notifies() {
        let prober = Arc::new(ScriptedProber::default().script("http://web", &[500, 500, 200]));
        let notifier = Arc::new(RecordingNotifier::default());
        let mut poller = poller(2, prober.clone(), notifier.clone());

        assert!(poller.sweep().await.is_empty());
        let fired = poller.sweep().await;
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].service, "web");
        assert_eq!(fired[0].status, HealthStatus::Down);

        assert_eq!(
            *prober.calls.lock().unwrap(),
            vec!["http://api", "http://web", "http://api", "http://web"]
        );
        assert_eq!(
            *notifier.sent.lock().unwrap(),
            vec![(
                "web is down, received 500 trying to access http://web".to_string(),
                "web".to_string(),
                HealthStatus::Down
            )]
        );
        assert_eq!(poller.board().down(), vec!["web".to_string()]);

        // One good probe is not enough to recover with threshold 2.
        assert!(poller.sweep().await.is_empty());
        let fired = poller.sweep().await;
        assert_eq!(fired[0].status, HealthStatus::Up);
        assert!(poller.board().down().is_empty());
    }

    #[tokio::test]
    async fn test_notifier_failure_does_not_stop_sweep() {
        let prober = Arc::new(
            ScriptedProber::default()
                .script("http://api", &[503])
                .script("http://web", &[503]),
        );
        let notifier = Arc::new(RecordingNotifier {
            fail: true,
            ..Default::default()
        });
        let mut poller = poller(1, prober, notifier.clone());

        let fired = poller.sweep().await;
        assert_eq!(fired.len(), 2);
        assert_eq!(notifier.sent.lock().unwrap().len(), 2);
        assert!(poller.tracker().state("api").unwrap().is_in_error);
        assert!(poller.tracker().state("web").unwrap().is_in_error);
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown() {
        let prober = Arc::new(ScriptedProber::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let poller = poller(1, prober.clone(), notifier);

        let (tx, rx) = broadcast::channel(1);
        let handle = tokio::spawn(poller.run(rx));

        time::sleep(Duration::from_millis(50)).await;
        tx.send(()).unwrap();
        time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("poller did not stop")
            .unwrap();

        assert!(prober.calls.lock().unwrap().len() >= 2);
    }
}
