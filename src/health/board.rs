//! Latest-sweep status shared with readers outside the poller task.

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::health::state::{HealthStatus, ServiceSnapshot};

/// Lock-free holder of the most recent tracker snapshot.
///
/// The poller is the only writer; the admin API reads.
#[derive(Debug, Default)]
pub struct StatusBoard {
    current: ArcSwap<Vec<ServiceSnapshot>>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, snapshot: Vec<ServiceSnapshot>) {
        self.current.store(Arc::new(snapshot));
    }

    pub fn load(&self) -> Arc<Vec<ServiceSnapshot>> {
        self.current.load_full()
    }

    /// Names of services currently believed down.
    pub fn down(&self) -> Vec<String> {
        self.current
            .load()
            .iter()
            .filter(|s| s.status == HealthStatus::Down)
            .map(|s| s.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_replaces_snapshot() {
        let board = StatusBoard::new();
        assert!(board.load().is_empty());

        board.publish(vec![
            ServiceSnapshot {
                name: "api".into(),
                url: "http://api".into(),
                status: HealthStatus::Down,
                anomaly_streak: 0,
            },
            ServiceSnapshot {
                name: "web".into(),
                url: "http://web".into(),
                status: HealthStatus::Up,
                anomaly_streak: 1,
            },
        ]);
        assert_eq!(board.load().len(), 2);
        assert_eq!(board.down(), vec!["api".to_string()]);

        board.publish(Vec::new());
        assert!(board.down().is_empty());
    }
}
