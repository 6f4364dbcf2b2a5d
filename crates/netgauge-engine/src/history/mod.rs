//! Bounded per-(metric kind, entity) history of observed values.
//!
//! Windows are created lazily on first `record` and live for the process
//! lifetime. Nothing is persisted: a restart starts with empty baselines.

mod window;

use std::collections::HashMap;

use netgauge_core::MetricKind;

pub use window::HistoryWindow;

/// All history windows, keyed by metric kind then entity key.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    capacity: usize,
    windows: HashMap<MetricKind, HashMap<String, HistoryWindow>>,
}

impl HistoryStore {
    /// Create a store whose windows hold at most `capacity` values.
    /// A zero capacity is raised to one; configuration rejects zero earlier.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            windows: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert `value` at the front of the window for `(kind, key)`, creating
    /// it if needed, and drop values beyond capacity.
    pub fn record(&mut self, kind: MetricKind, key: &str, value: f64) {
        let capacity = self.capacity;
        let by_key = self.windows.entry(kind).or_default();
        match by_key.get_mut(key) {
            Some(window) => window.push(value),
            None => {
                let mut window = HistoryWindow::new(capacity);
                window.push(value);
                by_key.insert(key.to_string(), window);
            }
        }
    }

    /// Record `value` and return the window average including it.
    pub fn record_and_average(&mut self, kind: MetricKind, key: &str, value: f64) -> f64 {
        self.record(kind, key, value);
        self.average(kind, key).unwrap_or(value)
    }

    /// Arithmetic mean of the window, `None` if it does not exist.
    pub fn average(&self, kind: MetricKind, key: &str) -> Option<f64> {
        self.window(kind, key).and_then(HistoryWindow::average)
    }

    /// Most recent value, `None` if the window does not exist.
    pub fn latest(&self, kind: MetricKind, key: &str) -> Option<f64> {
        self.window(kind, key).and_then(HistoryWindow::latest)
    }

    pub fn window(&self, kind: MetricKind, key: &str) -> Option<&HistoryWindow> {
        self.windows.get(&kind).and_then(|by_key| by_key.get(key))
    }

    /// Number of windows tracked for one metric kind.
    pub fn entities(&self, kind: MetricKind) -> usize {
        self.windows.get(&kind).map_or(0, HashMap::len)
    }

    /// Total number of windows across all kinds.
    pub fn len(&self) -> usize {
        self.windows.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_window_reads_as_none() {
        let store = HistoryStore::new(4);
        assert_eq!(store.average(MetricKind::Origins, "192.0.2.0/24"), None);
        assert_eq!(store.latest(MetricKind::Origins, "192.0.2.0/24"), None);
    }

    #[test]
    fn kinds_do_not_share_windows() {
        let mut store = HistoryStore::new(4);
        store.record(MetricKind::InvalidRoa, "repo", 3.0);
        store.record(MetricKind::TotalRoa, "repo", 300.0);
        assert_eq!(store.latest(MetricKind::InvalidRoa, "repo"), Some(3.0));
        assert_eq!(store.latest(MetricKind::TotalRoa, "repo"), Some(300.0));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut store = HistoryStore::new(0);
        store.record(MetricKind::Dfz, "v4", 1.0);
        store.record(MetricKind::Dfz, "v4", 2.0);
        assert_eq!(store.window(MetricKind::Dfz, "v4").unwrap().len(), 1);
    }
}
