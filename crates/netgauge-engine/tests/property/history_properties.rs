use netgauge_core::MetricKind;
use netgauge_engine::HistoryStore;
use proptest::prelude::*;

proptest! {
    /// For any sequence of records the window never exceeds capacity and
    /// holds the most recent values, newest first.
    #[test]
    fn window_is_bounded_and_newest_first(
        capacity in 1usize..12,
        values in prop::collection::vec(-1.0e6f64..1.0e6, 1..64),
    ) {
        let mut store = HistoryStore::new(capacity);
        for v in &values {
            store.record(MetricKind::Origins, "key", *v);
        }
        let window = store.window(MetricKind::Origins, "key").unwrap().to_vec();
        prop_assert!(window.len() <= capacity);
        let expected: Vec<f64> = values.iter().rev().take(capacity).copied().collect();
        prop_assert_eq!(window, expected);
    }

    /// The average of a freshly created window equals its only element.
    #[test]
    fn fresh_window_average_is_its_value(v in -1.0e9f64..1.0e9) {
        let mut store = HistoryStore::new(4);
        let avg = store.record_and_average(MetricKind::Dfz, "v4", v);
        prop_assert_eq!(avg, v);
    }

    /// The average always lies between the window's min and max.
    #[test]
    fn average_within_window_bounds(values in prop::collection::vec(0.0f64..1.0e6, 1..20)) {
        let mut store = HistoryStore::new(8);
        for v in &values {
            store.record(MetricKind::Prefixes, "64500", *v);
        }
        let window = store.window(MetricKind::Prefixes, "64500").unwrap().to_vec();
        let avg = store.average(MetricKind::Prefixes, "64500").unwrap();
        let min = window.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = window.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(avg >= min - 1e-6 && avg <= max + 1e-6);
    }
}
