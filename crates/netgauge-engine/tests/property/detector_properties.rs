use netgauge_engine::detectors::{
    FailureRatioDetector, PercentageDropDetector, SymmetricPercentageDetector,
};
use proptest::prelude::*;

proptest! {
    /// Failure ratio is total: never NaN, always within [0, 100] when
    /// failed <= total, and zero for an empty population.
    #[test]
    fn failure_ratio_is_total(total in 0u64..100_000, frac in 0.0f64..=1.0) {
        let failed = (total as f64 * frac).floor() as u64;
        let pct = FailureRatioDetector::percent_failed(failed, total);
        prop_assert!(pct.is_finite());
        prop_assert!((0.0..=100.0).contains(&pct));
        if total == 0 {
            prop_assert_eq!(pct, 0.0);
        }
    }

    /// A zero baseline never triggers a percentage drop.
    #[test]
    fn zero_baseline_never_drops(current in 0.0f64..1.0e9, threshold in 0.0f64..100.0) {
        let detector = PercentageDropDetector::new(threshold);
        prop_assert!(detector.triggers(current, 0.0).is_none());
    }

    /// A zero baseline reads as exactly 100 percent of average.
    #[test]
    fn zero_baseline_is_neutral_for_symmetric(current in 0.0f64..1.0e9) {
        prop_assert_eq!(SymmetricPercentageDetector::percent_of_average(current, 0.0), 100.0);
    }

    /// An unchanged value never drops.
    #[test]
    fn steady_value_never_drops(v in 1.0f64..1.0e9, threshold in 0.0f64..100.0) {
        let detector = PercentageDropDetector::new(threshold);
        prop_assert!(detector.triggers(v, v).is_none());
    }
}
