//! Property tests for classification, aggregation and generation

mod common;

use proptest::prelude::*;

use aquaguard_core::{
    classify,
    constants::{READING_VALUE_MAX, READING_VALUE_MIN},
    summarize, ReadingSource, SafetyVerdict, Status, Thresholds,
};

use common::{deterministic_generator, series_with_statuses};

fn any_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Good),
        Just(Status::Moderate),
        Just(Status::Contaminated),
    ]
}

proptest! {
    #[test]
    fn classify_matches_first_strict_rule(
        value in -1000.0f32..2000.0,
        good_max in 0.0f32..600.0,
        moderate_max in 0.0f32..600.0,
    ) {
        let status = classify(value, good_max, moderate_max);
        let expected = if value < good_max {
            Status::Good
        } else if value < moderate_max {
            Status::Moderate
        } else {
            Status::Contaminated
        };
        prop_assert_eq!(status, expected);
        prop_assert_eq!(classify(value, good_max, moderate_max), status);
    }

    #[test]
    fn boundaries_belong_to_the_tier_above(
        good_max in 0.0f32..300.0,
        gap in 1.0f32..300.0,
    ) {
        let moderate_max = good_max + gap;
        prop_assert_eq!(classify(good_max, good_max, moderate_max), Status::Moderate);
        prop_assert_eq!(classify(moderate_max, good_max, moderate_max), Status::Contaminated);
    }

    #[test]
    fn moderate_unreachable_when_thresholds_inverted(
        value in -1000.0f32..2000.0,
        moderate_max in 0.0f32..300.0,
        gap in 0.0f32..300.0,
    ) {
        let thresholds = Thresholds::new(moderate_max + gap, moderate_max);
        prop_assert_ne!(thresholds.classify(value), Status::Moderate);
    }

    #[test]
    fn counts_sum_to_series_length(
        statuses in prop::collection::vec(any_status(), 1..200),
    ) {
        let summary = summarize(&series_with_statuses(&statuses)).unwrap();
        prop_assert_eq!(summary.category_counts.total(), statuses.len());
        for (_, count) in summary.category_counts.iter() {
            prop_assert!(count > 0);
        }
    }

    #[test]
    fn verdict_is_safe_iff_latest_not_contaminated(
        statuses in prop::collection::vec(any_status(), 1..50),
    ) {
        let summary = summarize(&series_with_statuses(&statuses)).unwrap();
        let latest = *statuses.last().unwrap();
        prop_assert_eq!(summary.latest_status, latest);
        prop_assert_eq!(
            summary.safety_verdict == SafetyVerdict::Safe,
            latest != Status::Contaminated
        );
    }

    #[test]
    fn generated_series_has_length_order_and_range(
        count in 1usize..300,
        seed in any::<u64>(),
    ) {
        let readings = deterministic_generator(seed).generate(count).unwrap();

        prop_assert_eq!(readings.len(), count);
        prop_assert!(readings.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        for r in &readings {
            prop_assert!(r.value >= READING_VALUE_MIN as f32);
            prop_assert!(r.value <= READING_VALUE_MAX as f32);
        }
    }
}
