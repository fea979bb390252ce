use blotter_stats::{bucket_sample, percentile, HistogramConfig, YearCursor};
use proptest::prelude::*;

proptest! {
    #[test]
    fn densities_sum_to_one_for_any_positive_sample(
        sample in prop::collection::vec(1.0_f64..1_000_000.0, 1..200),
    ) {
        let histogram = bucket_sample(&sample, &HistogramConfig::default())
            .expect("positive samples always bin");
        let total: f64 = histogram.bins.iter().map(|b| b.density).sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
        let counted: usize = histogram.bins.iter().map(|b| b.count).sum();
        prop_assert_eq!(counted, sample.len(), "every element lands in a bin");
    }

    #[test]
    fn axis_ceiling_always_covers_the_tallest_bin(
        sample in prop::collection::vec(1.0_f64..100_000.0, 1..100),
    ) {
        let histogram = bucket_sample(&sample, &HistogramConfig::default())
            .expect("positive samples always bin");
        prop_assert!(histogram.axis_ceiling >= histogram.max_density - 1e-9);
        prop_assert!(histogram.axis_ceiling >= 0.5);
    }

    #[test]
    fn percentile_matches_the_strict_count_formula(
        sample in prop::collection::vec(0.0_f64..1_000_000.0, 1..200),
        target in 0.0_f64..1_000_000.0,
    ) {
        let below = sample.iter().filter(|v| **v < target).count();
        let raw = below as f64 / sample.len() as f64 * 100.0;
        let expected = (raw * 10.0).round() / 10.0;
        prop_assert_eq!(percentile(&sample, target), expected);
    }

    #[test]
    fn percentile_is_bounded(
        sample in prop::collection::vec(0.0_f64..1_000_000.0, 1..200),
        target in -1_000.0_f64..2_000_000.0,
    ) {
        let p = percentile(&sample, target);
        prop_assert!((0.0..=100.0).contains(&p));
    }

    #[test]
    fn year_stepping_never_escapes_bounds(
        len in 1_usize..12,
        steps in prop::collection::vec(any::<bool>(), 0..40),
    ) {
        let years: Vec<i32> = (0..len as i32).map(|i| 2010 + i).collect();
        let mut cursor = YearCursor::new(years).expect("non-empty");
        for forward in steps {
            let result = if forward { cursor.next() } else { cursor.prev() };
            if let Ok(index) = result {
                prop_assert!(index < len);
            }
            prop_assert!(cursor.index() < len);
        }
    }
}
