use std::f64::consts::TAU;

use microchart::core::project_donut_segments;
use proptest::prelude::*;

proptest! {
    #[test]
    fn segments_tile_the_full_turn(
        values in proptest::collection::vec(0.001f64..10_000.0, 1..12),
        rotation in -TAU..TAU
    ) {
        let segments = project_donut_segments(&values, rotation).expect("project");
        prop_assert_eq!(segments.len(), values.len());

        prop_assert!((segments[0].start_angle - rotation).abs() <= 1e-12);
        prop_assert_eq!(segments[segments.len() - 1].end_angle, rotation + TAU);

        for pair in segments.windows(2) {
            prop_assert!((pair[0].end_angle - pair[1].start_angle).abs() <= 1e-12);
        }
    }

    #[test]
    fn sweeps_are_proportional_to_values(
        values in proptest::collection::vec(0.001f64..10_000.0, 1..12)
    ) {
        let segments = project_donut_segments(&values, 0.0).expect("project");
        let total: f64 = values.iter().sum();

        for (value, segment) in values.iter().zip(&segments) {
            let expected = TAU * value / total;
            prop_assert!((segment.sweep() - expected).abs() <= 1e-8);
            prop_assert!(segment.sweep() >= 0.0);
        }
    }
}
