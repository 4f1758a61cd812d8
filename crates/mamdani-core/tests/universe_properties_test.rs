use mamdani_core::Universe;
use proptest::prelude::*;

proptest! {
    #[test]
    fn sample_points_span_the_universe(
        min in -1000.0f64..1000.0,
        span in 0.01f64..500.0,
        divisions in 1u32..2000,
    ) {
        let max = min + span;
        let step = span / divisions as f64;
        let universe = Universe::new(min, max, step).unwrap();
        let points = universe.points();

        prop_assert_eq!(points[0], min);
        prop_assert_eq!(*points.last().unwrap(), max);
        for pair in points.windows(2) {
            prop_assert!(pair[1] > pair[0]);
            prop_assert!(pair[1] - pair[0] <= step * (1.0 + 1e-6));
        }
    }

    #[test]
    fn clamp_stays_within_bounds(x in -1e6f64..1e6) {
        let universe = Universe::new(-5.0, 5.0, 1.0).unwrap();
        let clamped = universe.clamp(x);
        prop_assert!(universe.contains(clamped));
        if universe.contains(x) {
            prop_assert_eq!(clamped, x);
        }
    }
}
