// Sampler and clamping property tests
// Exercises the invariants every valid (max_n, steps) pair must satisfy

use algobench::{generate_sizes, ClampedMaxN, ClampedSteps, SAMPLE_FLOOR};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sampler_returns_exactly_steps_values(
        max_n in 100usize..=20_000,
        steps in 4usize..=30,
    ) {
        let sizes = generate_sizes(max_n, steps);
        prop_assert_eq!(sizes.len(), steps);
    }

    #[test]
    fn sampler_is_non_decreasing(
        max_n in 100usize..=20_000,
        steps in 4usize..=30,
    ) {
        let sizes = generate_sizes(max_n, steps);
        prop_assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn sampler_spans_floor_to_max(
        max_n in 100usize..=20_000,
        steps in 4usize..=30,
    ) {
        let sizes = generate_sizes(max_n, steps);
        prop_assert_eq!(sizes[0], SAMPLE_FLOOR);
        prop_assert_eq!(*sizes.last().unwrap(), max_n);
    }

    #[test]
    fn max_n_clamp_always_lands_in_range(raw in i64::MIN..=i64::MAX) {
        let clamped = ClampedMaxN::new(raw).get();
        prop_assert!((ClampedMaxN::MIN..=ClampedMaxN::MAX).contains(&clamped));
    }

    #[test]
    fn steps_clamp_always_lands_in_range(raw in i64::MIN..=i64::MAX) {
        let clamped = ClampedSteps::new(raw).get();
        prop_assert!((ClampedSteps::MIN..=ClampedSteps::MAX).contains(&clamped));
    }
}

#[test]
fn clamping_boundary_cases() {
    assert_eq!(ClampedMaxN::new(50).get(), 100);
    assert_eq!(ClampedMaxN::new(999_999).get(), 20_000);
    assert_eq!(ClampedSteps::new(1).get(), 4);
    assert_eq!(ClampedSteps::new(100).get(), 30);
}

#[test]
fn in_range_values_pass_through_unchanged() {
    assert_eq!(ClampedMaxN::new(100).get(), 100);
    assert_eq!(ClampedMaxN::new(20_000).get(), 20_000);
    assert_eq!(ClampedSteps::new(4).get(), 4);
    assert_eq!(ClampedSteps::new(30).get(), 30);
}
