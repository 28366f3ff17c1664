// Timer Harness Integration Tests
// Verifies the measurement contract end to end on the library surface:
// parallel sequences, non-negative durations, and correct input setup.

use algobench::{
    algorithms, harness, measure, prepare_input, Algorithm, ClampedMaxN, ClampedSteps,
    PreparedInput,
};
use pretty_assertions::assert_eq;

#[test]
fn measure_produces_one_duration_per_size() {
    for algorithm in [
        Algorithm::LinearScan,
        Algorithm::BinarySearch,
        Algorithm::NestedLoop,
    ] {
        let series = measure(algorithm, 500, 5);
        assert_eq!(series.sizes.len(), 5);
        assert_eq!(series.durations.len(), 5);
        assert!(
            series.durations.iter().all(|&d| d >= 0.0),
            "negative duration for {algorithm:?}"
        );
    }
}

#[test]
fn end_to_end_binary_run_spans_requested_range() {
    // algo=binary, max_n=1000, steps=5
    let max_n = ClampedMaxN::new(1000);
    let steps = ClampedSteps::new(5);
    let series = measure(Algorithm::BinarySearch, max_n.get(), steps.get());

    assert_eq!(series.sizes.first().copied(), Some(10));
    assert_eq!(series.sizes.last().copied(), Some(1000));
    assert_eq!(series.sizes.len(), series.durations.len());

    let measurements: Vec<_> = series.measurements().collect();
    assert_eq!(measurements.len(), 5);
    for (i, m) in measurements.iter().enumerate() {
        assert_eq!(m.size, series.sizes[i]);
        assert!(m.seconds >= 0.0);
    }
}

#[test]
fn binary_search_setup_produces_a_findable_target() {
    for n in [10, 100, 1000] {
        match prepare_input(Algorithm::BinarySearch, n) {
            PreparedInput::BinarySearch { values, target } => {
                let index = algorithms::binary_search(&values, target)
                    .unwrap_or_else(|| panic!("target missing from prepared array of {n}"));
                assert_eq!(values[index], target);
            }
            other => panic!("binary search should need a sorted array, got {other:?}"),
        }
    }
}

#[test]
fn binary_search_logic_on_known_array() {
    let arr = [1, 3, 5, 7, 9];
    assert_eq!(algorithms::binary_search(&arr, 9), Some(4));
    assert_eq!(algorithms::binary_search(&arr, 4), None);
}

#[test]
fn unknown_identifier_is_rejected_before_measurement() {
    let err = Algorithm::parse("quicksort").unwrap_err();
    for name in Algorithm::supported_names() {
        assert!(
            err.supported.contains(name),
            "supported list missing '{name}'"
        );
    }
}

#[test]
fn run_prepared_executes_every_variant() {
    for algorithm in [
        Algorithm::LinearScan,
        Algorithm::BubbleSort,
        Algorithm::BinarySearch,
        Algorithm::NestedLoop,
    ] {
        let input = prepare_input(algorithm, 50);
        // must not panic for any declared shape
        harness::run_prepared(&input);
    }
}

#[test]
fn prepared_input_carries_its_own_workload() {
    // a prepared input names the workload it was built for, so timing the
    // wrong algorithm against it is not expressible
    assert!(matches!(
        prepare_input(Algorithm::LinearScan, 50),
        PreparedInput::LinearScan { n: 50 }
    ));
    assert!(matches!(
        prepare_input(Algorithm::BubbleSort, 50),
        PreparedInput::BubbleSort { n: 50 }
    ));
    assert!(matches!(
        prepare_input(Algorithm::NestedLoop, 50),
        PreparedInput::NestedLoop { n: 50 }
    ));
    assert!(matches!(
        prepare_input(Algorithm::BinarySearch, 50),
        PreparedInput::BinarySearch { .. }
    ));
}
