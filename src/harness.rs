// Timer Harness
// Runs one invocation of a workload at each sampled size, bracketed by
// monotonic clock reads. Input preparation always happens outside the
// timed region so setup cost never pollutes a measurement.

use std::hint::black_box;
use std::time::Instant;

use rand::Rng;

use crate::algorithms;
use crate::observability::{record_metric, MetricType};
use crate::sampler::generate_sizes;
use crate::types::{Algorithm, Measurement};

/// A workload together with the input it was prepared with.
///
/// One variant per algorithm, so a prepared input can only ever be run
/// against the workload it was built for; there is no separate
/// (algorithm, input) pair to keep consistent.
#[derive(Debug, Clone)]
pub enum PreparedInput {
    /// Runs on the size alone.
    LinearScan { n: usize },
    /// Runs on the size alone; data generated inside the workload.
    BubbleSort { n: usize },
    /// Pre-sorted array with a known-present target.
    BinarySearch { values: Vec<i64>, target: i64 },
    /// Runs on the size alone.
    NestedLoop { n: usize },
}

/// Sizes and per-size durations for one run, in sampler order.
#[derive(Debug, Clone)]
pub struct MeasurementSeries {
    pub sizes: Vec<usize>,
    pub durations: Vec<f64>,
}

impl MeasurementSeries {
    /// Pair up sizes and durations as [`Measurement`] observations.
    pub fn measurements(&self) -> impl Iterator<Item = Measurement> + '_ {
        self.sizes
            .iter()
            .zip(self.durations.iter())
            .map(|(&size, &seconds)| Measurement { size, seconds })
    }
}

/// Build the input `algorithm` needs at size `n`.
///
/// Binary search gets a sorted array of `n` values drawn from a large
/// range to keep duplicates rare, with the last (largest) element as a
/// target guaranteed to be present. Everything else runs on size alone.
pub fn prepare_input(algorithm: Algorithm, n: usize) -> PreparedInput {
    match algorithm {
        Algorithm::BinarySearch => {
            let mut rng = rand::thread_rng();
            let mut values: Vec<i64> = (0..n).map(|_| rng.gen_range(0..100_000)).collect();
            values.sort_unstable();
            let target = values.last().copied().unwrap_or(0);
            PreparedInput::BinarySearch { values, target }
        }
        Algorithm::LinearScan => PreparedInput::LinearScan { n },
        Algorithm::BubbleSort => PreparedInput::BubbleSort { n },
        Algorithm::NestedLoop => PreparedInput::NestedLoop { n },
    }
}

/// Execute one invocation of a prepared workload.
///
/// `black_box` keeps the optimizer from eliding workloads whose results
/// are otherwise unused.
pub fn run_prepared(input: &PreparedInput) {
    match input {
        PreparedInput::LinearScan { n } => {
            black_box(algorithms::linear_scan(*n));
        }
        PreparedInput::BubbleSort { n } => {
            black_box(algorithms::bubble_sort(*n));
        }
        PreparedInput::BinarySearch { values, target } => {
            black_box(algorithms::binary_search(values, *target));
        }
        PreparedInput::NestedLoop { n } => {
            black_box(algorithms::nested_loops(*n));
        }
    }
}

/// Measure `algorithm` once at each sampled size up to `max_n`.
///
/// The caller guarantees `max_n >= 100` and `steps in [4, 30]` (see
/// [`crate::types::ClampedMaxN`] and [`crate::types::ClampedSteps`]); the
/// algorithm reference is already resolved, so no error paths exist here.
pub fn measure(algorithm: Algorithm, max_n: usize, steps: usize) -> MeasurementSeries {
    let sizes = generate_sizes(max_n, steps);
    let mut durations = Vec::with_capacity(sizes.len());

    for &n in &sizes {
        let input = prepare_input(algorithm, n);

        let start = Instant::now();
        run_prepared(&input);
        let elapsed = start.elapsed();

        record_metric(MetricType::Timer {
            name: "harness.sample",
            duration: elapsed,
        });

        // Instant is monotonic, so this is never negative
        durations.push(elapsed.as_secs_f64());
    }

    MeasurementSeries { sizes, durations }
}
