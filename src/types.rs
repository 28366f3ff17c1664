// Validated Types
// Strongly-typed wrappers that enforce the request invariants at construction
// time, so downstream components never see an out-of-range size or step count.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound for sampled input sizes; every sample run starts here.
pub const SAMPLE_FLOOR: usize = 10;

/// The fixed set of algorithm workloads the harness can time.
///
/// Selection is an explicit tagged enum rather than comparing function
/// references, so the input-shape dispatch in the harness is exhaustive
/// and checked by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// O(n) pass over a generated vector to find an element
    LinearScan,
    /// O(n²) comparison sort of internally generated random data
    BubbleSort,
    /// O(log n) search against a pre-sorted array with a known-present target
    BinarySearch,
    /// O(n²) generic double iteration
    NestedLoop,
}

/// Query-string aliases accepted for each variant. Static configuration
/// data, not logic. The "exponential" alias intentionally maps to the
/// O(n²) nested-loop workload, preserving the original behavior.
pub const ALGORITHM_ALIASES: &[(&str, Algorithm)] = &[
    ("linear", Algorithm::LinearScan),
    ("linearsearch", Algorithm::LinearScan),
    ("bubble", Algorithm::BubbleSort),
    ("bubblesort", Algorithm::BubbleSort),
    ("bubble_sort", Algorithm::BubbleSort),
    ("binary", Algorithm::BinarySearch),
    ("binarysearch", Algorithm::BinarySearch),
    ("nested", Algorithm::NestedLoop),
    ("nestedloops", Algorithm::NestedLoop),
    ("exponential", Algorithm::NestedLoop),
];

/// Error for algorithm names that match no alias. Carries the full alias
/// list so the caller can surface the supported identifiers verbatim.
#[derive(Debug, thiserror::Error)]
#[error("Unknown algorithm '{name}'. Supported: {supported}")]
pub struct UnknownAlgorithm {
    pub name: String,
    pub supported: String,
}

impl Algorithm {
    /// Resolve a query-string name to a variant.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse(name: &str) -> Result<Self, UnknownAlgorithm> {
        let normalized = name.trim().to_lowercase();
        ALGORITHM_ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map(|(_, algorithm)| *algorithm)
            .ok_or_else(|| UnknownAlgorithm {
                name: name.trim().to_string(),
                supported: Self::supported_names().join(", "),
            })
    }

    /// All accepted query-string identifiers, in declaration order.
    pub fn supported_names() -> Vec<&'static str> {
        ALGORITHM_ALIASES.iter().map(|(alias, _)| *alias).collect()
    }

    /// Human-readable name used in chart titles and persisted records.
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::LinearScan => "Linear Search",
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::NestedLoop => "Nested Loops",
        }
    }

    /// Asymptotic class label stored alongside persisted runs.
    pub fn complexity_label(&self) -> &'static str {
        match self {
            Algorithm::LinearScan => "O(n)",
            Algorithm::BinarySearch => "O(log n)",
            Algorithm::BubbleSort | Algorithm::NestedLoop => "O(n²)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A maximum input size clamped to the range the server is willing to run.
///
/// Out-of-range values are silently constrained to the nearest boundary
/// rather than rejected; oversized requests would otherwise tie up the
/// handling thread for minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClampedMaxN {
    inner: usize,
}

impl ClampedMaxN {
    pub const MIN: usize = 100;
    pub const MAX: usize = 20_000;

    pub fn new(raw: i64) -> Self {
        let clamped = raw.clamp(Self::MIN as i64, Self::MAX as i64) as usize;
        Self { inner: clamped }
    }

    pub fn get(&self) -> usize {
        self.inner
    }
}

/// A sample step count clamped to [4, 30].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClampedSteps {
    inner: usize,
}

impl ClampedSteps {
    pub const MIN: usize = 4;
    pub const MAX: usize = 30;

    pub fn new(raw: i64) -> Self {
        let clamped = raw.clamp(Self::MIN as i64, Self::MAX as i64) as usize;
        Self { inner: clamped }
    }

    pub fn get(&self) -> usize {
        self.inner
    }
}

/// One timing observation: a sampled input size and the wall-clock seconds
/// a single invocation at that size took.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub size: usize,
    pub seconds: f64,
}
