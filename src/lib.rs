// AlgoBench - Empirical Time-Complexity Measurement Service
// Root library module

pub mod observability;
pub mod types;
pub mod sampler;
pub mod algorithms;
pub mod harness;
pub mod chart;
pub mod persistence;
pub mod http_server;

// Re-export key observability helpers
pub use observability::{init_logging_with_level, record_metric, with_trace_id, MetricType};

// Re-export validated types
pub use types::{
    Algorithm, ClampedMaxN, ClampedSteps, Measurement, UnknownAlgorithm, ALGORITHM_ALIASES,
    SAMPLE_FLOOR,
};

// Re-export the core measurement pieces
pub use harness::{measure, prepare_input, run_prepared, MeasurementSeries, PreparedInput};
pub use sampler::generate_sizes;

// Re-export rendering
pub use chart::render_chart;

// Re-export persistence
pub use persistence::{AnalysisRow, AnalysisStore, NewAnalysis, PersistenceOutcome};

// Re-export the HTTP surface
pub use http_server::{create_server, start_server};
