// HTTP REST API Server Implementation
// Provides the JSON analysis endpoint plus read access to persisted runs

use anyhow::Result;
use axum::{
    extract::{Path, Query as AxumQuery, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    chart::render_chart,
    harness,
    observability::with_trace_id,
    persistence::{AnalysisRow, AnalysisStore, NewAnalysis, PersistenceOutcome},
    types::{Algorithm, ClampedMaxN, ClampedSteps},
};

// Global server start time for uptime tracking
static SERVER_START_TIME: once_cell::sync::Lazy<Instant> = once_cell::sync::Lazy::new(Instant::now);

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    store: Option<AnalysisStore>,
}

/// Query parameters for the analyze endpoint
#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    pub algo: Option<String>,
    pub n: Option<i64>,
    pub steps: Option<i64>,
}

/// Request context echoed back with every successful analysis
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeContext {
    pub algorithm: String,
    pub max_n: usize,
    pub steps: usize,
    pub execution_time_seconds: f64,
}

/// The measured series, sizes and durations in the same order
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeData {
    pub input_sizes: Vec<usize>,
    pub times_seconds: Vec<f64>,
}

/// Response for the analyze endpoint
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub status: String,
    pub context: AnalyzeContext,
    pub data: AnalyzeData,
    pub graph_base64: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence: Option<PersistenceOutcome>,
}

/// Response listing persisted analysis records
#[derive(Debug, Serialize)]
pub struct AnalysisListResponse {
    pub count: usize,
    pub analyses: Vec<AnalysisRow>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Standard error response format for HTTP API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response with error code and message
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new("internal_server_error", message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("not_found", message)
    }
}

/// Create HTTP server with all routes configured
pub fn create_server(store: Option<AnalysisStore>) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/health", get(health_check))
        .route("/analyze", get(analyze))
        .route("/analyses", get(list_analyses))
        .route("/analyses/:id", get(get_analysis))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Start the HTTP server on the specified port
pub async fn start_server(store: Option<AnalysisStore>, port: u16) -> Result<()> {
    let app = create_server(store);
    let listener = TcpListener::bind(&format!("0.0.0.0:{port}")).await?;

    info!("AlgoBench HTTP server starting on port {}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    let uptime_seconds = SERVER_START_TIME.elapsed().as_secs();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds,
    })
}

/// Run one timing analysis: validate, measure, render, optionally persist.
///
/// Out-of-range `n` and `steps` are silently clamped; only an unknown
/// algorithm name is a client error. A persistence failure never affects
/// the measurement result already computed.
async fn analyze(
    State(state): State<AppState>,
    AxumQuery(params): AxumQuery<AnalyzeParams>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let total_timer = Instant::now();
    let started_at_ms = Utc::now().timestamp_millis();

    let algo_name = params.algo.as_deref().unwrap_or("linear");
    let algorithm = Algorithm::parse(algo_name).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
    })?;

    let max_n = ClampedMaxN::new(params.n.unwrap_or(1000));
    let steps = ClampedSteps::new(params.steps.unwrap_or(10));

    // A run is pure CPU and can take seconds at the large end, so it goes
    // to a blocking worker instead of stalling the async executor.
    let series = with_trace_id("analyze", async move {
        let series =
            tokio::task::spawn_blocking(move || harness::measure(algorithm, max_n.get(), steps.get()))
                .await?;
        Ok(series)
    })
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal_server_error(format!(
                "Measurement failed: {e:#}"
            ))),
        )
    })?;

    let svg = render_chart(algorithm.display_name(), &series.sizes, &series.durations);
    let graph_base64 = BASE64.encode(svg.as_bytes());

    let finished_at_ms = Utc::now().timestamp_millis();
    let total_seconds = total_timer.elapsed().as_secs_f64();

    let persistence = match &state.store {
        Some(store) => Some(
            store
                .save_analysis_isolated(NewAnalysis {
                    algo: algorithm.display_name(),
                    items: max_n.get() as i32,
                    steps: steps.get() as i32,
                    start_time: started_at_ms,
                    end_time: finished_at_ms,
                    total_time_ms: finished_at_ms - started_at_ms,
                    time_complexity: algorithm.complexity_label(),
                    path_to_graph: None,
                })
                .await,
        ),
        None => None,
    };

    Ok(Json(AnalyzeResponse {
        status: "success".to_string(),
        context: AnalyzeContext {
            algorithm: algorithm.display_name().to_string(),
            max_n: max_n.get(),
            steps: steps.get(),
            execution_time_seconds: round_to(total_seconds, 5),
        },
        data: AnalyzeData {
            input_sizes: series.sizes,
            times_seconds: series
                .durations
                .iter()
                .map(|&t| round_to(t, 6))
                .collect(),
        },
        graph_base64,
        persistence,
    }))
}

/// List persisted analysis records
async fn list_analyses(
    State(state): State<AppState>,
) -> Result<Json<AnalysisListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let store = require_store(&state)?;

    let analyses = store.list_analyses().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal_server_error(format!("{e:#}"))),
        )
    })?;

    Ok(Json(AnalysisListResponse {
        count: analyses.len(),
        analyses,
    }))
}

/// Fetch a single persisted analysis record by id
async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AnalysisRow>, (StatusCode, Json<ErrorResponse>)> {
    let store = require_store(&state)?;

    let row = store.get_analysis(id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal_server_error(format!("{e:#}"))),
        )
    })?;

    match row {
        Some(row) => Ok(Json(row)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(format!(
                "Analysis with ID {id} not found"
            ))),
        )),
    }
}

fn require_store(state: &AppState) -> Result<&AnalysisStore, (StatusCode, Json<ErrorResponse>)> {
    state.store.as_ref().ok_or_else(|| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::new(
                "persistence_disabled",
                "No database configured; start the server with --db-url to persist runs",
            )),
        )
    })
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}
