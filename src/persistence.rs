// Persistence layer for analysis run metadata.
// An sqlx Postgres store scoped per operation: acquire from the pool, run
// one statement, release. Persistence is optional and its failures are
// isolated from the measurement result (see the analyze handler).

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::instrument;

/// Row of the `algorithm_analysis` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AnalysisRow {
    pub id: i64,
    pub algo: String,
    pub items: i32,
    pub steps: i32,
    pub start_time: i64,
    pub end_time: i64,
    pub total_time_ms: i64,
    pub time_complexity: String,
    pub path_to_graph: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Flat record for one completed analysis run, ready to insert.
#[derive(Debug, Clone)]
pub struct NewAnalysis<'a> {
    pub algo: &'a str,
    pub items: i32,
    pub steps: i32,
    /// unix millis when the request began
    pub start_time: i64,
    /// unix millis when the request finished measuring
    pub end_time: i64,
    pub total_time_ms: i64,
    pub time_complexity: &'a str,
    pub path_to_graph: Option<&'a str>,
}

/// Outcome of an isolated persistence attempt, reported to the caller
/// separately from the measurement result it never affects.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PersistenceOutcome {
    Success { id: i64, message: String },
    Error { message: String },
}

#[derive(Clone)]
pub struct AnalysisStore {
    pool: PgPool,
}

impl AnalysisStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the database and return a store over a small pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .context("failed to connect to analysis database")?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }

    /// Create the analysis table if it does not exist. Idempotent.
    #[instrument(skip(self))]
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS algorithm_analysis (
                id BIGSERIAL PRIMARY KEY,
                algo VARCHAR(100) NOT NULL,
                items INTEGER NOT NULL,
                steps INTEGER NOT NULL,
                start_time BIGINT NOT NULL,
                end_time BIGINT NOT NULL,
                total_time_ms BIGINT NOT NULL,
                time_complexity VARCHAR(50) NOT NULL,
                path_to_graph VARCHAR(500),
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("failed to create algorithm_analysis table")?;

        Ok(())
    }

    /// Insert one analysis record and return its generated id.
    #[instrument(skip(self, analysis))]
    pub async fn save_analysis(&self, analysis: NewAnalysis<'_>) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO algorithm_analysis (
                algo,
                items,
                steps,
                start_time,
                end_time,
                total_time_ms,
                time_complexity,
                path_to_graph
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(analysis.algo)
        .bind(analysis.items)
        .bind(analysis.steps)
        .bind(analysis.start_time)
        .bind(analysis.end_time)
        .bind(analysis.total_time_ms)
        .bind(analysis.time_complexity)
        .bind(analysis.path_to_graph)
        .fetch_one(&self.pool)
        .await
        .context("failed to save analysis record")?;

        Ok(id)
    }

    /// Fetch a single analysis record by id.
    #[instrument(skip(self))]
    pub async fn get_analysis(&self, id: i64) -> Result<Option<AnalysisRow>> {
        let row = sqlx::query_as::<_, AnalysisRow>(
            r#"
            SELECT
                id,
                algo,
                items,
                steps,
                start_time,
                end_time,
                total_time_ms,
                time_complexity,
                path_to_graph,
                created_at
            FROM algorithm_analysis
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to fetch analysis record")?;

        Ok(row)
    }

    /// List all analysis records, newest first.
    #[instrument(skip(self))]
    pub async fn list_analyses(&self) -> Result<Vec<AnalysisRow>> {
        let rows = sqlx::query_as::<_, AnalysisRow>(
            r#"
            SELECT
                id,
                algo,
                items,
                steps,
                start_time,
                end_time,
                total_time_ms,
                time_complexity,
                path_to_graph,
                created_at
            FROM algorithm_analysis
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to list analysis records")?;

        Ok(rows)
    }

    /// Attempt to save, converting any failure into an isolated outcome
    /// instead of propagating it.
    pub async fn save_analysis_isolated(&self, analysis: NewAnalysis<'_>) -> PersistenceOutcome {
        match self.save_analysis(analysis).await {
            Ok(id) => PersistenceOutcome::Success {
                id,
                message: format!("Analysis saved with ID: {id}"),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Failed to persist analysis result");
                PersistenceOutcome::Error {
                    message: format!("Failed to save analysis: {e:#}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_outcome_serialization() {
        let success = PersistenceOutcome::Success {
            id: 7,
            message: "Analysis saved with ID: 7".to_string(),
        };
        let json = serde_json::to_value(&success).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["id"], 7);

        let error = PersistenceOutcome::Error {
            message: "connection refused".to_string(),
        };
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["status"], "error");
        assert!(json["message"].as_str().unwrap().contains("refused"));
    }
}
