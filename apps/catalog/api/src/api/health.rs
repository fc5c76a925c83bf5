//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health;
use serde_json::Value;

use crate::state::{AppState, Storage};

type ReadyResult = Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)>;

/// Pings PostgreSQL; in-memory storage is always ready.
async fn ready(State(state): State<AppState>) -> ReadyResult {
    let checks: Vec<(&str, HealthCheckFuture)> = match &state.storage {
        Storage::Postgres(db) => vec![(
            "database",
            Box::pin(async move { check_health(db).await.map_err(|e| e.to_string()) })
                as HealthCheckFuture,
        )],
        Storage::Memory(_) => vec![(
            "storage",
            Box::pin(async { Ok::<(), String>(()) }) as HealthCheckFuture,
        )],
    };

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
}
