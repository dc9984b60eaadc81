//! Liveness and readiness endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Readiness probe detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub database: String,
}

/// GET / — plain-text banner, no database access.
pub async fn root() -> &'static str {
    "API running"
}

/// Liveness probe — always returns OK if the process is running.
pub async fn live() -> &'static str {
    "OK"
}

/// Readiness probe — reports database connectivity without failing the request.
pub async fn ready(State(state): State<AppState>) -> Json<HealthStatus> {
    let database = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "connected".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            format!("error: {e}")
        }
    };

    Json(HealthStatus {
        status: "ok".to_string(),
        database,
    })
}
