//! Liveness check for the recipe catalog.
//!
//! Reports `"ok"` when the recipe database answers a trivial query and
//! `"degraded"` otherwise. The status code is `200` either way.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// `recipebox-api` package version.
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn from_db_status(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match recipebox_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Recipe database health check failed");
            false
        }
    };

    Json(HealthResponse::from_db_status(db_healthy))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
