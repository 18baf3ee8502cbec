//! Liveness check for load balancers and the deploy scripts.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

const SERVICE_NAME: &str = "agritrace-api";

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Dependency {
    Up,
    Down,
}

/// Body of `GET /health`. Returned outside the `ApiResponse` envelope so
/// monitors can read it without knowing the API format.
#[derive(Serialize)]
pub struct HealthReport {
    /// `ok` while traceability records can be served, `degraded` otherwise.
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub database: Dependency,
}

impl HealthReport {
    fn new(database: Dependency) -> Self {
        let status = match database {
            Dependency::Up => "ok",
            Dependency::Down => "degraded",
        };
        Self {
            status,
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let database = match agritrace_db::health_check(&state.pool).await {
        Ok(()) => Dependency::Up,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the record store");
            Dependency::Down
        }
    };
    Json(HealthReport::new(database))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
