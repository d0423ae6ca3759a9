//! Liveness, readiness and build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

/// Shared by `/health` and `/ready`; `database` is only reported by readiness.
#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

impl StatusBody {
    fn live() -> Self {
        StatusBody { status: "ok", database: None }
    }

    fn store(reachable: bool) -> Self {
        if reachable {
            StatusBody { status: "ok", database: Some("ok") }
        } else {
            StatusBody { status: "degraded", database: Some("unavailable") }
        }
    }
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

const BUILD_INFO: BuildInfo = BuildInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

async fn liveness() -> Json<StatusBody> {
    Json(StatusBody::live())
}

/// 503 when the profile store cannot answer a ping.
async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<StatusBody>) {
    match state.service.ping().await {
        Ok(()) => (StatusCode::OK, Json(StatusBody::store(true))),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(StatusBody::store(false)))
        }
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BUILD_INFO)
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route("/ready", get(readiness))
        .route("/version", get(build_info))
        .with_state(state)
}
