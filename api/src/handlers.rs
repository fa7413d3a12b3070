use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// Liveness probe: uptime plus how many projects currently have a snapshot.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let uptime = state.started_at.elapsed().as_secs();
    let tracked = state.snapshots.tracked_projects().await;
    let now = chrono::Utc::now().to_rfc3339();

    tracing::info!(uptime_secs = uptime, tracked_projects = tracked, "health check");

    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": now,
            "uptime_secs": uptime,
            "tracked_projects": tracked
        })),
    )
}

pub async fn route_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "Route not found"})))
}
