// api/src/evm_handlers.rs
//
// Axum handlers for project EVM metrics.
//
// Routes (register in evm_routes.rs):
//   POST   /projects/:id/evm  → recompute_snapshot
//   GET    /projects/:id/evm  → get_snapshot
//   DELETE /projects/:id/evm  → delete_snapshot

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

// ── Types come from the shared crate (shared/src/models.rs) ──────────────────
use shared::{compute_evm, RecomputeEvmRequest};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

// ─────────────────────────────────────────────────────────
// POST /projects/:id/evm
// Validate the payload, recompute and store the snapshot.
// ─────────────────────────────────────────────────────────

pub async fn recompute_snapshot(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<RecomputeEvmRequest>,
) -> ApiResult<impl IntoResponse> {
    let (project, tasks) = req.into_inputs(project_id);
    project.validate()?;

    let snapshot = compute_evm(&project, &tasks, Utc::now());
    let replaced = state.snapshots.replace(snapshot.clone()).await;

    tracing::info!(
        %project_id,
        replaced,
        spi = snapshot.schedule_performance_index,
        cpi = snapshot.cost_performance_index,
        "evm snapshot recomputed"
    );

    Ok((StatusCode::CREATED, Json(snapshot)))
}

// ─────────────────────────────────────────────────────────
// GET /projects/:id/evm
// Return the latest stored snapshot.
// ─────────────────────────────────────────────────────────

pub async fn get_snapshot(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    match state.snapshots.get(project_id).await {
        Some(snapshot) => Ok((StatusCode::OK, Json(snapshot))),
        None => Err(ApiError::not_found(
            "SnapshotNotFound",
            format!("no EVM snapshot for project {project_id}"),
        )),
    }
}

// ─────────────────────────────────────────────────────────
// DELETE /projects/:id/evm
// Drop the snapshot when the owning project goes away.
// ─────────────────────────────────────────────────────────

pub async fn delete_snapshot(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    if state.snapshots.remove(project_id).await {
        tracing::info!(%project_id, "evm snapshot removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(
            "SnapshotNotFound",
            format!("no EVM snapshot for project {project_id}"),
        ))
    }
}
