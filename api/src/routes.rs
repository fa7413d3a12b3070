use axum::{routing::get, Router};

use crate::{handlers::health_check, state::AppState};

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
