// api/src/evm_routes.rs
//
// Register the EVM metrics routes.
// Add to your main router:
//
//   use crate::evm_routes::evm_router;
//   let app = Router::new()
//       .merge(evm_router())
//       ...
//       .with_state(state);

use axum::{routing::post, Router};

use crate::{
    evm_handlers::{delete_snapshot, get_snapshot, recompute_snapshot},
    state::AppState,
};

pub fn evm_router() -> Router<AppState> {
    Router::new()
        // Recompute on demand (called after task-status changes), read back
        // the latest snapshot, or drop it with the project.
        .route(
            "/projects/:id/evm",
            post(recompute_snapshot)
                .get(get_snapshot)
                .delete(delete_snapshot),
        )
}
