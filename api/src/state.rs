use crate::store::SnapshotStore;
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub snapshots: Arc<SnapshotStore>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            snapshots: Arc::new(SnapshotStore::new()),
            started_at: Instant::now(),
        }
    }
}
