// api/src/store.rs
//
// In-memory snapshot storage: one live EvmSnapshot per project, replaced
// wholesale on every recompute.

use shared::EvmSnapshot;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Keyed store holding the latest snapshot per project.
///
/// Writes swap the whole record under a single write lock, so readers never
/// observe a torn snapshot. Concurrent recomputes for the same project
/// resolve in admission order; the last fully-formed snapshot wins.
#[derive(Default)]
pub struct SnapshotStore {
    inner: RwLock<HashMap<Uuid, EvmSnapshot>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored snapshot for the project. Returns whether a
    /// previous snapshot existed.
    pub async fn replace(&self, snapshot: EvmSnapshot) -> bool {
        let mut map = self.inner.write().await;
        map.insert(snapshot.project_id, snapshot).is_some()
    }

    pub async fn get(&self, project_id: Uuid) -> Option<EvmSnapshot> {
        self.inner.read().await.get(&project_id).cloned()
    }

    /// Drop the snapshot of a deleted project. Returns whether one existed.
    pub async fn remove(&self, project_id: Uuid) -> bool {
        self.inner.write().await.remove(&project_id).is_some()
    }

    /// Number of projects that currently have a snapshot.
    pub async fn tracked_projects(&self) -> usize {
        self.inner.read().await.len()
    }
}
