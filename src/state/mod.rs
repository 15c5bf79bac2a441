pub mod selection;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Notify, RwLock};

use selection::SelectionState;

/// Shared handle between the session, its spawned fetches and the render
/// loop. State is only ever mutated under the write lock; the epoch is the
/// staleness guard that keeps late fetch results from a superseded
/// selection out of it.
#[derive(Clone, Debug)]
pub struct Shared {
    pub selection: Arc<RwLock<SelectionState>>,
    epoch: Arc<AtomicU64>,
    pub notify: Arc<Notify>,
}

impl Shared {
    pub fn new() -> Self {
        Self {
            selection: Arc::new(RwLock::new(SelectionState::default())),
            epoch: Arc::new(AtomicU64::new(0)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// The epoch of the live selection. A fetch that captured an older value
    /// is working for a selection that no longer exists.
    pub fn current_epoch(&self) -> u64 {
        self.epoch.load(Ordering::Acquire)
    }

    /// Bump the epoch for a new selection and return it. Everything still in
    /// flight under the previous value is invalidated by this alone.
    pub fn next_epoch(&self) -> u64 {
        self.epoch.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Read-only clone for rendering.
    pub async fn snapshot(&self) -> SelectionState {
        self.selection.read().await.clone()
    }
}

impl Default for Shared {
    fn default() -> Self {
        Self::new()
    }
}
