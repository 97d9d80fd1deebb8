//! Loading/error store.

use postboard_core::{LoaderSnapshot, LoaderState};
use std::sync::Arc;
use tokio::sync::watch;

/// Shared busy flag and error message.
///
/// `begin`/`end` must be paired around exactly one logical operation;
/// prefer [`LoaderStore::track`], which ends on drop.
#[derive(Debug, Clone)]
pub struct LoaderStore {
    state: Arc<watch::Sender<LoaderState>>,
}

impl Default for LoaderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LoaderStore {
    /// Create an idle store with no error.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(LoaderState::new());
        Self {
            state: Arc::new(tx),
        }
    }

    /// Mark the start of a tracked call.
    pub fn begin(&self) {
        self.state.send_if_modified(|state| {
            let was_busy = state.is_busy();
            state.begin();
            !was_busy
        });
    }

    /// Mark the end of a tracked call.
    pub fn end(&self) {
        let mut unpaired = false;
        self.state.send_if_modified(|state| {
            if !state.end() {
                unpaired = true;
                return false;
            }
            !state.is_busy()
        });
        if unpaired {
            tracing::warn!("loader end() called with no outstanding operation");
        }
    }

    /// Begin a tracked call that ends when the guard drops.
    pub fn track(&self) -> BusyGuard {
        self.begin();
        BusyGuard {
            store: self.clone(),
        }
    }

    /// Replace the error message; `None` clears it.
    pub fn set_error(&self, error: Option<String>) {
        self.state.send_if_modified(|state| state.set_error(error));
    }

    /// Clear the error message.
    pub fn clear_error(&self) {
        self.set_error(None);
    }

    /// True while any tracked call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.state.borrow().is_busy()
    }

    /// Current error message.
    pub fn error(&self) -> Option<String> {
        self.state.borrow().error().map(str::to_owned)
    }

    /// Read busy and error together.
    pub fn snapshot(&self) -> LoaderSnapshot {
        self.state.borrow().snapshot()
    }

    /// Watch for changes to the busy flag or the error.
    pub fn subscribe(&self) -> watch::Receiver<LoaderState> {
        self.state.subscribe()
    }
}

/// Ends one tracked call on drop.
#[derive(Debug)]
#[must_use = "the call is tracked only while the guard is alive"]
pub struct BusyGuard {
    store: LoaderStore,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.store.end();
    }
}
