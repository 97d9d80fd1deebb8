//! Search query store.

use std::sync::Arc;
use tokio::sync::watch;

/// Shared handle to the current search text.
#[derive(Debug, Clone)]
pub struct SearchStore {
    query: Arc<watch::Sender<String>>,
}

impl Default for SearchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStore {
    /// Create a store with an empty query.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(String::new());
        Self {
            query: Arc::new(tx),
        }
    }

    /// Replace the query text.
    pub fn set(&self, query: &str) {
        self.query.send_if_modified(|current| {
            if current == query {
                return false;
            }
            query.clone_into(current);
            true
        });
    }

    /// Current query text.
    pub fn current(&self) -> String {
        self.query.borrow().clone()
    }

    /// Watch for query changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.query.subscribe()
    }
}
