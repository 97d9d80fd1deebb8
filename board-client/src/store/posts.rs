//! Canonical posts store.

use postboard_core::{filter_posts, PostsCollection};
use postboard_types::{Post, PostId, ValidationError};
use std::sync::Arc;
use tokio::sync::watch;

/// Shared handle to the canonical posts collection.
#[derive(Debug, Clone)]
pub struct PostsStore {
    state: Arc<watch::Sender<PostsCollection>>,
}

impl Default for PostsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(PostsCollection::new());
        Self {
            state: Arc::new(tx),
        }
    }

    /// Replace every post with a fetched payload; `None` empties the store.
    pub fn replace_all(&self, posts: Option<Vec<Post>>) {
        let mut dropped = Vec::new();
        self.state.send_modify(|collection| {
            dropped = collection.replace_all(posts);
        });
        if !dropped.is_empty() {
            tracing::warn!(?dropped, "dropped posts with id 0 or a duplicate id");
        }
    }

    /// Append a locally authored post with the next free id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] if the title or body is
    /// blank, or [`ValidationError::IdsExhausted`] if no id is left; the
    /// collection is left unchanged.
    pub fn add(&self, title: &str, body: &str) -> Result<Post, ValidationError> {
        let mut result = Err(ValidationError::MissingFields);
        self.state.send_if_modified(|collection| {
            result = collection.add(title, body);
            result.is_ok()
        });
        result
    }

    /// Snapshot of the collection, in order.
    pub fn query(&self) -> Vec<Post> {
        self.state.borrow().as_slice().to_vec()
    }

    /// Posts whose title matches `query`, derived from the current collection.
    pub fn filtered(&self, query: &str) -> Vec<Post> {
        filter_posts(self.state.borrow().as_slice(), query)
    }

    /// Look up a post by id.
    pub fn get(&self, id: PostId) -> Option<Post> {
        self.state.borrow().get(id).cloned()
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    /// Watch for changes to the collection.
    pub fn subscribe(&self) -> watch::Receiver<PostsCollection> {
        self.state.subscribe()
    }
}
