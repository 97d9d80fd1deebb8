//! The canonical posts collection.
//!
//! Ordered by the last full replace, with local additions appended. Post ids
//! are unique and at least 1 at all times: a replace drops id 0 and later
//! duplicates, and a local add takes `max(id) + 1` so it can never collide
//! with a server id even when the server's ids are sparse. Once `u64::MAX`
//! is taken, local adds are refused.

use std::collections::HashSet;

use postboard_types::{Post, PostId, ValidationError};

/// Outcome of [`PostsCollection::add`].
pub type AddResult = Result<Post, ValidationError>;

/// Ordered posts, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsCollection {
    posts: Vec<Post>,
}

impl PostsCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a fetched payload.
    ///
    /// A missing payload normalizes to an empty collection. Returns the ids
    /// that were dropped (id 0 or a duplicate), in payload order.
    pub fn replace_all(&mut self, posts: Option<Vec<Post>>) -> Vec<PostId> {
        let incoming = posts.unwrap_or_default();
        let mut seen = HashSet::with_capacity(incoming.len());
        let mut dropped = Vec::new();
        let mut kept = Vec::with_capacity(incoming.len());

        for post in incoming {
            if post.id.value() != 0 && seen.insert(post.id) {
                kept.push(post);
            } else {
                dropped.push(post.id);
            }
        }

        self.posts = kept;
        dropped
    }

    /// Append a locally authored post.
    ///
    /// Both fields must be non-empty after trimming. The stored text is kept
    /// as given.
    pub fn add(&mut self, title: &str, body: &str) -> AddResult {
        if title.trim().is_empty() || body.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }
        let id = self.next_id().ok_or(ValidationError::IdsExhausted)?;

        let post = Post::new(id, title, body);
        self.posts.push(post.clone());
        Ok(post)
    }

    /// The id the next local post will receive, or `None` if the highest
    /// id is already `u64::MAX`.
    pub fn next_id(&self) -> Option<PostId> {
        match self.max_id() {
            Some(id) => id.checked_next(),
            None => Some(PostId::new(1)),
        }
    }

    /// Highest id present.
    pub fn max_id(&self) -> Option<PostId> {
        self.posts.iter().map(|p| p.id).max()
    }

    /// Current posts in order.
    pub fn as_slice(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a post by id.
    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
