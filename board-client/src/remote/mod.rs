//! Remote abstraction for Postboard.
//!
//! This module provides a pluggable read-only client for the posts API
//! (HTTP via reqwest, mock for testing).
//!
//! # Design
//!
//! The trait has exactly the three reads the data layer needs:
//! - `fetch_posts()` - `GET /posts`
//! - `fetch_post_by_id(id)` - `GET /posts/{id}`
//! - `fetch_comments_by_post_id(id)` - `GET /comments?postId={id}`
//!
//! Implementations never retry and never return an unclassified error:
//! every failure is one of the [`RemoteError`] variants.
//!
//! # Example
//!
//! ```ignore
//! let remote = MockRemote::with_fixture(posts, comments);
//! let posts = remote.fetch_posts().await?;
//! ```

mod http;
mod mock;

pub use http::HttpRemote;
pub use mock::{Endpoint, MockCall, MockRemote, ResponseGate};

use async_trait::async_trait;
use postboard_types::{Comment, Post, PostId, RemoteError};

/// Read-only access to the remote posts source.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// Fetch every post.
    ///
    /// `None` means the remote answered successfully but without a payload.
    async fn fetch_posts(&self) -> Result<Option<Vec<Post>>, RemoteError>;

    /// Fetch a single post.
    async fn fetch_post_by_id(&self, id: PostId) -> Result<Post, RemoteError>;

    /// Fetch the comments attached to a post. An empty list is a success.
    async fn fetch_comments_by_post_id(&self, id: PostId) -> Result<Vec<Comment>, RemoteError>;
}

