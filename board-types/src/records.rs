//! Records exchanged with the remote source.
//!
//! Field names follow the remote JSON payloads. Unknown fields (e.g. `userId`)
//! are ignored on decode.

use serde::{Deserialize, Serialize};

use crate::PostId;

/// A post, either fetched from the remote source or authored locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique within a collection
    pub id: PostId,
    /// Title, the only field searched by the filter
    pub title: String,
    /// Body text
    pub body: String,
}

impl Post {
    /// Create a new post.
    pub fn new(id: PostId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A comment attached to a post. Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier
    pub id: u64,
    /// The post this comment belongs to
    #[serde(rename = "postId")]
    pub post_id: PostId,
    /// Author-supplied name / subject line
    pub name: String,
    /// Author email, when the source provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Comment text
    pub body: String,
}

/// A post together with its comments, as shown by a detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    /// The post
    pub post: Post,
    /// Its comments; may be empty
    pub comments: Vec<Comment>,
}
