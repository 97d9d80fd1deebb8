//! User-facing message texts.
//!
//! Store-level operations place these into the loader's error slot; consumers
//! display them as-is.

/// Shown when loading the posts list fails.
pub const ERROR_FETCH_POSTS: &str = "Failed to fetch posts. Please try again later.";

/// Shown when loading a post and its comments fails.
pub const ERROR_FETCH_POST_DETAILS: &str =
    "Failed to fetch post details. Please try again later.";

/// Shown when a locally authored post is missing its title or body.
pub const ERROR_MISSING_FIELDS: &str = "Title and body are required.";

/// Shown when no free id is left for a locally authored post.
pub const ERROR_IDS_EXHAUSTED: &str = "No post id is available for a new post.";

/// Shown when a filtered view is empty.
pub const NO_POSTS: &str = "No posts to display.";

/// Shown when a post has no comments.
pub const NO_COMMENTS: &str = "No comments to display.";

/// Fallback when an API error payload carries no message.
pub const UNKNOWN_API_ERROR: &str = "Unknown error";
