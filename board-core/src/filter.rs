//! Title search over a posts collection.
//!
//! Recomputed on every call: the view depends only on (collection, query)
//! and is never cached.

use postboard_types::Post;

/// Case-insensitive substring match of `query` against `title`.
///
/// An empty query matches every title.
pub fn title_matches(title: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    title.to_lowercase().contains(&query.to_lowercase())
}

/// Posts whose title matches `query`, in their original relative order.
pub fn filter_posts(posts: &[Post], query: &str) -> Vec<Post> {
    if query.is_empty() {
        return posts.to_vec();
    }

    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
