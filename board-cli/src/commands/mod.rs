//! CLI command implementations.

use anyhow::Result;
use postboard_client::{LoadOutcome, Post, PostsApp, RemoteClient};
use postboard_types::texts;

pub mod add;
pub mod list;
pub mod show;

/// Load posts, turning a failure into the loader's user-facing message.
pub(crate) async fn load_posts<R: RemoteClient>(app: &PostsApp<R>) -> Result<usize> {
    match app.load_posts().await {
        LoadOutcome::Applied(count) => Ok(count),
        LoadOutcome::Stale => Ok(app.posts().len()),
        LoadOutcome::Failed(_) => Err(loader_error(app, texts::ERROR_FETCH_POSTS)),
    }
}

/// The loader's current error, or `fallback` if none is set.
pub(crate) fn loader_error<R: RemoteClient>(app: &PostsApp<R>, fallback: &str) -> anyhow::Error {
    let message = app.loader().error().unwrap_or_else(|| fallback.to_string());
    anyhow::anyhow!(message)
}

/// Print the visible posts, or the empty-state text.
pub(crate) fn print_posts(posts: &[Post]) {
    if posts.is_empty() {
        println!("{}", texts::NO_POSTS);
        return;
    }
    for post in posts {
        println!("[{}] {}", post.id, post.title);
    }
}
