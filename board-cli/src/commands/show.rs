//! Show one post with its comments.

use anyhow::Result;
use postboard_client::{LoadOutcome, PostId, PostsApp, RemoteClient};
use postboard_types::texts;

use super::loader_error;

/// Run the show command.
pub async fn run<R: RemoteClient>(app: &PostsApp<R>, id: u64) -> Result<()> {
    let detail = match app.detail().load(PostId::new(id)).await {
        LoadOutcome::Applied(detail) => detail,
        LoadOutcome::Stale | LoadOutcome::Failed(_) => {
            return Err(loader_error(app, texts::ERROR_FETCH_POST_DETAILS));
        }
    };

    println!("[{}] {}", detail.post.id, detail.post.title);
    println!();
    println!("{}", detail.post.body);
    println!();

    if detail.comments.is_empty() {
        println!("{}", texts::NO_COMMENTS);
        return Ok(());
    }

    println!("Comments ({}):", detail.comments.len());
    for comment in &detail.comments {
        match &comment.email {
            Some(email) => println!("  - {} <{}>", comment.name, email),
            None => println!("  - {}", comment.name),
        }
        println!("    {}", comment.body);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use postboard_client::{LoaderStore, MockRemote, PostsStore, SearchStore};

    fn app() -> PostsApp<MockRemote> {
        PostsApp::new(
            demo::remote(),
            LoaderStore::new(),
            PostsStore::new(),
            SearchStore::new(),
        )
    }

    #[tokio::test]
    async fn show_loads_detail() {
        let app = app();

        run(&app, 1).await.unwrap();

        let detail = app.detail().detail().unwrap();
        assert_eq!(detail.comments.len(), 2);
    }

    #[tokio::test]
    async fn show_post_without_comments() {
        let app = app();

        assert!(run(&app, 3).await.is_ok());
    }

    #[tokio::test]
    async fn show_missing_post_fails() {
        let app = app();

        let err = run(&app, 999).await.unwrap_err().to_string();

        assert_eq!(err, "Failed to fetch post details. Please try again later.");
        assert!(!app.loader().is_busy());
    }
}
