//! Add a post locally.

use anyhow::Result;
use postboard_client::{PostsApp, RemoteClient};

use super::{load_posts, print_posts};

/// Run the add command.
///
/// Posts are loaded first so the new id follows the remote ones.
pub async fn run<R: RemoteClient>(
    app: &PostsApp<R>,
    title: &str,
    body: &str,
    query: Option<&str>,
) -> Result<()> {
    load_posts(app).await?;

    let post = app
        .add_post(title, body)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    println!("Added post {}", post.id);
    println!();

    if let Some(query) = query {
        app.set_query(query);
    }
    print_posts(&app.visible_posts());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use postboard_client::{LoaderStore, MockRemote, PostId, PostsStore, SearchStore};

    fn app() -> PostsApp<MockRemote> {
        PostsApp::new(
            demo::remote(),
            LoaderStore::new(),
            PostsStore::new(),
            SearchStore::new(),
        )
    }

    #[tokio::test]
    async fn add_appends_after_loaded_posts() {
        let app = app();

        run(&app, "Fresh", "news", None).await.unwrap();

        let last = app.posts().query().pop().unwrap();
        assert_eq!(last.id, PostId::new(4));
        assert_eq!(last.title, "Fresh");
    }

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let app = app();

        let err = run(&app, " ", "body", None).await.unwrap_err().to_string();

        assert_eq!(err, "Title and body are required.");
        assert_eq!(app.posts().len(), 3);
    }
}
