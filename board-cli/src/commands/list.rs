//! List posts.

use anyhow::Result;
use postboard_client::{PostsApp, RemoteClient};

use super::{load_posts, print_posts};

/// Run the list command.
pub async fn run<R: RemoteClient>(app: &PostsApp<R>, query: Option<&str>) -> Result<()> {
    load_posts(app).await?;
    if let Some(query) = query {
        app.set_query(query);
    }
    print_posts(&app.visible_posts());
    Ok(())
}
