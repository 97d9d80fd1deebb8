//! PostsApp - the action surface over the shared stores.
//!
//! A rendering layer holds one `PostsApp`, reads the stores it exposes, and
//! invokes actions on it. Every remote call goes through the shared
//! [`LoaderStore`], so a single busy flag and error slot cover the list and
//! the detail view alike.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use postboard_core::Generation;
use postboard_types::{texts, Post, ValidationError};

use crate::detail::PostDetailSynchronizer;
use crate::outcome::LoadOutcome;
use crate::remote::RemoteClient;
use crate::store::{LoaderStore, PostsStore, SearchStore};

/// Actions and derived views over the posts data layer.
pub struct PostsApp<R: RemoteClient> {
    remote: Arc<R>,
    loader: LoaderStore,
    posts: PostsStore,
    search: SearchStore,
    generation: Arc<Mutex<Generation>>,
    detail: PostDetailSynchronizer<R>,
}

impl<R: RemoteClient> Clone for PostsApp<R> {
    fn clone(&self) -> Self {
        Self {
            remote: Arc::clone(&self.remote),
            loader: self.loader.clone(),
            posts: self.posts.clone(),
            search: self.search.clone(),
            generation: Arc::clone(&self.generation),
            detail: self.detail.clone(),
        }
    }
}

impl<R: RemoteClient> PostsApp<R> {
    /// Wire an app over `remote` and the given stores.
    pub fn new(remote: R, loader: LoaderStore, posts: PostsStore, search: SearchStore) -> Self {
        let remote = Arc::new(remote);
        let detail = PostDetailSynchronizer::new(Arc::clone(&remote), loader.clone());
        Self {
            remote,
            loader,
            posts,
            search,
            generation: Arc::new(Mutex::new(Generation::new())),
            detail,
        }
    }

    fn generation(&self) -> MutexGuard<'_, Generation> {
        self.generation.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch every post and replace the collection.
    ///
    /// Returns the number of posts applied. A fetch superseded by a later
    /// `load_posts` is discarded, even if it completes last.
    pub async fn load_posts(&self) -> LoadOutcome<usize> {
        let token = self.generation().issue();
        self.loader.clear_error();

        let result = {
            let _busy = self.loader.track();
            self.remote.fetch_posts().await
        };

        if !self.generation().is_current(token) {
            tracing::debug!(token = token.value(), "discarding stale posts response");
            return LoadOutcome::Stale;
        }

        match result {
            Ok(posts) => {
                self.posts.replace_all(posts);
                let count = self.posts.len();
                tracing::info!(count, "posts loaded");
                LoadOutcome::Applied(count)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load posts");
                self.loader.set_error(Some(texts::ERROR_FETCH_POSTS.to_string()));
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Add a locally authored post. Nothing is sent to the remote.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] if the title or body is
    /// blank, or [`ValidationError::IdsExhausted`] if no id is left.
    pub fn add_post(&self, title: &str, body: &str) -> Result<Post, ValidationError> {
        let post = self.posts.add(title, body)?;
        tracing::debug!(id = %post.id, "post added locally");
        Ok(post)
    }

    /// Replace the search query.
    pub fn set_query(&self, query: &str) {
        self.search.set(query);
    }

    /// Current search query.
    pub fn query_text(&self) -> String {
        self.search.current()
    }

    /// Posts matching the current query, in collection order.
    pub fn visible_posts(&self) -> Vec<Post> {
        self.posts.filtered(&self.search.current())
    }

    /// Detail view synchronizer sharing this app's remote and loader.
    pub fn detail(&self) -> &PostDetailSynchronizer<R> {
        &self.detail
    }

    /// Shared loading/error store.
    pub fn loader(&self) -> &LoaderStore {
        &self.loader
    }

    /// Canonical posts store.
    pub fn posts(&self) -> &PostsStore {
        &self.posts
    }

    /// Search query store.
    pub fn search(&self) -> &SearchStore {
        &self.search
    }

    /// The remote client.
    pub fn remote(&self) -> &R {
        &self.remote
    }
}
