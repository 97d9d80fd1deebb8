//! PostDetailSynchronizer - loads one post together with its comments.
//!
//! # Architecture
//!
//! The synchronizer drives the pure [`DetailState`] machine (from board-core)
//! around a two-call fan-out:
//!
//! ```text
//! load(id) ──► LoadRequested ──► begin() ──┬─► fetch_post_by_id(id) ────────┬─► end()
//!                                          └─► fetch_comments_by_post_id(id) ┘
//!                                                        │
//!                                  LoadSucceeded / LoadFailed (gated by token)
//! ```
//!
//! Both calls always settle before `end()`; either failing fails the whole
//! load, so a post without its comments is never exposed.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use postboard_core::{DetailEvent, DetailState, Generation, GenerationToken};
use postboard_types::{texts, PostDetail, PostId};
use tokio::sync::watch;

use crate::outcome::LoadOutcome;
use crate::remote::RemoteClient;
use crate::store::LoaderStore;

/// Loads and holds the state of one detail view.
pub struct PostDetailSynchronizer<R: RemoteClient> {
    remote: Arc<R>,
    loader: LoaderStore,
    generation: Arc<Mutex<Generation>>,
    state: Arc<watch::Sender<DetailState>>,
}

impl<R: RemoteClient> Clone for PostDetailSynchronizer<R> {
    fn clone(&self) -> Self {
        Self {
            remote: Arc::clone(&self.remote),
            loader: self.loader.clone(),
            generation: Arc::clone(&self.generation),
            state: Arc::clone(&self.state),
        }
    }
}

impl<R: RemoteClient> PostDetailSynchronizer<R> {
    /// Create a synchronizer sharing `remote` and `loader` with the rest of
    /// the data layer.
    pub fn new(remote: Arc<R>, loader: LoaderStore) -> Self {
        let (tx, _rx) = watch::channel(DetailState::new());
        Self {
            remote,
            loader,
            generation: Arc::new(Mutex::new(Generation::new())),
            state: Arc::new(tx),
        }
    }

    fn generation(&self) -> MutexGuard<'_, Generation> {
        self.generation.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Feed an event to the state machine; returns whether it was applied.
    fn apply(&self, event: DetailEvent) -> bool {
        let mut applied = false;
        self.state.send_if_modified(|state| {
            let (next, ok) = std::mem::take(state).on_event(event);
            *state = next;
            applied = ok;
            ok
        });
        applied
    }

    /// Load a post and its comments.
    ///
    /// Clears the loader error, then tracks one busy span around both calls.
    /// On failure the view returns to not-loaded and the loader error is set.
    /// A load superseded by a newer `load` or by `close` applies nothing.
    pub async fn load(&self, post_id: PostId) -> LoadOutcome<PostDetail> {
        let token = self.generation().issue();
        self.apply(DetailEvent::LoadRequested { post_id, token });
        self.loader.clear_error();

        let (post, comments) = {
            let _busy = self.loader.track();
            tokio::join!(
                self.remote.fetch_post_by_id(post_id),
                self.remote.fetch_comments_by_post_id(post_id),
            )
        };

        match (post, comments) {
            (Ok(post), Ok(comments)) => {
                let detail = PostDetail { post, comments };
                if !self.accept(token, DetailEvent::LoadSucceeded {
                    token,
                    detail: detail.clone(),
                }) {
                    return LoadOutcome::Stale;
                }
                tracing::info!(%post_id, comments = detail.comments.len(), "post detail loaded");
                LoadOutcome::Applied(detail)
            }
            (Err(err), _) | (Ok(_), Err(err)) => {
                if !self.accept(token, DetailEvent::LoadFailed { token }) {
                    return LoadOutcome::Stale;
                }
                tracing::error!(%post_id, error = %err, "post detail load failed");
                self.loader
                    .set_error(Some(texts::ERROR_FETCH_POST_DETAILS.to_string()));
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Apply a completion only if `token` is still the latest request.
    fn accept(&self, token: GenerationToken, event: DetailEvent) -> bool {
        if !self.generation().is_current(token) || !self.apply(event) {
            tracing::debug!(token = token.value(), "discarding stale post detail");
            return false;
        }
        true
    }

    /// Tear down the view. Any in-flight load will be discarded.
    pub fn close(&self) {
        self.generation().invalidate();
        self.apply(DetailEvent::Closed);
    }

    /// Current state of the view.
    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    /// The loaded detail, if any.
    pub fn detail(&self) -> Option<PostDetail> {
        self.state.borrow().detail().cloned()
    }

    /// Watch for state changes.
    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }
}
