//! Mock remote for testing.
//!
//! Serves posts and comments from in-memory fixtures. Tests can queue
//! one-off responses or failures per endpoint, inspect the calls that were
//! made, and hold a response open with a [`ResponseGate`] to interleave
//! overlapping calls deterministically.

use super::RemoteClient;
use async_trait::async_trait;
use postboard_types::{Comment, Post, PostId, RemoteError};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;

/// The three remote reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /posts`
    Posts,
    /// `GET /posts/{id}`
    Post,
    /// `GET /comments?postId={id}`
    Comments,
}

/// A call received by the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockCall {
    /// `fetch_posts()`
    FetchPosts,
    /// `fetch_post_by_id(id)`
    FetchPost(PostId),
    /// `fetch_comments_by_post_id(id)`
    FetchComments(PostId),
}

/// Holds one mock response until released.
///
/// Dropping the gate without calling [`ResponseGate::release`] also lets the
/// response through.
#[derive(Debug)]
pub struct ResponseGate {
    tx: oneshot::Sender<()>,
}

impl ResponseGate {
    /// Let the held response complete.
    pub fn release(self) {
        let _ = self.tx.send(());
    }
}

/// Mock remote for testing.
#[derive(Debug, Default, Clone)]
pub struct MockRemote {
    inner: Arc<Mutex<MockRemoteInner>>,
}

#[derive(Debug, Default)]
struct MockRemoteInner {
    posts: Vec<Post>,
    comments: Vec<Comment>,
    queued_posts: VecDeque<Option<Vec<Post>>>,
    failures: HashMap<Endpoint, VecDeque<RemoteError>>,
    gates: HashMap<Endpoint, VecDeque<oneshot::Receiver<()>>>,
    calls: Vec<MockCall>,
}

impl MockRemote {
    /// Create a mock with no fixtures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock serving the given posts and comments.
    pub fn with_fixture(posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        let remote = Self::new();
        remote.set_posts(posts);
        remote.set_comments(comments);
        remote
    }

    fn lock(&self) -> MutexGuard<'_, MockRemoteInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the posts fixture.
    pub fn set_posts(&self, posts: Vec<Post>) {
        self.lock().posts = posts;
    }

    /// Replace the comments fixture.
    pub fn set_comments(&self, comments: Vec<Comment>) {
        self.lock().comments = comments;
    }

    /// Queue a raw payload for the next `fetch_posts()` call, bypassing the
    /// fixture. `None` simulates a success without a body.
    pub fn queue_posts_response(&self, posts: Option<Vec<Post>>) {
        self.lock().queued_posts.push_back(posts);
    }

    /// Cause the next call to `endpoint` to fail with `error`.
    pub fn fail_next(&self, endpoint: Endpoint, error: RemoteError) {
        self.lock()
            .failures
            .entry(endpoint)
            .or_default()
            .push_back(error);
    }

    /// Hold the next response from `endpoint` until the returned gate is
    /// released. The response itself is decided when the call arrives.
    pub fn hold_next(&self, endpoint: Endpoint) -> ResponseGate {
        let (tx, rx) = oneshot::channel();
        self.lock().gates.entry(endpoint).or_default().push_back(rx);
        ResponseGate { tx }
    }

    /// Get all calls that were made, in arrival order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.lock().calls.clone()
    }

    /// Number of calls made to `endpoint`.
    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.endpoint() == endpoint)
            .count()
    }

    /// Clear all state (fixtures, queues, recorded calls).
    pub fn reset(&self) {
        *self.lock() = MockRemoteInner::default();
    }

    /// Record the call and decide its response, then wait on the gate if
    /// one is queued. The lock is released before awaiting.
    async fn respond<T, F>(&self, call: MockCall, serve: F) -> Result<T, RemoteError>
    where
        T: Send,
        F: FnOnce(&mut MockRemoteInner) -> Result<T, RemoteError> + Send,
    {
        let endpoint = call.endpoint();
        let (result, gate) = {
            let mut inner = self.lock();
            inner.calls.push(call);
            let gate = inner.gates.get_mut(&endpoint).and_then(VecDeque::pop_front);
            let failure = inner
                .failures
                .get_mut(&endpoint)
                .and_then(VecDeque::pop_front);
            let result = match failure {
                Some(error) => Err(error),
                None => serve(&mut *inner),
            };
            (result, gate)
        };

        if let Some(gate) = gate {
            // A dropped gate releases too
            let _ = gate.await;
        }
        result
    }
}

impl MockCall {
    /// The endpoint this call targets.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::FetchPosts => Endpoint::Posts,
            Self::FetchPost(_) => Endpoint::Post,
            Self::FetchComments(_) => Endpoint::Comments,
        }
    }
}

#[async_trait]
impl RemoteClient for MockRemote {
    async fn fetch_posts(&self) -> Result<Option<Vec<Post>>, RemoteError> {
        self.respond(MockCall::FetchPosts, |inner| {
            let queued = inner.queued_posts.pop_front();
            Ok(queued.unwrap_or_else(|| Some(inner.posts.clone())))
        })
        .await
    }

    async fn fetch_post_by_id(&self, id: PostId) -> Result<Post, RemoteError> {
        self.respond(MockCall::FetchPost(id), move |inner| {
            inner
                .posts
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| RemoteError::api(404, None))
        })
        .await
    }

    async fn fetch_comments_by_post_id(&self, id: PostId) -> Result<Vec<Comment>, RemoteError> {
        self.respond(MockCall::FetchComments(id), move |inner| {
            Ok(inner
                .comments
                .iter()
                .filter(|c| c.post_id == id)
                .cloned()
                .collect())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str) -> Post {
        Post::new(PostId::new(id), title, "body")
    }

    fn comment(id: u64, post_id: u64) -> Comment {
        Comment {
            id,
            post_id: PostId::new(post_id),
            name: format!("comment {id}"),
            email: None,
            body: "text".into(),
        }
    }

    // ===========================================
    // Fixture Tests
    // ===========================================

    #[tokio::test]
    async fn mock_serves_fixture_posts() {
        let remote = MockRemote::with_fixture(vec![post(1, "a"), post(2, "b")], vec![]);

        let posts = remote.fetch_posts().await.unwrap().unwrap();

        assert_eq!(posts, vec![post(1, "a"), post(2, "b")]);
    }

    #[tokio::test]
    async fn mock_finds_post_by_id() {
        let remote = MockRemote::with_fixture(vec![post(1, "a"), post(2, "b")], vec![]);

        assert_eq!(remote.fetch_post_by_id(PostId::new(2)).await.unwrap(), post(2, "b"));
        assert_eq!(
            remote.fetch_post_by_id(PostId::new(9)).await,
            Err(RemoteError::api(404, None))
        );
    }

    #[tokio::test]
    async fn mock_filters_comments_by_post() {
        let remote = MockRemote::with_fixture(
            vec![post(1, "a")],
            vec![comment(1, 1), comment(2, 2), comment(3, 1)],
        );

        let comments = remote.fetch_comments_by_post_id(PostId::new(1)).await.unwrap();

        let ids: Vec<u64> = comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn mock_queued_posts_response_overrides_fixture_once() {
        let remote = MockRemote::with_fixture(vec![post(1, "a")], vec![]);
        remote.queue_posts_response(None);

        assert_eq!(remote.fetch_posts().await.unwrap(), None);
        assert_eq!(remote.fetch_posts().await.unwrap(), Some(vec![post(1, "a")]));
    }

    // ===========================================
    // Failure Tests
    // ===========================================

    #[tokio::test]
    async fn mock_fail_next_applies_once() {
        let remote = MockRemote::with_fixture(vec![post(1, "a")], vec![]);
        remote.fail_next(Endpoint::Posts, RemoteError::Network);

        assert_eq!(remote.fetch_posts().await, Err(RemoteError::Network));
        assert!(remote.fetch_posts().await.is_ok());
    }

    #[tokio::test]
    async fn mock_failures_are_per_endpoint() {
        let remote = MockRemote::with_fixture(vec![post(1, "a")], vec![]);
        remote.fail_next(Endpoint::Comments, RemoteError::unexpected("bad"));

        assert!(remote.fetch_post_by_id(PostId::new(1)).await.is_ok());
        assert!(remote.fetch_comments_by_post_id(PostId::new(1)).await.is_err());
    }

    // ===========================================
    // Call Recording Tests
    // ===========================================

    #[tokio::test]
    async fn mock_records_calls_in_order() {
        let remote = MockRemote::new();

        let _ = remote.fetch_posts().await;
        let _ = remote.fetch_post_by_id(PostId::new(4)).await;
        let _ = remote.fetch_comments_by_post_id(PostId::new(4)).await;

        assert_eq!(
            remote.calls(),
            vec![
                MockCall::FetchPosts,
                MockCall::FetchPost(PostId::new(4)),
                MockCall::FetchComments(PostId::new(4)),
            ]
        );
        assert_eq!(remote.call_count(Endpoint::Posts), 1);
    }

    #[tokio::test]
    async fn mock_reset_clears_everything() {
        let remote = MockRemote::with_fixture(vec![post(1, "a")], vec![]);
        let _ = remote.fetch_posts().await;

        remote.reset();

        assert!(remote.calls().is_empty());
        assert_eq!(remote.fetch_posts().await.unwrap(), Some(vec![]));
    }

    // ===========================================
    // Gate Tests
    // ===========================================

    #[tokio::test]
    async fn gate_holds_response_until_released() {
        let remote = MockRemote::with_fixture(vec![post(1, "a")], vec![]);
        let gate = remote.hold_next(Endpoint::Posts);

        let task = {
            let remote = remote.clone();
            tokio::spawn(async move { remote.fetch_posts().await })
        };
        while remote.call_count(Endpoint::Posts) == 0 {
            tokio::task::yield_now().await;
        }
        tokio::task::yield_now().await;
        assert!(!task.is_finished());

        gate.release();

        let posts = task.await.unwrap().unwrap().unwrap();
        assert_eq!(posts.len(), 1);
    }

    #[tokio::test]
    async fn response_is_decided_on_arrival() {
        let remote = MockRemote::with_fixture(vec![post(1, "old")], vec![]);
        let gate = remote.hold_next(Endpoint::Posts);

        let task = {
            let remote = remote.clone();
            tokio::spawn(async move { remote.fetch_posts().await })
        };
        while remote.call_count(Endpoint::Posts) == 0 {
            tokio::task::yield_now().await;
        }
        remote.set_posts(vec![post(2, "new")]);
        drop(gate);

        let posts = task.await.unwrap().unwrap().unwrap();
        assert_eq!(posts, vec![post(1, "old")]);
    }
}
