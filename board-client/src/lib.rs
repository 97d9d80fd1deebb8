//! # board-client
//!
//! Remote client and shared stores for the Postboard data layer.
//!
//! This is the library a rendering layer talks to. It reads state from the
//! stores and invokes actions on [`PostsApp`]; it never mutates a store
//! directly.
//!
//! ## Features
//!
//! - **Classified Errors**: every remote failure becomes a [`RemoteError`]
//! - **Shared Loading State**: overlapping calls keep `busy` set until the last one ends
//! - **Stale-Result Guard**: generation tokens discard superseded completions
//! - **Remote Abstraction**: pluggable [`RemoteClient`] (HTTP, mock)
//!
//! ## Example
//!
//! ```ignore
//! use postboard_client::{ClientConfig, HttpRemote, LoaderStore, PostsApp, PostsStore, SearchStore};
//!
//! let remote = HttpRemote::new(&ClientConfig::default())?;
//! let app = PostsApp::new(remote, LoaderStore::new(), PostsStore::new(), SearchStore::new());
//!
//! app.load_posts().await;
//! app.set_query("qui");
//! for post in app.visible_posts() {
//!     println!("{}", post.title);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod detail;
pub mod outcome;
pub mod remote;
pub mod store;

pub use app::PostsApp;
pub use config::{ClientConfig, ConfigError};
pub use detail::PostDetailSynchronizer;
pub use outcome::LoadOutcome;
pub use remote::{Endpoint, HttpRemote, MockCall, MockRemote, RemoteClient, ResponseGate};
pub use store::{BusyGuard, LoaderStore, PostsStore, SearchStore};

pub use postboard_types::{
    Comment, Post, PostDetail, PostId, PostsError, RemoteError, ValidationError,
};
