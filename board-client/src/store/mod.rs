//! Shared stores read by the rendering layer.
//!
//! Each store is a cheap-to-clone handle around a `tokio::sync::watch`
//! channel holding the pure state from `board-core`. Clones share the same
//! state; consumers either read a snapshot or `subscribe()` to be woken on
//! change. All mutation goes through the narrow operations on each store.
//!
//! Stores are constructed once at startup and passed to whoever needs them.

mod loader;
mod posts;
mod search;

pub use loader::{BusyGuard, LoaderStore};
pub use posts::PostsStore;
pub use search::SearchStore;
