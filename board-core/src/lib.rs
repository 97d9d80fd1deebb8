//! # board-core
//!
//! Pure logic for Postboard (no I/O, instant tests).
//!
//! This crate implements the state and derivations behind the data layer
//! without any network access, enabling fast unit tests.
//!
//! ## Design Philosophy
//!
//! All modules in this crate are **pure** - they take input and produce output
//! without side effects:
//! - [`LoaderState`] counts outstanding calls and holds the current error
//! - [`PostsCollection`] owns the canonical posts and local id assignment
//! - [`filter_posts`] derives the searched view
//! - [`Generation`] hands out tokens used to discard stale completions
//! - [`DetailState`] tracks a single detail view's lifecycle
//!
//! The actual I/O is performed by `board-client`, which wraps these in
//! shared stores and drives them around remote calls.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod detail;
pub mod filter;
pub mod generation;
pub mod loader;
pub mod posts;

pub use detail::{DetailEvent, DetailState};
pub use filter::{filter_posts, title_matches};
pub use generation::{Generation, GenerationToken};
pub use loader::{LoaderSnapshot, LoaderState};
pub use posts::{AddResult, PostsCollection};
