//! # board-types
//!
//! Data types for the Postboard data layer.
//!
//! This crate provides the foundational types used across all Postboard crates:
//! - [`Post`], [`Comment`], [`PostId`] - Records served by the remote source
//! - [`RemoteError`], [`ValidationError`], [`PostsError`] - Error taxonomy
//! - [`texts`] - User-facing messages shown by consumers

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod ids;
mod records;
pub mod texts;

pub use error::{PostsError, RemoteError, ValidationError};
pub use ids::PostId;
pub use records::{Comment, Post, PostDetail};
