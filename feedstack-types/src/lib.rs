//! Core type definitions for FeedStack.
//!
//! This crate defines the fundamental types shared by the store, remote,
//! and sync layers:
//! - `Post` and its integer identifier newtypes
//! - `Outcome`, the tagged union describing one asynchronous attempt
//!
//! Anything UI-facing (view models, rendering state) belongs to the
//! embedding application, not here.

mod ids;
mod outcome;
mod post;

pub use ids::{OwnerId, PostId};
pub use outcome::Outcome;
pub use post::Post;
