//! SQLite-backed local store for FeedStack.
//!
//! Persists feed posts in a single `posts` table and exposes the stored
//! list as a latest-value watch channel. The observed list always equals
//! the rows currently persisted: a fresh snapshot is published after
//! every mutation, while the connection lock is still held, so snapshots
//! arrive in write order.

mod error;
mod post_store;

pub use error::{StoreError, StoreResult};
pub use post_store::PostStore;
