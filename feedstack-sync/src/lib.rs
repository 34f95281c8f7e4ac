//! Feed synchronization core for FeedStack.
//!
//! Mediates between the local SQLite post store and the remote feed
//! API, and owns the observable state an embedding UI watches.
//!
//! # Architecture
//!
//! - **Engine**: one request per call, folded into `Outcome` values at
//!   the sync boundary so raw errors never reach observers
//! - **State**: latest-value watch fields, driven by exhaustive
//!   `Outcome` folding
//! - **Stream adapters**: Loading-then-terminal lifting and timed
//!   countdowns
//!
//! ## Data flow
//!
//! 1. **Fetch**: the engine asks the remote client for posts
//! 2. **Fold**: the state holder matches each `Outcome` into its fields
//! 3. **Observe**: watch subscribers see the latest value of each field
//! 4. **Persist**: local writes go through the store, which republishes
//!    its snapshot to observers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use feedstack_remote::ApiClient;
//! use feedstack_store::PostStore;
//! use feedstack_sync::{FeedState, SyncEngine};
//!
//! let store = Arc::new(PostStore::open_in_memory().unwrap());
//! let remote = Arc::new(ApiClient::with_defaults().unwrap());
//! let state = FeedState::new(Arc::new(SyncEngine::new(store, remote)));
//!
//! assert_eq!(state.count(), 20);
//! ```

mod engine;
mod error;
mod state;
pub mod stream;

pub use engine::SyncEngine;
pub use error::{SyncError, SyncResult};
pub use state::FeedState;
pub use stream::{countdown, outcome_stream};
