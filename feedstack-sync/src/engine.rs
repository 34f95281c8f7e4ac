//! Synchronizer between the local post store and the remote feed API.
//!
//! The engine owns shared handles to both sides, injected at
//! construction. Remote failures are folded into `Outcome::Error` at
//! this boundary; raw transport errors never reach the state holder.

use crate::error::{SyncError, SyncResult};
use crate::stream::outcome_stream;
use feedstack_remote::ApiClient;
use feedstack_store::PostStore;
use feedstack_types::{Outcome, Post, PostId};
use futures::Stream;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task;
use tracing::debug;

/// Mediates between the local store and the remote feed API.
///
/// Calls are independent: no caching, no deduplication, no ordering
/// between concurrent callers.
pub struct SyncEngine {
    store: Arc<PostStore>,
    remote: Arc<ApiClient>,
}

impl SyncEngine {
    /// Creates an engine over the given store and remote client.
    pub fn new(store: Arc<PostStore>, remote: Arc<ApiClient>) -> Self {
        Self { store, remote }
    }

    // ── Remote reads ─────────────────────────────────────────────

    /// Streams one feed refresh: `Loading`, then the terminal outcome.
    ///
    /// Each subscription performs exactly one request once polled.
    pub fn fetch_feed(&self) -> impl Stream<Item = Outcome<Vec<Post>>> + use<> {
        let remote = self.remote.clone();
        outcome_stream(async move {
            remote
                .fetch_posts()
                .await
                .map_err(|e| format!("network request failed: {e}"))
        })
    }

    /// Fetches the feed once, without the `Loading` stage.
    pub async fn fetch_feed_once(&self) -> Outcome<Vec<Post>> {
        match self.remote.fetch_posts().await {
            Ok(posts) => Outcome::Success(posts),
            Err(e) => Outcome::Error(format!("network request failed: {e}")),
        }
    }

    /// Streams one single-post fetch: `Loading`, then the terminal
    /// outcome.
    pub fn fetch_post(&self, id: PostId) -> impl Stream<Item = Outcome<Post>> + use<> {
        let remote = self.remote.clone();
        outcome_stream(async move {
            remote
                .fetch_post(id)
                .await
                .map_err(|e| format!("network request failed: {e}"))
        })
    }

    // ── Local store ──────────────────────────────────────────────

    /// Subscribes to the locally stored post list.
    pub fn observe_local_posts(&self) -> watch::Receiver<Vec<Post>> {
        self.store.observe()
    }

    /// Inserts a post into the local store.
    ///
    /// Returns the post as stored, with its assigned id.
    pub async fn add_local_post(&self, post: Post) -> SyncResult<Post> {
        let store = self.store.clone();
        let stored = task::spawn_blocking(move || store.insert(&post))
            .await
            .map_err(|e| SyncError::Task(format!("insert task failed: {e}")))??;
        debug!("Added local post {}", stored.id);
        Ok(stored)
    }

    /// Removes a post from the local store. Removing an absent post is
    /// a no-op.
    pub async fn remove_local_post(&self, post: Post) -> SyncResult<()> {
        let id = post.id;
        let store = self.store.clone();
        task::spawn_blocking(move || store.remove(&post))
            .await
            .map_err(|e| SyncError::Task(format!("remove task failed: {e}")))??;
        debug!("Removed local post {}", id);
        Ok(())
    }
}
