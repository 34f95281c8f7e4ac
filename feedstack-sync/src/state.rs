//! Observable feed state.
//!
//! `FeedState` owns every UI-observable field as a latest-value watch
//! channel and is the single writer for all of them. Engine outcomes are
//! folded in with exhaustive matches; readers either take value
//! snapshots or subscribe with the `watch_*` methods.

use crate::engine::SyncEngine;
use crate::stream::countdown;
use feedstack_types::{Outcome, OwnerId, Post, PostId};
use futures::{Stream, StreamExt, pin_mut};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};

const INITIAL_COUNT: i64 = 20;
const COUNTDOWN_FROM: u32 = 10;
const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// The fixed batch seeded by [`FeedState::seed_sample_posts`].
fn sample_posts() -> Vec<Post> {
    vec![
        Post::new(PostId::new(1), "This is Title Sample", OwnerId::new(1)),
        Post::new(PostId::new(2), "title2", OwnerId::new(2)),
        Post::new(PostId::new(3), "title3", OwnerId::new(3)),
    ]
}

/// Holder of the observable feed state.
///
/// Field lifecycles match the holder's own: channels stay open for as
/// long as the `FeedState` lives, and receivers outlive refreshes.
pub struct FeedState {
    engine: Arc<SyncEngine>,
    count: watch::Sender<i64>,
    progress_visible: watch::Sender<bool>,
    posts: watch::Sender<Vec<Post>>,
    last_error: watch::Sender<Option<String>>,
    selected_post: watch::Sender<Option<Post>>,
}

impl FeedState {
    /// Creates the state holder over the given engine.
    pub fn new(engine: Arc<SyncEngine>) -> Self {
        let (count, _) = watch::channel(INITIAL_COUNT);
        let (progress_visible, _) = watch::channel(true);
        let (posts, _) = watch::channel(Vec::new());
        let (last_error, _) = watch::channel(None);
        let (selected_post, _) = watch::channel(None);
        Self {
            engine,
            count,
            progress_visible,
            posts,
            last_error,
            selected_post,
        }
    }

    /// The engine this holder drives.
    pub fn engine(&self) -> &Arc<SyncEngine> {
        &self.engine
    }

    // ── Value snapshots ──────────────────────────────────────────

    /// Current counter value.
    pub fn count(&self) -> i64 {
        *self.count.borrow()
    }

    /// Whether progress is currently shown.
    pub fn progress_visible(&self) -> bool {
        *self.progress_visible.borrow()
    }

    /// Current post list.
    pub fn posts(&self) -> Vec<Post> {
        self.posts.borrow().clone()
    }

    /// Message of the most recent failed fetch, if it has not been
    /// cleared by a success since.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }

    /// The currently selected post, if any.
    pub fn selected_post(&self) -> Option<Post> {
        self.selected_post.borrow().clone()
    }

    // ── Subscriptions ────────────────────────────────────────────

    /// Subscribes to counter updates.
    pub fn watch_count(&self) -> watch::Receiver<i64> {
        self.count.subscribe()
    }

    /// Subscribes to progress visibility updates.
    pub fn watch_progress_visible(&self) -> watch::Receiver<bool> {
        self.progress_visible.subscribe()
    }

    /// Subscribes to post list updates.
    pub fn watch_posts(&self) -> watch::Receiver<Vec<Post>> {
        self.posts.subscribe()
    }

    /// Subscribes to error updates.
    pub fn watch_last_error(&self) -> watch::Receiver<Option<String>> {
        self.last_error.subscribe()
    }

    /// Subscribes to selection updates.
    pub fn watch_selected_post(&self) -> watch::Receiver<Option<Post>> {
        self.selected_post.subscribe()
    }

    // ── Local mutations ──────────────────────────────────────────

    /// Bumps the counter by one. Purely local, no I/O.
    pub fn increment_counter(&self) {
        self.count.send_modify(|count| *count += 1);
    }

    /// Inverts progress visibility.
    pub fn toggle_progress(&self) {
        self.progress_visible.send_modify(|visible| *visible = !*visible);
    }

    // ── Remote-driven state ──────────────────────────────────────

    /// Refreshes the post list from the remote feed.
    ///
    /// Folds the whole fetch stream into observable state and returns
    /// once the terminal outcome has been applied. Overlapping calls
    /// are not coordinated; the last terminal outcome to arrive wins.
    pub async fn refresh_from_remote(&self) {
        let outcomes = self.engine.fetch_feed();
        pin_mut!(outcomes);
        while let Some(outcome) = outcomes.next().await {
            self.apply_feed_outcome(outcome);
        }
    }

    /// Refreshes the post list with a single-shot fetch (no `Loading`,
    /// so progress visibility is left alone).
    pub async fn refresh_once(&self) {
        let outcome = self.engine.fetch_feed_once().await;
        self.apply_feed_outcome(outcome);
    }

    /// Loads one post into the selection.
    pub async fn load_post(&self, id: PostId) {
        let outcomes = self.engine.fetch_post(id);
        pin_mut!(outcomes);
        while let Some(outcome) = outcomes.next().await {
            self.apply_post_outcome(outcome);
        }
    }

    /// Seeds the local store with the fixed sample batch.
    ///
    /// Inserts run sequentially. A failed insert is logged and skipped;
    /// it affects neither the rest of the batch nor observable state.
    pub async fn seed_sample_posts(&self) {
        for post in sample_posts() {
            let id = post.id;
            if let Err(e) = self.engine.add_local_post(post).await {
                warn!("Failed to seed sample post {}: {}", id, e);
            }
        }
    }

    /// Ticks from 10 down to 1, one per second, first immediately.
    pub fn countdown_ticks(&self) -> impl Stream<Item = u32> + use<> {
        countdown(COUNTDOWN_FROM, COUNTDOWN_PERIOD)
    }

    // ── Outcome folding ──────────────────────────────────────────

    fn apply_feed_outcome(&self, outcome: Outcome<Vec<Post>>) {
        match outcome {
            Outcome::Loading => {
                self.progress_visible.send_replace(true);
            }
            Outcome::Success(posts) => {
                debug!("Feed refresh succeeded with {} posts", posts.len());
                self.posts.send_replace(posts);
                self.last_error.send_replace(None);
            }
            Outcome::Error(message) => {
                warn!("Feed refresh failed: {}", message);
                self.last_error.send_replace(Some(message));
            }
        }
    }

    fn apply_post_outcome(&self, outcome: Outcome<Post>) {
        match outcome {
            Outcome::Loading => {
                self.progress_visible.send_replace(true);
            }
            Outcome::Success(post) => {
                debug!("Loaded post {}", post.id);
                self.selected_post.send_replace(Some(post));
                self.last_error.send_replace(None);
            }
            Outcome::Error(message) => {
                warn!("Post load failed: {}", message);
                self.last_error.send_replace(Some(message));
            }
        }
    }
}
