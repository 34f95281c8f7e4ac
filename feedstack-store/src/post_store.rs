//! SQLite-backed persistence for feed posts.
//!
//! A single connection behind a mutex serializes all access. Every
//! mutation republishes the full row set on a watch channel, so
//! subscribers always observe exactly what is persisted, in id order.

use crate::error::StoreResult;
use feedstack_types::{OwnerId, Post, PostId};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Mutex;
use tokio::sync::watch;

/// Local store for feed posts backed by SQLite.
///
/// All methods take `&self`; share the store behind an `Arc` to use it
/// from several tasks.
pub struct PostStore {
    conn: Mutex<Connection>,
    snapshot_tx: watch::Sender<Vec<Post>>,
}

impl PostStore {
    /// Opens (or creates) a post store at the given path.
    pub fn new(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens an in-memory post store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                owner_id INTEGER NOT NULL
            );",
        )?;
        let initial = query_posts(&conn)?;
        let (snapshot_tx, _) = watch::channel(initial);
        Ok(Self {
            conn: Mutex::new(conn),
            snapshot_tx,
        })
    }

    /// Inserts a post, assigning an id when the post does not carry one
    /// yet.
    ///
    /// Returns the post as stored. Inserting an explicit id that already
    /// exists fails with the underlying constraint error.
    pub fn insert(&self, post: &Post) -> StoreResult<Post> {
        let conn = self.conn.lock().unwrap();
        let stored = if post.id.is_unassigned() {
            conn.execute(
                "INSERT INTO posts (title, owner_id) VALUES (?1, ?2)",
                params![post.title, post.owner_id.as_i64()],
            )?;
            Post::new(
                PostId::new(conn.last_insert_rowid()),
                post.title.clone(),
                post.owner_id,
            )
        } else {
            conn.execute(
                "INSERT INTO posts (id, title, owner_id) VALUES (?1, ?2, ?3)",
                params![post.id.as_i64(), post.title, post.owner_id.as_i64()],
            )?;
            post.clone()
        };
        self.publish(&conn)?;
        Ok(stored)
    }

    /// Removes a post by id. Removing a post that is not stored is not an
    /// error.
    pub fn remove(&self, post: &Post) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "DELETE FROM posts WHERE id = ?1",
            params![post.id.as_i64()],
        )?;
        self.publish(&conn)?;
        Ok(())
    }

    /// Returns all stored posts in id order.
    pub fn all_posts(&self) -> StoreResult<Vec<Post>> {
        let conn = self.conn.lock().unwrap();
        query_posts(&conn)
    }

    /// Subscribes to the stored post list.
    ///
    /// The receiver holds the current list immediately and gets a fresh
    /// snapshot after every mutation. A subscriber that falls behind
    /// observes only the latest snapshot; intermediates are dropped.
    pub fn observe(&self) -> watch::Receiver<Vec<Post>> {
        self.snapshot_tx.subscribe()
    }

    // Runs while the caller still holds the connection lock so snapshots
    // are published in the same order as the writes that produced them.
    fn publish(&self, conn: &Connection) -> StoreResult<()> {
        let posts = query_posts(conn)?;
        self.snapshot_tx.send_replace(posts);
        Ok(())
    }
}

fn query_posts(conn: &Connection) -> StoreResult<Vec<Post>> {
    let mut stmt = conn.prepare("SELECT id, title, owner_id FROM posts ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Post::new(
            PostId::new(row.get(0)?),
            row.get::<_, String>(1)?,
            OwnerId::new(row.get(2)?),
        ))
    })?;

    let mut posts = Vec::new();
    for row in rows {
        posts.push(row?);
    }
    Ok(posts)
}
