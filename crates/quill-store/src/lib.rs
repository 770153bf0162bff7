//! Canonical post storage: the ordered collection plus the id and clock
//! authority. One instance owns all post state for the lifetime of the
//! server process; everything else talks to it through `create_post` and
//! `get_posts`.

use std::sync::{Mutex, MutexGuard};

use anyhow::{Result, anyhow};
use chrono::Utc;
use tracing::debug;

use quill_types::models::{Post, PostId};

/// Append-only post collection guarded by a single mutex.
///
/// Id assignment, clock capture, and the append all happen under one lock
/// acquisition, so two concurrent creates can never receive the same id and
/// a reader can never observe a torn collection.
pub struct PostStore {
    inner: Mutex<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    posts: Vec<Post>,
    next_id: PostId,
}

impl PostStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
        }
    }

    /// Append a new post and return its assigned id.
    ///
    /// Ids start at 0 and increase by one per create. The creation timestamp
    /// is captured from the wall clock while the lock is held and is never
    /// touched again.
    pub fn create_post(
        &self,
        title: String,
        body: String,
        author: Option<String>,
    ) -> Result<PostId> {
        let mut inner = self.lock()?;

        let id = inner.next_id;
        inner.next_id += 1;

        // timestamp_nanos_opt only fails past the year 2262; saturate there.
        let timestamp = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);

        inner.posts.push(Post {
            id,
            title,
            body,
            author,
            timestamp,
        });

        debug!("created post {}", id);
        Ok(id)
    }

    /// Snapshot the full collection in creation order.
    ///
    /// The returned vec is the caller's own copy; mutating it has no effect
    /// on the store.
    pub fn get_posts(&self) -> Result<Vec<Post>> {
        Ok(self.lock()?.posts.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>> {
        self.inner
            .lock()
            .map_err(|e| anyhow!("post store lock poisoned: {}", e))
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}
