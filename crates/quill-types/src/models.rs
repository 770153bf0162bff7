use serde::{Deserialize, Serialize};

/// Post identifiers are assigned by the store, sequentially from 0.
pub type PostId = u64;

/// A single blog entry. The store is the only writer: `id` and `timestamp`
/// are assigned at creation and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    /// `None` means the post was published anonymously.
    pub author: Option<String>,
    /// Nanoseconds since the Unix epoch.
    pub timestamp: i64,
}
