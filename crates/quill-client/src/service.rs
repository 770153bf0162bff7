//! The remote-call contract: exactly the two operations the post service
//! offers, behind a trait so the state machine can be driven against an
//! in-process fake in tests.

use async_trait::async_trait;

use quill_types::models::{Post, PostId};

/// Failures a remote call can produce. Both kinds get the same treatment
/// from the client (logged, state left alone), but they stay distinct so
/// the log tells the operator what actually went wrong.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request never completed (connection refused, DNS, timeout...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered, but not with the status the contract promises.
    #[error("unexpected status {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}

/// The post service as the client sees it: create one post, or fetch the
/// whole collection. Nothing else crosses this boundary.
#[async_trait]
pub trait PostService {
    /// Create a post and return the id the store assigned to it.
    ///
    /// `author` is `Some` only when the post is signed; `None` means
    /// anonymous and must stay distinct from an empty string.
    async fn create_post(
        &self,
        title: &str,
        body: &str,
        author: Option<&str>,
    ) -> Result<PostId, ServiceError>;

    /// Fetch the complete post collection in creation order.
    async fn get_posts(&self) -> Result<Vec<Post>, ServiceError>;
}
