use serde::{Deserialize, Serialize};

use crate::models::PostId;

// -- Posts --

/// Body of `POST /posts`. Both ends of the wire share this type: the client
/// serializes it, the server deserializes it.
///
/// `author` stays a true optional — a missing key and an explicit `null`
/// both mean anonymous. Collapsing it to an empty string would lose the
/// distinction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub id: PostId,
}
