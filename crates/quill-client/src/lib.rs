//! Client-side view of the post collection: a cached copy of the remote
//! list plus the create-post form state machine. Rendering is someone
//! else's job; a UI layer reads the state exposed here and feeds user
//! actions back into it.

pub mod display;
pub mod http;
pub mod list;
pub mod service;

// Re-export key types for convenience.
pub use http::HttpPostService;
pub use list::{CreatePostForm, FieldErrors, PostListClient};
pub use service::{PostService, ServiceError};
