pub mod posts;

use std::sync::Arc;

use axum::{Router, routing::get};

use quill_store::PostStore;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: PostStore,
}

/// Assemble the service routes. Outer layers (CORS, request tracing) are
/// the server binary's concern.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/health", get(health))
        .with_state(state)
}

/// GET /health — liveness check (no auth).
async fn health() -> &'static str {
    "ok"
}
