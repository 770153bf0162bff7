use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

use quill_types::api::{CreatePostRequest, CreatePostResponse};

use crate::AppState;

/// POST /posts — append a new post; the store assigns its id and timestamp.
///
/// The create form already refuses blank fields, but the service checks
/// again so a raw caller cannot store an empty post.
pub async fn create_post(
    State(state): State<AppState>,
    Json(req): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    // Validate input
    if req.title.is_empty() || req.body.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let id = state
        .store
        .create_post(req.title, req.body, req.author)
        .map_err(|e| {
            error!("failed to create post: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok((StatusCode::CREATED, Json(CreatePostResponse { id })))
}

/// GET /posts — the full collection in creation order.
pub async fn list_posts(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let posts = state.store.get_posts().map_err(|e| {
        error!("failed to list posts: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(posts))
}
