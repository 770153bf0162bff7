//! `PostService` over HTTP: the reqwest-backed implementation that talks
//! to a running quill server.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use quill_types::api::{CreatePostRequest, CreatePostResponse};
use quill_types::models::{Post, PostId};

use crate::service::{PostService, ServiceError};

/// HTTP client for the quill post service.
pub struct HttpPostService {
    client: Client,
    base_url: String,
}

impl HttpPostService {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PostService for HttpPostService {
    async fn create_post(
        &self,
        title: &str,
        body: &str,
        author: Option<&str>,
    ) -> Result<PostId, ServiceError> {
        let req = CreatePostRequest {
            title: title.to_string(),
            body: body.to_string(),
            author: author.map(str::to_string),
        };

        let resp = self
            .client
            .post(format!("{}/posts", self.base_url))
            .json(&req)
            .send()
            .await?;

        if resp.status() != StatusCode::CREATED {
            return Err(ServiceError::UnexpectedStatus(resp.status()));
        }

        let created: CreatePostResponse = resp.json().await?;
        Ok(created.id)
    }

    async fn get_posts(&self) -> Result<Vec<Post>, ServiceError> {
        let resp = self
            .client
            .get(format!("{}/posts", self.base_url))
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            return Err(ServiceError::UnexpectedStatus(resp.status()));
        }

        let posts: Vec<Post> = resp.json().await?;
        Ok(posts)
    }
}
