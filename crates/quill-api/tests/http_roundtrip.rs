//! Integration tests over a real socket: a quill server on a loopback
//! port, exercised by a real HTTP client.

use std::sync::Arc;

use quill_api::AppStateInner;
use quill_client::{HttpPostService, PostListClient};
use quill_store::PostStore;
use quill_types::models::Post;

/// Bind the service on an ephemeral loopback port and return its base URL.
async fn spawn_server() -> String {
    let state = Arc::new(AppStateInner {
        store: PostStore::new(),
    });
    let app = quill_api::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn create_then_list_round_trip() {
    let base = spawn_server().await;
    let http = reqwest::Client::new();

    let resp = http
        .post(format!("{}/posts", base))
        .json(&serde_json::json!({
            "title": "Hello",
            "body": "World",
            "author": "Alice",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    let created: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(created["id"], 0);

    let posts: Vec<Post> = http
        .get(format!("{}/posts", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 0);
    assert_eq!(posts[0].title, "Hello");
    assert_eq!(posts[0].author.as_deref(), Some("Alice"));
    assert!(posts[0].timestamp > 0);
}

#[tokio::test]
async fn anonymous_author_survives_the_wire() {
    let base = spawn_server().await;
    let http = reqwest::Client::new();

    let resp = http
        .post(format!("{}/posts", base))
        .json(&serde_json::json!({"title": "Hello", "body": "World"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

    let posts: Vec<Post> = http
        .get(format!("{}/posts", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(posts[0].author, None);
}

#[tokio::test]
async fn empty_title_is_rejected() {
    let base = spawn_server().await;
    let http = reqwest::Client::new();

    let resp = http
        .post(format!("{}/posts", base))
        .json(&serde_json::json!({"title": "", "body": "World"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    let posts: Vec<Post> = http
        .get(format!("{}/posts", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn health_answers_ok() {
    let base = spawn_server().await;

    let resp = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn client_submit_flow_against_a_live_server() {
    let base = spawn_server().await;
    let mut client = PostListClient::new(HttpPostService::new(base));

    client.refresh().await;
    assert!(client.posts().is_empty());

    client.open_form();
    client.set_title("First post");
    client.set_body("Written over a real socket");
    client.submit().await;

    assert!(!client.form().open);
    assert_eq!(client.posts().len(), 1);
    assert_eq!(client.posts()[0].title, "First post");
    assert_eq!(client.posts()[0].author, None);
}
