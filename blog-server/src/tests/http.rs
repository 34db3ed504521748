use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use super::memory_store::MemoryStore;
use crate::application::blog_service::BlogService;
use crate::presentation::AppState;
use crate::server::build_router;

fn app(store: &MemoryStore) -> Router {
    let service = BlogService::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
    );
    build_router(AppState::new(Arc::new(service)))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body must be readable");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request must build");
    send(app, request).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request must build");
    send(app, request).await
}

fn mock_user() -> Value {
    json!({
        "name": "Sally Low",
        "username": "sally",
        "email": "sally@example.org"
    })
}

fn mock_post(author: i64) -> Value {
    json!({
        "title": "Test Post",
        "body": "This is just a test post with no content.",
        "author": author
    })
}

async fn create(app: &Router, uri: &str, body: Value) -> i64 {
    let (status, resp) = post_json(app, uri, body).await;
    assert_eq!(status, StatusCode::OK, "POST {uri} failed: {resp}");
    resp["id"].as_i64().expect("id must be a number")
}

#[tokio::test]
async fn post_user_with_valid_data_returns_new_user_id() {
    let store = MemoryStore::default();
    let app = app(&store);

    let (status, body) = post_json(&app, "/user", mock_user()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].is_i64());
    assert_eq!(body.as_object().map(|fields| fields.len()), Some(1));
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn post_user_with_empty_object_returns_400_and_inserts_nothing() {
    let store = MemoryStore::default();
    let app = app(&store);

    let (status, body) = post_json(&app, "/user", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "request body must not be empty");
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
async fn post_user_without_body_returns_400() {
    let store = MemoryStore::default();
    let app = app(&store);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/user")
        .body(Body::empty())
        .expect("request must build");

    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
async fn post_user_with_malformed_json_returns_400() {
    let store = MemoryStore::default();
    let app = app(&store);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/user")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .expect("request must build");

    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn post_user_missing_field_returns_400() {
    let store = MemoryStore::default();
    let app = app(&store);

    let (status, body) = post_json(
        &app,
        "/user",
        json!({ "name": "Sally Low", "username": "sally" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|message| message.contains("email"))
    );
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
async fn post_user_ignores_caller_supplied_id_and_timestamps() {
    let store = MemoryStore::default();
    let app = app(&store);
    let mut payload = mock_user();
    payload["id"] = json!(999);
    payload["created_at"] = json!("2000-01-01T00:00:00Z");

    let id = create(&app, "/user", payload).await;
    assert_eq!(id, 1);

    let (_, user) = get(&app, "/user/1").await;
    assert_ne!(user["created_at"], "2000-01-01T00:00:00Z");
}

#[tokio::test]
async fn get_user_returns_saved_user_object() {
    let store = MemoryStore::default();
    let app = app(&store);
    let id = create(&app, "/user", mock_user()).await;

    let (status, body) = get(&app, &format!("/user/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    let fields = body.as_object().expect("user must be an object");
    let mut keys: Vec<_> = fields.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["created_at", "email", "id", "name", "updated_at", "username"]
    );
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Sally Low");
    assert_eq!(body["username"], "sally");
    assert_eq!(body["email"], "sally@example.org");
}

#[tokio::test]
async fn get_user_returns_fields_exactly_as_posted() {
    let store = MemoryStore::default();
    let app = app(&store);
    let payload = json!({
        "name": " Sally Low",
        "username": "Sally ",
        "email": "Sally@Example.org"
    });

    let id = create(&app, "/user", payload.clone()).await;
    let (status, body) = get(&app, &format!("/user/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], payload["name"]);
    assert_eq!(body["username"], payload["username"]);
    assert_eq!(body["email"], payload["email"]);
}

#[tokio::test]
async fn post_user_stores_email_without_format_check() {
    let store = MemoryStore::default();
    let app = app(&store);

    let id = create(
        &app,
        "/user",
        json!({ "name": "Bob", "username": "bob", "email": "bob" }),
    )
    .await;

    let (_, body) = get(&app, &format!("/user/{id}")).await;
    assert_eq!(body["email"], "bob");
}

#[tokio::test]
async fn post_user_with_name_wider_than_column_returns_400() {
    let store = MemoryStore::default();
    let app = app(&store);
    let mut payload = mock_user();
    payload["name"] = json!("x".repeat(256));

    let (status, _) = post_json(&app, "/user", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(store.user_count(), 0);
}

#[tokio::test]
async fn get_post_returns_title_and_body_exactly_as_posted() {
    let store = MemoryStore::default();
    let app = app(&store);
    let post_id = create(
        &app,
        "/post",
        json!({ "title": "  Mixed Case Title ", "body": "\n Body With Padding  " }),
    )
    .await;
    let comment_author = create(&app, "/user", mock_user()).await;
    create(
        &app,
        "/comment",
        json!({ "body": " Padded Comment ", "user_id": comment_author, "post_id": post_id }),
    )
    .await;

    let (status, body) = get(&app, &format!("/post/{post_id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "  Mixed Case Title ");
    assert_eq!(body["body"], "\n Body With Padding  ");
    assert_eq!(body["comments"][0]["body"], " Padded Comment ");
}

#[tokio::test]
async fn get_user_with_unknown_id_returns_404() {
    let store = MemoryStore::default();
    let app = app(&store);

    let (status, _) = get(&app, "/user/7009").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_user_with_non_numeric_id_returns_400() {
    let store = MemoryStore::default();
    let app = app(&store);

    let (status, body) = get(&app, "/user/sally").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn get_user_includes_posts_and_comments_on_request() {
    let store = MemoryStore::default();
    let app = app(&store);
    let user_id = create(&app, "/user", mock_user()).await;
    let other_id = create(
        &app,
        "/user",
        json!({ "name": "Bob", "username": "bob", "email": "bob@example.org" }),
    )
    .await;
    let post_id = create(&app, "/post", mock_post(user_id)).await;
    create(&app, "/post", mock_post(other_id)).await;
    create(
        &app,
        "/comment",
        json!({ "body": "first!", "user_id": user_id, "post_id": post_id }),
    )
    .await;

    let (status, body) = get(&app, &format!("/user/{user_id}?include=posts,comments")).await;

    assert_eq!(status, StatusCode::OK);
    let posts = body["posts"].as_array().expect("posts must be an array");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["id"], post_id);
    assert_eq!(posts[0]["author"], user_id);
    let comments = body["comments"]
        .as_array()
        .expect("comments must be an array");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["body"], "first!");
}

#[tokio::test]
async fn get_user_with_unknown_include_returns_400() {
    let store = MemoryStore::default();
    let app = app(&store);
    let id = create(&app, "/user", mock_user()).await;

    let (status, body) = get(&app, &format!("/user/{id}?include=followers")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown relation: followers");
}

#[tokio::test]
async fn post_post_with_author_returns_new_post_id() {
    let store = MemoryStore::default();
    let app = app(&store);
    let user_id = create(&app, "/user", mock_user()).await;

    let (status, body) = post_json(&app, "/post", mock_post(user_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].is_i64());
    assert_eq!(store.post_count(), 1);
}

#[tokio::test]
async fn post_post_with_empty_object_returns_400() {
    let store = MemoryStore::default();
    let app = app(&store);

    let (status, _) = post_json(&app, "/post", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(store.post_count(), 0);
}

#[tokio::test]
async fn post_post_with_unknown_author_returns_500_without_detail() {
    let store = MemoryStore::default();
    let app = app(&store);

    let (status, body) = post_json(&app, "/post", mock_post(42)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal error");
    assert_eq!(store.post_count(), 0);
}

#[tokio::test]
async fn get_post_nests_author_and_comments() {
    let store = MemoryStore::default();
    let app = app(&store);
    let user_id = create(&app, "/user", mock_user()).await;
    let post_id = create(&app, "/post", mock_post(user_id)).await;

    let (status, body) = get(&app, &format!("/post/{post_id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], post_id);
    assert_eq!(body["title"], "Test Post");
    assert_eq!(body["body"], "This is just a test post with no content.");
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
    assert!(body["author"].is_object());
    assert_eq!(body["author"]["id"], user_id);
    assert_eq!(body["author"]["name"], "Sally Low");
    assert_eq!(body["comments"], json!([]));
}

#[tokio::test]
async fn get_post_returns_exactly_its_comments() {
    let store = MemoryStore::default();
    let app = app(&store);
    let user_id = create(&app, "/user", mock_user()).await;
    let post_id = create(&app, "/post", mock_post(user_id)).await;
    let other_post_id = create(&app, "/post", mock_post(user_id)).await;
    for body in ["one", "two", "three"] {
        create(
            &app,
            "/comment",
            json!({ "body": body, "user_id": user_id, "post_id": post_id }),
        )
        .await;
    }
    create(
        &app,
        "/comment",
        json!({ "body": "elsewhere", "user_id": user_id, "post_id": other_post_id }),
    )
    .await;

    let (status, body) = get(&app, &format!("/post/{post_id}")).await;

    assert_eq!(status, StatusCode::OK);
    let comments = body["comments"]
        .as_array()
        .expect("comments must be an array");
    assert_eq!(comments.len(), 3);
    let bodies: Vec<_> = comments
        .iter()
        .map(|comment| comment["body"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(bodies, vec!["one", "two", "three"]);
    assert!(comments.iter().all(|comment| comment["post_id"] == post_id));
}

#[tokio::test]
async fn get_post_without_author_serializes_null_author() {
    let store = MemoryStore::default();
    let app = app(&store);
    let post_id = create(
        &app,
        "/post",
        json!({ "title": "Orphan", "body": "nobody wrote this" }),
    )
    .await;

    let (status, body) = get(&app, &format!("/post/{post_id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["author"].is_null());
}

#[tokio::test]
async fn get_post_with_unknown_id_returns_404() {
    let store = MemoryStore::default();
    let app = app(&store);

    let (status, _) = get(&app, "/post/10000095").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_posts_returns_every_post() {
    let store = MemoryStore::default();
    let app = app(&store);

    let (status, body) = get(&app, "/posts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let user_id = create(&app, "/user", mock_user()).await;
    let first = create(&app, "/post", mock_post(user_id)).await;
    let second = create(&app, "/post", mock_post(user_id)).await;

    let (status, body) = get(&app, "/posts").await;

    assert_eq!(status, StatusCode::OK);
    let posts = body.as_array().expect("posts must be an array");
    assert_eq!(posts.len(), store.post_count());
    assert_eq!(posts[0]["id"], first);
    assert_eq!(posts[1]["id"], second);
    assert_eq!(posts[0]["author"], user_id);
}

#[tokio::test]
async fn post_comment_with_valid_data_returns_new_comment_id() {
    let store = MemoryStore::default();
    let app = app(&store);
    let user_id = create(&app, "/user", mock_user()).await;
    let post_id = create(&app, "/post", mock_post(user_id)).await;

    let (status, body) = post_json(
        &app,
        "/comment",
        json!({
            "body": "This is just a test comment.",
            "user_id": user_id,
            "post_id": post_id
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].is_i64());
    assert_eq!(store.comment_count(), 1);
}

#[tokio::test]
async fn post_comment_with_empty_object_returns_400() {
    let store = MemoryStore::default();
    let app = app(&store);

    let (status, _) = post_json(&app, "/comment", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(store.comment_count(), 0);
}

#[tokio::test]
async fn post_comment_on_missing_post_returns_500() {
    let store = MemoryStore::default();
    let app = app(&store);
    let user_id = create(&app, "/user", mock_user()).await;

    let (status, _) = post_json(
        &app,
        "/comment",
        json!({ "body": "lost", "user_id": user_id, "post_id": 77 }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(store.comment_count(), 0);
}

#[tokio::test]
async fn healthz_reports_ok() {
    let store = MemoryStore::default();
    let app = app(&store);

    let (status, body) = get(&app, "/healthz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let store = MemoryStore::default();
    let app = app(&store);

    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/post/{id}"].is_object());
}
