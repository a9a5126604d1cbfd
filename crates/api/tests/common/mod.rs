#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use readrate_api::config::ServerConfig;
use readrate_api::router::build_app_router;
use readrate_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

/// Username/password pair sent as HTTP Basic credentials.
#[derive(Debug, Clone, Copy)]
pub struct Creds<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub const ALICE: Creds<'static> = Creds {
    username: "alice",
    password: "pw123",
};

pub const BOB: Creds<'static> = Creds {
    username: "bob",
    password: "hunter2",
};

fn basic_header(creds: Creds<'_>) -> String {
    let raw = format!("{}:{}", creds.username, creds.password);
    format!("Basic {}", STANDARD.encode(raw))
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    creds: Option<Creds<'_>>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(creds) = creds {
        builder = builder.header(AUTHORIZATION, basic_header(creds));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, creds: Creds<'_>, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(creds), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, creds: Creds<'_>, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(creds), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, creds: Creds<'_>) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(creds), None).await
}

/// Send a request with no `Authorization` header.
pub async fn send_anonymous(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    send(app, method, uri, None, body).await
}

/// Send a request with an arbitrary raw `Authorization` header value.
pub async fn post_json_raw_auth(app: Router, uri: &str, header: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(AUTHORIZATION, header)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Register `creds` through the API.
pub async fn register(pool: &PgPool, creds: Creds<'_>) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/register",
        serde_json::json!({ "username": creds.username, "password": creds.password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "registration should succeed");
}

/// Create a category as `creds` and return its id.
pub async fn create_category(pool: &PgPool, creds: Creds<'_>, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/categories", creds, serde_json::json!({ "name": name })).await;
    assert_eq!(response.status(), StatusCode::OK, "category creation should succeed");

    let app = build_test_app(pool.clone());
    let json = body_json(get(app, "/categories").await).await;
    json["items"]
        .as_array()
        .unwrap()
        .iter()
        .rev()
        .find(|c| c["name"] == name)
        .and_then(|c| c["id"].as_i64())
        .expect("created category should be listed")
}

/// Request body for a valid book.
pub fn book_body(category_id: i64, title: &str, total_page: i64) -> Value {
    serde_json::json!({
        "title": title,
        "description": "A test book",
        "image_url": "https://example.com/cover.png",
        "release_year": 2000,
        "price": 75000,
        "total_page": total_page,
        "category_id": category_id,
    })
}

/// Create a book as `creds` and return its id.
pub async fn create_book(pool: &PgPool, creds: Creds<'_>, body: Value) -> i64 {
    let title = body["title"].as_str().unwrap().to_string();
    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/books", creds, body).await;
    assert_eq!(response.status(), StatusCode::OK, "book creation should succeed");

    let app = build_test_app(pool.clone());
    let json = body_json(get(app, "/books").await).await;
    json["items"]
        .as_array()
        .unwrap()
        .iter()
        .rev()
        .find(|b| b["title"] == title.as_str())
        .and_then(|b| b["id"].as_i64())
        .expect("created book should be listed")
}

/// Create a review on `book_id` as `creds` and return its id.
pub async fn create_review(pool: &PgPool, creds: Creds<'_>, book_id: i64, rating: i64) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/books/{book_id}/reviews"),
        creds,
        serde_json::json!({ "rating": rating, "comment": "test review" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "review creation should succeed");

    let id: (i64,) = sqlx::query_as(
        "SELECT r.id FROM reviews r JOIN users u ON u.id = r.user_id
         WHERE r.book_id = $1 AND u.username = $2",
    )
    .bind(book_id)
    .bind(creds.username)
    .fetch_one(pool)
    .await
    .unwrap();
    id.0
}
