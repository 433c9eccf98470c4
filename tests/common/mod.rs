//! Helpers for driving the router in-process.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use restaurant_api::http;
use restaurant_api::lifecycle::RestaurantSystem;
use serde_json::Value;
use tower::ServiceExt;

/// A router backed by freshly started actors with empty stores.
pub fn app() -> Router {
    http::app(RestaurantSystem::new(8).state())
}

/// Sends a request with an optional JSON body and returns the status and parsed body
/// (`Value::Null` for an empty body).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    read(app, request).await
}

/// Sends `raw` verbatim as a JSON-typed body.
pub async fn send_raw(app: &Router, method: &str, uri: &str, raw: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();
    read(app, request).await
}

async fn read(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// The `error` text of an error response.
pub fn error_of(body: &Value) -> &str {
    body["error"].as_str().unwrap_or_default()
}
