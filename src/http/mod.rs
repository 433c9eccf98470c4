//! # HTTP Layer
//!
//! The axum [`Router`] in front of the actors. Each handler follows the same shape:
//!
//! 1. Look up the stored record for the route id, if the route has one.
//! 2. Run the operation's stage list from [`dish_actor`](crate::dish_actor) or
//!    [`order_actor`](crate::order_actor).
//! 3. Convert the body into the typed payload and send it to the actor.
//! 4. Wrap the result as `{"data": ...}`.
//!
//! Every failure is an [`ApiError`], rendered as `{"error": ...}`.

pub mod dishes;
pub mod orders;

use crate::clients::{DishClient, OrderClient};
use crate::error::ApiError;
use crate::pipeline::run_stages;
use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, Uri};
use axum::routing::get;
use axum::Router;
use serde_json::Value;
use tracing::debug;

/// Clients the handlers talk to.
#[derive(Clone)]
pub struct AppState {
    pub dishes: DishClient,
    pub orders: OrderClient,
}

/// Builds the full router.
///
/// | Path                 | Methods            |
/// |----------------------|--------------------|
/// | `/dishes`            | GET, POST          |
/// | `/dishes/{dishId}`   | GET, PUT           |
/// | `/orders`            | GET, POST          |
/// | `/orders/{orderId}`  | GET, PUT, DELETE   |
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/dishes",
            get(dishes::list)
                .post(dishes::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/dishes/{dish_id}",
            get(dishes::read)
                .put(dishes::update)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders",
            get(orders::list)
                .post(orders::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/orders/{order_id}",
            get(orders::read)
                .put(orders::update)
                .delete(orders::destroy)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .with_state(state)
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{method} not allowed for {}", uri.path()))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Path not found: {}", uri.path()))
}

/// Parses the request body. A missing body, or one not sent as JSON, reads as `null`, so
/// the field stages report what is missing. Malformed JSON is a 400.
fn json_body(headers: &HeaderMap, body: &Bytes) -> Result<Value, ApiError> {
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json") || ct.contains("+json"));
    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| {
        ApiError::InvalidField(format!("Failed to parse the request body as JSON: {e}"))
    })
}

/// [`run_stages`] with the rejection logged.
fn validate<C, F>(stages: &[F], ctx: &C) -> Result<(), ApiError>
where
    F: Fn(&C) -> Result<(), ApiError>,
{
    run_stages(stages, ctx).inspect_err(|e| debug!(error = %e, "Rejected by pipeline"))
}

/// The record an existence stage has already vouched for.
fn checked<T>(stored: Option<T>) -> Result<T, ApiError> {
    stored.ok_or_else(|| ApiError::Internal("record vanished after existence check".into()))
}
