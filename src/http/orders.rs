//! `/orders` handlers.

use super::{checked, json_body, validate, AppState};
use crate::clients::ActorClient;
use crate::error::ApiError;
use crate::model::{Envelope, Order};
use crate::order_actor::{OrderRequest, CREATE_STAGES, DELETE_STAGES, READ_STAGES, UPDATE_STAGES};
use crate::pipeline::body_data;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_json::Map;

pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Order>>>, ApiError> {
    let orders = state.orders.list().await?;
    Ok(Json(Envelope::new(orders)))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Envelope<Order>>), ApiError> {
    let data = body_data(&json_body(&headers, &body)?);
    let req = OrderRequest::create(&data);
    validate(CREATE_STAGES, &req)?;

    let order = state.orders.create_order(req.create_params()?).await?;
    Ok((StatusCode::CREATED, Json(Envelope::new(order))))
}

pub async fn read(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Envelope<Order>>, ApiError> {
    let stored = state.orders.get(order_id.clone()).await?;
    let data = Map::new();
    validate(READ_STAGES, &OrderRequest::for_route(&order_id, &data, stored.as_ref()))?;

    Ok(Json(Envelope::new(checked(stored)?)))
}

/// Submitted `dishes` are validated but the stored line items are kept.
pub async fn update(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Envelope<Order>>, ApiError> {
    let data = body_data(&json_body(&headers, &body)?);
    let stored = state.orders.get(order_id.clone()).await?;
    let req = OrderRequest::for_route(&order_id, &data, stored.as_ref());
    validate(UPDATE_STAGES, &req)?;

    let params = req.update_params()?;
    let order = state.orders.update_order(order_id.clone(), params).await?;
    Ok(Json(Envelope::new(order)))
}

pub async fn destroy(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let stored = state.orders.get(order_id.clone()).await?;
    let data = Map::new();
    validate(DELETE_STAGES, &OrderRequest::for_route(&order_id, &data, stored.as_ref()))?;

    state.orders.delete_order(order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
