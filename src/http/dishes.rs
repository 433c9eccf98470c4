//! `/dishes` handlers. Dishes cannot be deleted.

use super::{checked, json_body, validate, AppState};
use crate::clients::ActorClient;
use crate::dish_actor::{DishRequest, CREATE_STAGES, READ_STAGES, UPDATE_STAGES};
use crate::error::ApiError;
use crate::model::{Dish, Envelope};
use crate::pipeline::body_data;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_json::Map;

pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Dish>>>, ApiError> {
    let dishes = state.dishes.list().await?;
    Ok(Json(Envelope::new(dishes)))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Envelope<Dish>>), ApiError> {
    let data = body_data(&json_body(&headers, &body)?);
    let req = DishRequest::create(&data);
    validate(CREATE_STAGES, &req)?;

    let dish = state.dishes.create_dish(req.params()?).await?;
    Ok((StatusCode::CREATED, Json(Envelope::new(dish))))
}

pub async fn read(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> Result<Json<Envelope<Dish>>, ApiError> {
    let stored = state.dishes.get(dish_id.clone()).await?;
    let data = Map::new();
    validate(READ_STAGES, &DishRequest::for_route(&dish_id, &data, stored.as_ref()))?;

    Ok(Json(Envelope::new(checked(stored)?)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Envelope<Dish>>, ApiError> {
    let data = body_data(&json_body(&headers, &body)?);
    let stored = state.dishes.get(dish_id.clone()).await?;
    let req = DishRequest::for_route(&dish_id, &data, stored.as_ref());
    validate(UPDATE_STAGES, &req)?;

    let params = req.params()?;
    let dish = state.dishes.update_dish(dish_id.clone(), params).await?;
    Ok(Json(Envelope::new(dish)))
}
