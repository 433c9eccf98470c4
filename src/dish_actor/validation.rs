//! Validation stages for dish requests.
//!
//! | Operation | Stages, in order |
//! |-----------|------------------|
//! | create    | name, description, image_url, price |
//! | read      | exists |
//! | update    | exists, name, description, image_url, price, id matches route |

use crate::error::ApiError;
use crate::model::{Dish, DishCreate};
use crate::pipeline::{positive_integer, supplied_id, text_field};
use serde_json::{Map, Value};

/// A dish pipeline stage; higher-ranked so one list serves every request lifetime.
pub type DishStage = for<'a, 'b> fn(&'a DishRequest<'b>) -> Result<(), ApiError>;

pub const PRICE_MESSAGE: &str = "Dish must have a price that is an integer greater than 0";

/// Everything a dish stage may inspect.
#[derive(Debug, Clone, Copy)]
pub struct DishRequest<'a> {
    /// The `{dishId}` path segment, for routes that have one.
    pub route_id: Option<&'a str>,
    /// The body's `data` object.
    pub data: &'a Map<String, Value>,
    /// The stored dish the route id resolved to, if any.
    pub stored: Option<&'a Dish>,
}

impl<'a> DishRequest<'a> {
    pub fn create(data: &'a Map<String, Value>) -> Self {
        Self {
            route_id: None,
            data,
            stored: None,
        }
    }

    pub fn for_route(route_id: &'a str, data: &'a Map<String, Value>, stored: Option<&'a Dish>) -> Self {
        Self {
            route_id: Some(route_id),
            data,
            stored,
        }
    }

    /// Extracts the typed payload. Fails with the same errors as the field stages.
    pub fn params(&self) -> Result<DishCreate, ApiError> {
        Ok(DishCreate {
            name: require_text(self.data, "name")?.to_string(),
            description: require_text(self.data, "description")?.to_string(),
            price: require_price(self.data)?,
            image_url: require_text(self.data, "image_url")?.to_string(),
        })
    }

    fn route(&self) -> &'a str {
        self.route_id.unwrap_or_default()
    }
}

fn require_text<'a>(data: &'a Map<String, Value>, field: &str) -> Result<&'a str, ApiError> {
    text_field(data, field).ok_or_else(|| {
        let article = if field.starts_with(['a', 'e', 'i', 'o', 'u']) { "an" } else { "a" };
        ApiError::MissingField(format!("Dish must include {article} {field}"))
    })
}

fn require_price(data: &Map<String, Value>) -> Result<u64, ApiError> {
    positive_integer(data.get("price")).ok_or_else(|| ApiError::InvalidField(PRICE_MESSAGE.into()))
}

pub fn dish_exists(req: &DishRequest<'_>) -> Result<(), ApiError> {
    match req.stored {
        Some(_) => Ok(()),
        None => Err(ApiError::NotFound(format!(
            "Dish does not exist: {}.",
            req.route()
        ))),
    }
}

pub fn has_name(req: &DishRequest<'_>) -> Result<(), ApiError> {
    require_text(req.data, "name").map(|_| ())
}

pub fn has_description(req: &DishRequest<'_>) -> Result<(), ApiError> {
    require_text(req.data, "description").map(|_| ())
}

pub fn has_image_url(req: &DishRequest<'_>) -> Result<(), ApiError> {
    require_text(req.data, "image_url").map(|_| ())
}

/// Zero, negatives, fractions and non-numbers all get the same message.
pub fn price_is_valid(req: &DishRequest<'_>) -> Result<(), ApiError> {
    require_price(req.data).map(|_| ())
}

pub fn dish_id_matches(req: &DishRequest<'_>) -> Result<(), ApiError> {
    match supplied_id(req.data) {
        Some(body_id) if body_id != req.route() => Err(ApiError::Conflict(format!(
            "Dish id does not match route id. Dish: {body_id}, Route: {}.",
            req.route()
        ))),
        _ => Ok(()),
    }
}

pub const CREATE_STAGES: &[DishStage] =
    &[has_name, has_description, has_image_url, price_is_valid];

pub const READ_STAGES: &[DishStage] = &[dish_exists];

pub const UPDATE_STAGES: &[DishStage] = &[
    dish_exists,
    has_name,
    has_description,
    has_image_url,
    price_is_valid,
    dish_id_matches,
];
