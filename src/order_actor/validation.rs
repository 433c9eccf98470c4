//! Validation stages for order requests.
//!
//! | Operation | Stages, in order |
//! |-----------|------------------|
//! | create    | deliverTo, mobileNumber, dishes, at least one dish, quantities, known status (if sent) |
//! | read      | exists |
//! | update    | exists, id matches route, deliverTo, mobileNumber, status, dishes, at least one dish, quantities, known status, not delivered |
//! | delete    | exists, pending |
//!
//! The delivered rule looks at the *requested* status: an update asking for `delivered`
//! is refused. The pending rule looks at the *stored* order. The order entity also refuses
//! updates to an already delivered order and repeats the pending check inside the actor,
//! so both hold even if the order changed after these stages ran.

use crate::error::ApiError;
use crate::model::{LineItem, Order, OrderCreate, OrderStatus, OrderUpdate};
use crate::pipeline::{positive_integer, supplied_id, text_field};
use serde_json::{Map, Value};

/// An order pipeline stage; higher-ranked so one list serves every request lifetime.
pub type OrderStage = for<'a, 'b> fn(&'a OrderRequest<'b>) -> Result<(), ApiError>;

pub const AT_LEAST_ONE_DISH_MESSAGE: &str = "Order must include at least one dish";
pub const STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";
pub const DELIVERED_MESSAGE: &str = "A delivered order cannot be changed.";
pub const NOT_PENDING_MESSAGE: &str = "An order cannot be deleted unless it is pending.";

/// Everything an order stage may inspect.
#[derive(Debug, Clone, Copy)]
pub struct OrderRequest<'a> {
    pub route_id: Option<&'a str>,
    pub data: &'a Map<String, Value>,
    pub stored: Option<&'a Order>,
}

impl<'a> OrderRequest<'a> {
    pub fn create(data: &'a Map<String, Value>) -> Self {
        Self {
            route_id: None,
            data,
            stored: None,
        }
    }

    pub fn for_route(route_id: &'a str, data: &'a Map<String, Value>, stored: Option<&'a Order>) -> Self {
        Self {
            route_id: Some(route_id),
            data,
            stored,
        }
    }

    /// Typed create payload. A missing status means `pending`.
    pub fn create_params(&self) -> Result<OrderCreate, ApiError> {
        let status = match self.data.get("status") {
            None | Some(Value::Null) => OrderStatus::default(),
            Some(_) => require_status(self.data)?,
        };
        Ok(OrderCreate {
            deliver_to: require_text(self.data, "deliverTo")?.to_string(),
            mobile_number: require_text(self.data, "mobileNumber")?.to_string(),
            status,
            dishes: line_items(self.data)?,
        })
    }

    /// Typed update payload. Submitted dishes are validated but never applied.
    pub fn update_params(&self) -> Result<OrderUpdate, ApiError> {
        Ok(OrderUpdate {
            deliver_to: require_text(self.data, "deliverTo")?.to_string(),
            mobile_number: require_text(self.data, "mobileNumber")?.to_string(),
            status: require_status(self.data)?,
        })
    }

    fn route(&self) -> &'a str {
        self.route_id.unwrap_or_default()
    }
}

fn missing(field: &str) -> ApiError {
    ApiError::MissingField(format!("Order must include a {field}"))
}

fn require_text<'a>(data: &'a Map<String, Value>, field: &str) -> Result<&'a str, ApiError> {
    text_field(data, field).ok_or_else(|| missing(field))
}

fn require_status(data: &Map<String, Value>) -> Result<OrderStatus, ApiError> {
    data.get("status")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ApiError::InvalidField(STATUS_MESSAGE.into()))
}

fn dishes(data: &Map<String, Value>) -> Result<&Vec<Value>, ApiError> {
    match data.get("dishes") {
        Some(Value::Array(items)) if !items.is_empty() => Ok(items),
        _ => Err(ApiError::InvalidField(AT_LEAST_ONE_DISH_MESSAGE.into())),
    }
}

fn bad_quantity(index: usize) -> ApiError {
    ApiError::InvalidField(format!(
        "Dish {index} must have a quantity that is an integer greater than 1."
    ))
}

/// Converts submitted dishes into line items, keeping every field but `quantity` verbatim.
fn line_items(data: &Map<String, Value>) -> Result<Vec<LineItem>, ApiError> {
    dishes(data)?
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<LineItem, ApiError> {
            let mut fields = item.as_object().cloned().ok_or_else(|| bad_quantity(index))?;
            let quantity = positive_integer(fields.get("quantity"))
                .and_then(|q| u32::try_from(q).ok())
                .ok_or_else(|| bad_quantity(index))?;
            fields.remove("quantity");
            Ok(LineItem { quantity, fields })
        })
        .collect()
}

/// JavaScript-style truthiness, for the "field was sent at all" checks.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

pub fn order_exists(req: &OrderRequest<'_>) -> Result<(), ApiError> {
    match req.stored {
        Some(_) => Ok(()),
        None => Err(ApiError::NotFound(format!(
            "Order does not exist: {}.",
            req.route()
        ))),
    }
}

pub fn order_id_matches(req: &OrderRequest<'_>) -> Result<(), ApiError> {
    match supplied_id(req.data) {
        Some(body_id) if body_id != req.route() => Err(ApiError::Conflict(format!(
            "Order id does not match route id. Order: {body_id}, Route: {}.",
            req.route()
        ))),
        _ => Ok(()),
    }
}

pub fn has_deliver_to(req: &OrderRequest<'_>) -> Result<(), ApiError> {
    require_text(req.data, "deliverTo").map(|_| ())
}

pub fn has_mobile_number(req: &OrderRequest<'_>) -> Result<(), ApiError> {
    require_text(req.data, "mobileNumber").map(|_| ())
}

pub fn has_status(req: &OrderRequest<'_>) -> Result<(), ApiError> {
    if truthy(req.data.get("status")) {
        Ok(())
    } else {
        Err(missing("status"))
    }
}

/// `dishes: []` passes here (it was sent) and fails in [`has_at_least_one_dish`].
pub fn has_dishes(req: &OrderRequest<'_>) -> Result<(), ApiError> {
    if truthy(req.data.get("dishes")) {
        Ok(())
    } else {
        Err(missing("dishes"))
    }
}

pub fn has_at_least_one_dish(req: &OrderRequest<'_>) -> Result<(), ApiError> {
    dishes(req.data).map(|_| ())
}

/// Reports the first line item whose quantity is not a positive integer.
pub fn quantities_are_valid(req: &OrderRequest<'_>) -> Result<(), ApiError> {
    line_items(req.data).map(|_| ())
}

pub fn status_is_valid(req: &OrderRequest<'_>) -> Result<(), ApiError> {
    require_status(req.data).map(|_| ())
}

/// On create the status may be omitted, but a sent status must be one of the four.
pub fn status_is_valid_if_sent(req: &OrderRequest<'_>) -> Result<(), ApiError> {
    match req.data.get("status") {
        None | Some(Value::Null) => Ok(()),
        Some(_) => status_is_valid(req),
    }
}

/// Refuses an update whose requested status is `delivered`.
pub fn not_delivered(req: &OrderRequest<'_>) -> Result<(), ApiError> {
    match req.data.get("status").and_then(Value::as_str) {
        Some(status) if status == OrderStatus::Delivered.as_str() => {
            Err(ApiError::Conflict(DELIVERED_MESSAGE.into()))
        }
        _ => Ok(()),
    }
}

pub fn is_pending(req: &OrderRequest<'_>) -> Result<(), ApiError> {
    match req.stored {
        Some(order) if order.status != OrderStatus::Pending => {
            Err(ApiError::Conflict(NOT_PENDING_MESSAGE.into()))
        }
        _ => Ok(()),
    }
}

pub const CREATE_STAGES: &[OrderStage] = &[
    has_deliver_to,
    has_mobile_number,
    has_dishes,
    has_at_least_one_dish,
    quantities_are_valid,
    status_is_valid_if_sent,
];

pub const READ_STAGES: &[OrderStage] = &[order_exists];

pub const UPDATE_STAGES: &[OrderStage] = &[
    order_exists,
    order_id_matches,
    has_deliver_to,
    has_mobile_number,
    has_status,
    has_dishes,
    has_at_least_one_dish,
    quantities_are_valid,
    status_is_valid,
    not_delivered,
];

pub const DELETE_STAGES: &[OrderStage] = &[order_exists, is_pending];
