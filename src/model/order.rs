use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;
use std::str::FromStr;

/// Represents a customer order.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](crate::framework::ResourceActor); see
/// [`order_actor`](crate::order_actor) for the entity implementation and the status rules
/// enforced on update and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<LineItem>,
}

impl Order {
    pub fn new(id: impl Into<String>, params: OrderCreate) -> Self {
        Self {
            id: id.into(),
            deliver_to: params.deliver_to,
            mobile_number: params.mobile_number,
            status: params.status,
            dishes: params.dishes,
        }
    }
}

/// Where an order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a status string outside the four known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// One dish reference within an order.
///
/// Only `quantity` is interpreted, and it is stored as an integer: a submitted `2.0` reads
/// back as `2`. Every other submitted field (`id`, `name`, `price`, ...) is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub quantity: u32,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl LineItem {
    pub fn new(dish_id: impl Into<String>, quantity: u32) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), Value::String(dish_id.into()));
        Self { quantity, fields }
    }

    /// The referenced dish id, when the client sent one as a string.
    pub fn dish_id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<LineItem>,
}

/// Payload for updating an order.
///
/// Has no `dishes` field: line items are fixed once an order exists.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderUpdate {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
}
