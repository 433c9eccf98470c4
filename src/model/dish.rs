use serde::{Deserialize, Serialize};

/// A menu item.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](crate::framework::ResourceActor); see
/// [`dish_actor`](crate::dish_actor) for the entity implementation.
///
/// `price` is validated to be a positive integer before a `Dish` is ever built, and `id`
/// is assigned by the actor and never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl Dish {
    /// Creates a new Dish instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (normally assigned by the actor)
    /// * `params` - The validated dish fields
    pub fn new(id: impl Into<String>, params: DishCreate) -> Self {
        Self {
            id: id.into(),
            name: params.name,
            description: params.description,
            price: params.price,
            image_url: params.image_url,
        }
    }
}

/// Payload for creating a new dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

/// Payload for updating a dish. Every editable field is replaced.
pub type DishUpdate = DishCreate;
