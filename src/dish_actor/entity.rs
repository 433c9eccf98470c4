//! Entity trait implementation for the Dish domain type.
//!
//! Dishes have no cross-record rules, so the hooks only apply data that the
//! [`validation`](super::validation) stages already accepted.

use crate::error::ApiError;
use crate::framework::ActorEntity;
use crate::model::{Dish, DishCreate, DishUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Dish {
    type Id = String;
    type Create = DishCreate;
    type Update = DishUpdate;
    type Context = ();
    type Error = ApiError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: DishCreate) -> Result<Self, ApiError> {
        Ok(Self::new(id, params))
    }

    /// Overwrites `name`, `description`, `price` and `image_url`. The id never changes.
    async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), ApiError> {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
        self.image_url = update.image_url;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: &str, price: u64) -> DishCreate {
        DishCreate {
            name: name.into(),
            description: "desc".into(),
            price,
            image_url: "http://img".into(),
        }
    }

    #[tokio::test]
    async fn update_replaces_fields_but_keeps_id() {
        let mut dish = Dish::from_create_params("dish_7".into(), params("Taco", 5)).unwrap();
        dish.on_update(params("Burrito", 9), &()).await.unwrap();

        assert_eq!(dish.id, "dish_7");
        assert_eq!(dish.name, "Burrito");
        assert_eq!(dish.price, 9);
    }
}
