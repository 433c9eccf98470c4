use crate::clients::{DishClient, OrderClient};
use crate::framework::MemoryStore;
use crate::http::AppState;
use crate::model::{Dish, Order};
use tracing::{error, info};

/// The runtime orchestrator for the restaurant API.
///
/// Owns one actor per resource. Neither actor depends on the other, so both run with a
/// `()` context.
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new(32);
/// let dish = system.dish_client.create_dish(params).await?;
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    /// Client for interacting with the Dish actor
    pub dish_client: DishClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Starts both actors over empty stores. Must be called inside a Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        Self::with_stores(buffer_size, MemoryStore::new(), MemoryStore::new())
    }

    /// Starts both actors over pre-seeded stores.
    pub fn with_stores(
        buffer_size: usize,
        dishes: MemoryStore<Dish>,
        orders: MemoryStore<Order>,
    ) -> Self {
        let (dish_actor, dish_client) = crate::dish_actor::with_store(buffer_size, dishes);
        let (order_actor, order_client) = crate::order_actor::with_store(buffer_size, orders);

        let dish_handle = tokio::spawn(dish_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));

        Self {
            dish_client,
            order_client,
            handles: vec![dish_handle, order_handle],
        }
    }

    /// Shared state for the HTTP router, holding clones of both clients.
    pub fn state(&self) -> AppState {
        AppState {
            dishes: self.dish_client.clone(),
            orders: self.order_client.clone(),
        }
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the clients closes the channels once every clone (including those held by
    /// the router) is gone; each actor then drains its mailbox and exits.
    ///
    /// # Errors
    /// Returns the join error text if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.dish_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ActorClient;
    use crate::model::DishCreate;

    #[tokio::test]
    async fn starts_and_shuts_down_cleanly() {
        let system = RestaurantSystem::new(4);
        let dish = system
            .dish_client
            .create_dish(DishCreate {
                name: "Taco".into(),
                description: "Spicy".into(),
                price: 5,
                image_url: "http://x".into(),
            })
            .await
            .unwrap();
        assert_eq!(dish.id, "dish_1");
        assert_eq!(system.order_client.list().await.unwrap(), vec![]);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn seeded_stores_are_served() {
        let seeded = Dish::new(
            "dish_1",
            DishCreate {
                name: "Burrito".into(),
                description: "Big".into(),
                price: 9,
                image_url: "http://b".into(),
            },
        );
        let system = RestaurantSystem::with_stores(
            4,
            MemoryStore::from_iter([seeded.clone()]),
            MemoryStore::new(),
        );

        let found = system.dish_client.get("dish_1".into()).await.unwrap();
        assert_eq!(found, Some(seeded));
        system.shutdown().await.unwrap();
    }
}
