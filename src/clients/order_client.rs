use crate::clients::actor_client::ActorClient;
use crate::error::ApiError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderUpdate};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// The status rules live in the Order entity's hooks, so a rejected update or delete
/// comes back here as the `Conflict` the hook raised.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<Order, ApiError> {
        debug!(?order, "create_order called");
        info!(line_items = order.dishes.len(), "Sending create_order to actor");
        self.inner.create(order).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: String, update: OrderUpdate) -> Result<Order, ApiError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: String) -> Result<(), ApiError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = ApiError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> ApiError {
        match e.into_entity_error::<ApiError>() {
            Ok(api) => api,
            Err(FrameworkError::NotFound(id)) => {
                ApiError::NotFound(format!("Order does not exist: {id}."))
            }
            Err(other) => ApiError::Internal(other.to_string()),
        }
    }
}
