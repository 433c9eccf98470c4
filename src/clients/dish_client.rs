use crate::clients::actor_client::ActorClient;
use crate::error::ApiError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Dish, DishCreate, DishUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Dish actor.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_dish(&self, params: DishCreate) -> Result<Dish, ApiError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_dish(&self, id: String, update: DishUpdate) -> Result<Dish, ApiError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    type Error = ApiError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> ApiError {
        match e.into_entity_error::<ApiError>() {
            Ok(api) => api,
            Err(FrameworkError::NotFound(id)) => {
                ApiError::NotFound(format!("Dish does not exist: {id}."))
            }
            Err(other) => ApiError::Internal(other.to_string()),
        }
    }
}
