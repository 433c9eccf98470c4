//! Entity trait implementation for the Order domain type.
//!
//! See the trait implementation on [`Order`] for the status rules.

use super::validation::{AT_LEAST_ONE_DISH_MESSAGE, DELIVERED_MESSAGE, NOT_PENDING_MESSAGE};
use crate::error::ApiError;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderStatus, OrderUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Context = ();
    type Error = ApiError;

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, ApiError> {
        if params.dishes.is_empty() {
            return Err(ApiError::InvalidField(AT_LEAST_ONE_DISH_MESSAGE.into()));
        }
        Ok(Self::new(id, params))
    }

    /// Replaces `deliverTo`, `mobileNumber` and `status`; `dishes` is left alone.
    ///
    /// # Errors
    /// `Conflict` if the stored order is already delivered. Requests never ask for
    /// `delivered`, but a seeded store can hold delivered orders.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), ApiError> {
        if self.status == OrderStatus::Delivered {
            return Err(ApiError::Conflict(DELIVERED_MESSAGE.into()));
        }
        self.deliver_to = update.deliver_to;
        self.mobile_number = update.mobile_number;
        self.status = update.status;
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), ApiError> {
        if self.status == OrderStatus::Pending {
            Ok(())
        } else {
            Err(ApiError::Conflict(NOT_PENDING_MESSAGE.into()))
        }
    }
}
