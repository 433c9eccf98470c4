//! # Dish Actor
//!
//! Dish resource logic: the [`ActorEntity`](crate::framework::ActorEntity) implementation
//! for [`Dish`] and the validation stages every create and update must pass.
//!
//! ## Structure
//!
//! - [`entity`] - Entity implementation (update replaces every editable field)
//! - [`validation`] - Pipeline stages and the ordered stage lists per operation
//! - [`new()`] - Factory that creates the actor and its [`DishClient`]
//!
//! Dishes are never deleted; the HTTP layer exposes no route for it.

pub mod entity;
pub mod validation;

pub use validation::*;

use crate::clients::DishClient;
use crate::framework::{MemoryStore, ResourceActor};
use crate::id::next_id_fn;
use crate::model::Dish;

/// Creates a new Dish actor over an empty store, plus its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Dish>, DishClient) {
    with_store(buffer_size, MemoryStore::new())
}

/// Creates a Dish actor that starts from `store`.
pub fn with_store(buffer_size: usize, store: MemoryStore<Dish>) -> (ResourceActor<Dish>, DishClient) {
    let (actor, generic_client) = ResourceActor::with_store(buffer_size, store, next_id_fn("dish"));
    (actor, DishClient::new(generic_client))
}
