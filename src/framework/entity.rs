//! # ActorEntity Trait
//!
//! The contract every resource (Dish, Order) implements to be managed by the generic
//! [`ResourceActor`](super::ResourceActor). It names the identifier and DTO types and
//! provides lifecycle hooks that run *inside* the actor, serialized with every other
//! request against the same store.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The defaults do nothing (`Ok(())`). `on_update` is required because only the entity
//! knows which fields an update may touch.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` and receive a `Context` injected through `run()`, so an entity can
/// reach other actors without holding them in its own state.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error a hook may reject an operation with.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier assigned at creation. Never changes afterwards.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the server-assigned id and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update in place. Returning an error leaves the stored entity untouched.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed. An error vetoes the removal.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
