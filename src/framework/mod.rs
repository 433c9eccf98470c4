//! Generic actor framework for resource management.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`EntityStore`] / [`MemoryStore`] - The ordered collection an actor owns
//! - [`ResourceActor`] - Generic actor that serializes all access to one store
//! - [`ResourceClient`] - Type-safe, cloneable handle for sending requests
//! - [`FrameworkError`] - Plumbing failures and hook rejections
//!
//! # Testing
//!
//! See [`mock`] for a scripted stand-in that answers requests without a store.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::{EntityStore, MemoryStore};
