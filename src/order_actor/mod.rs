//! # Order Actor
//!
//! Order resource logic. Orders carry the only real business rules in the system:
//!
//! - An update may not ask for `delivered`, and a stored delivered order cannot be updated.
//! - An order can only be deleted while it is pending.
//! - Line items are fixed at creation; updates never replace them.
//!
//! The [`validation`] stages report these rules to HTTP callers, and the
//! [`entity`] hooks enforce them again inside the actor where they cannot race.

pub mod entity;
pub mod validation;

pub use validation::*;

use crate::clients::OrderClient;
use crate::framework::{MemoryStore, ResourceActor};
use crate::id::next_id_fn;
use crate::model::Order;

/// Creates a new Order actor over an empty store, plus its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    with_store(buffer_size, MemoryStore::new())
}

/// Creates an Order actor that starts from `store`.
pub fn with_store(
    buffer_size: usize,
    store: MemoryStore<Order>,
) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) =
        ResourceActor::with_store(buffer_size, store, next_id_fn("order"));
    (actor, OrderClient::new(generic_client))
}
