//! # Generic Actor Server
//!
//! The `ResourceActor` owns one [`EntityStore`] and processes requests against it one at a
//! time. Because nothing else can touch the store, a hook that inspects stored state and
//! the mutation that follows it happen atomically.

use super::client::ResourceClient;
use super::entity::ActorEntity;
use super::error::FrameworkError;
use super::message::ResourceRequest;
use super::store::{EntityStore, MemoryStore};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` (or `with_store()` for a seeded store) returns
///     the actor and its client.
/// 2.  **Wire & Run**: spawn `actor.run(context)` on the runtime.
/// 3.  **Use**: clone the client wherever requests originate.
///
/// ```rust
/// use restaurant_api::dish_actor;
/// use restaurant_api::model::DishCreate;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = dish_actor::new(8);
///     tokio::spawn(actor.run(()));
///
///     let dish = client
///         .create_dish(DishCreate {
///             name: "Taco".into(),
///             description: "Spicy".into(),
///             price: 5,
///             image_url: "http://x".into(),
///         })
///         .await
///         .unwrap();
///     assert_eq!(dish.id, "dish_1");
/// }
/// ```
///
/// ## Operations
///
/// * **List**: clones the collection in store order.
/// * **Create**: draws ids from `next_id_fn` until one is unused, builds the entity,
///   runs `on_create`, then inserts it.
/// * **Get**: returns a clone, or `None`.
/// * **Update**: runs `on_update` on a copy and writes the copy back only on success, so a
///   rejected update never leaves a half-applied record.
/// * **Delete**: runs `on_delete`, then removes the entity.
pub struct ResourceActor<T: ActorEntity, S: EntityStore<T> = MemoryStore<T>> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: S,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an actor over an empty [`MemoryStore`].
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::with_store(buffer_size, MemoryStore::new(), next_id_fn)
    }
}

impl<T: ActorEntity, S: EntityStore<T>> ResourceActor<T, S> {
    /// Creates an actor that takes ownership of an existing store.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the mailbox. Clients wait when it is full.
    /// * `store` - The collection the actor will own.
    /// * `next_id_fn` - Source of fresh identifiers.
    pub fn with_store(
        buffer_size: usize,
        store: S,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    fn fresh_id(&self) -> T::Id {
        loop {
            let id = (self.next_id_fn)();
            if !self.store.contains(&id) {
                return id;
            }
        }
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self, context: T::Context) {
        // "Dish" rather than "restaurant_api::model::dish::Dish"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let items = self.store.list();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = self.fresh_id();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.find(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.find_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut candidate = item.clone();
                    if let Err(e) = candidate.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    *item = candidate.clone();
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(candidate));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.find(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
