//! # Entity Stores
//!
//! The collection a [`ResourceActor`](super::ResourceActor) owns. The actor is the only
//! writer, so stores need no interior locking. Swapping the store lets tests seed a known
//! state per case.

use super::entity::ActorEntity;

/// Ordered storage for one entity type.
pub trait EntityStore<T: ActorEntity>: Send + 'static {
    /// Every entity, in store order.
    fn list(&self) -> Vec<T>;

    fn find(&self, id: &T::Id) -> Option<&T>;

    fn find_mut(&mut self, id: &T::Id) -> Option<&mut T>;

    /// Appends an entity. Callers guarantee the id is not already present.
    fn insert(&mut self, item: T);

    fn remove(&mut self, id: &T::Id) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: &T::Id) -> bool {
        self.find(id).is_some()
    }
}

/// Vec-backed store; `list` returns insertion order.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    items: Vec<T>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for MemoryStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: ActorEntity> EntityStore<T> for MemoryStore<T> {
    fn list(&self) -> Vec<T> {
        self.items.clone()
    }

    fn find(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn find_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    fn remove(&mut self, id: &T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
