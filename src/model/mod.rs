//! Pure data structures (records and DTOs) managed by the resource actors.
//!
//! The [`ActorEntity`](crate::framework::ActorEntity) implementations live next to each
//! actor in [`dish_actor`](crate::dish_actor) and [`order_actor`](crate::order_actor).

pub mod dish;
pub mod envelope;
pub mod order;

pub use dish::*;
pub use envelope::*;
pub use order::*;
