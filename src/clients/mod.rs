//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! The HTTP layer talks only to these clients. They translate framework failures into
//! [`ApiError`](crate::error::ApiError) so handlers can return them directly.

pub mod actor_client;
pub mod dish_client;
pub mod order_client;

pub use actor_client::*;
pub use dish_client::*;
pub use order_client::*;
