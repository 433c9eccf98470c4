//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the actors behind the HTTP API.
//!
//! - [`RestaurantSystem`] spawns the dish and order actors and owns their clients.
//! - [`setup_tracing`] initializes structured logging.
//! - [`ServerConfig`] reads the listen address and mailbox size from the environment.
//!
//! ```rust,ignore
//! setup_tracing();
//! let config = ServerConfig::from_env()?;
//! let system = RestaurantSystem::new(config.buffer);
//! let app = http::app(system.state());
//! // ... serve ...
//! system.shutdown().await?;
//! ```

pub mod config;
pub mod system;
pub mod tracing;

pub use config::*;
pub use system::*;
pub use self::tracing::*;
