#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Restaurant API
//!
//! > **A small ordering service: dishes on a menu, orders that reference them.**
//!
//! Dishes and orders each live in their own resource actor. HTTP requests are checked by an
//! ordered list of validation stages before anything reaches an actor, and the actor
//! serializes every write to its store.
//!
//! ## 🚀 Core Concepts
//!
//! ### One actor per resource
//! `ResourceActor<T: ActorEntity>` is written once and runs both dishes and orders. Each
//! actor owns its store outright; clients talk to it over a channel. Two requests for the
//! same resource never interleave inside the store.
//!
//! ### Pipelines of stages
//! A stage is a plain function from a request context to `Result<(), ApiError>`. An
//! operation is a `const` slice of stages, run in order until the first failure. The first
//! failing stage decides the response.
//!
//! ### Mocking
//! [`framework::mock::MockClient`] answers requests from a script, so clients and handlers
//! can be tested without a real store.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Error Handling
//! Every client-visible failure is an [`ApiError`](error::ApiError) carrying its final
//! message. Entity hooks return `ApiError` too; the framework boxes it on the way out and
//! the clients downcast it back, so a hook rejection reaches the caller unchanged.
//!
//! ### 2. Status Rules Inside the Actor
//! The pipeline refuses updates that ask for `delivered` and deletes of orders that are
//! not pending. The order entity's hooks refuse updates to a stored delivered order and
//! repeat the pending check, atomically with the write.
//!
//! ### 3. Observability
//! `tracing` everywhere. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Key items**: [`ActorEntity`](framework::ActorEntity),
//!   [`ResourceActor`](framework::ResourceActor), [`EntityStore`](framework::EntityStore).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! - **Key items**: [`RestaurantSystem`](lifecycle::RestaurantSystem),
//!   [`ServerConfig`](lifecycle::ServerConfig), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 3. The Interface ([`clients`], [`http`])
//! - **Key items**: [`DishClient`](clients::DishClient), [`OrderClient`](clients::OrderClient),
//!   [`http::app`].
//!
//! ### 4. The Resources ([`dish_actor`], [`order_actor`], [`model`])
//! - **Role**: entity implementations and validation stages for each resource.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl -X POST localhost:5000/dishes -H 'content-type: application/json' \
//!   -d '{"data":{"name":"Taco","description":"Spicy","price":5,"image_url":"http://x"}}'
//! ```

pub mod clients;
pub mod dish_actor;
pub mod error;
pub mod framework;
pub mod http;
pub mod id;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pipeline;
