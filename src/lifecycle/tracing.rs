//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing_subscriber` formatter filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup and shutdown of each resource actor
//! - **Writes**: create, update and delete at `info`, with the entity id and store size
//! - **Reads**: list and get at `debug`
//! - **Rejections**: hook failures at `warn`, pipeline failures at `debug`
//! - **Client calls**: one span per call via `#[instrument]`
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! RUST_LOG=restaurant_api::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a dish creation followed by an order looks like:
//!
//! ```text
//! INFO Listening addr=127.0.0.1:5000
//! INFO create_dish: Created id="dish_1" size=1
//! INFO create_order: Sending create_order to actor line_items=2
//! INFO create_order: Created id="order_1" size=1
//! ```

/// Installs the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity ids already say which actor logged
        .compact()
        .init();
}
