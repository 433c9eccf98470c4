//! Identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Returns a generator yielding `"{prefix}_1"`, `"{prefix}_2"`, ... for the life of the
/// process. Each call to `next_id_fn` starts its own sequence.
pub fn next_id_fn(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{prefix}_{id}")
    }
}
