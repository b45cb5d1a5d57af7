//! Application state shared across all request handlers.

use crate::data::store::Store;

/// Shared state cloned into every handler via Axum's state extraction.
/// `Store` wraps a pooled `DatabaseConnection`, so clones share the pool.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}
