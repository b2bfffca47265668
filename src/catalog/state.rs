//! Product Catalog State Management
//!
//! The application state is built once at startup and handed to every route
//! through an `Arc`; there is no process-wide global.

use super::store::ProductStore;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the product store
pub struct AppState {
    /// Authoritative in-memory catalog.
    pub store: ProductStore,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new AppState holding the startup catalog
    pub fn new() -> Self {
        Self::with_store(ProductStore::seeded())
    }

    /// Creates a new AppState around an existing store
    pub fn with_store(store: ProductStore) -> Self {
        Self { store }
    }
}
