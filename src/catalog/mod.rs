//! Product Catalog Domain Module
//!
//! This module contains all catalog business logic, including:
//! - Domain models (Product, operation inputs, responses)
//! - The in-memory product store and its seed data
//! - Application state management
//! - REST API handlers

pub mod error;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use error::StoreError;
pub use handlers::routes;
pub use state::{AppState, SharedState};
pub use store::ProductStore;
