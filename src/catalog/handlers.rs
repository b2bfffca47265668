//! REST API handlers for catalog operations
//!
//! Each endpoint is named after the store operation it forwards to.
//! Parameters travel in the query string for every verb, writes included.

use super::{error::StoreError, models::*, state::SharedState};
use axum::{
    extract::{Query, State},
    routing::{delete, get, post},
    Json, Router,
};

/// Creates routes for catalog operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/products/list_products", get(list_products))
        .route("/products/get_product", get(get_product))
        .route("/products/create_product", post(create_product))
        .route("/products/update_product", post(update_product))
        .route("/products/delete_product", delete(delete_product))
}

/// Endpoint: GET /products/list_products
/// Lists products, optionally filtered by category and maximum price.
async fn list_products(
    State(state): State<SharedState>,
    Query(params): Query<ListProductsParams>,
) -> Json<Vec<Product>> {
    Json(state.store.list(&params))
}

/// Endpoint: GET /products/get_product
async fn get_product(
    State(state): State<SharedState>,
    Query(params): Query<GetProductParams>,
) -> Result<Json<Product>, StoreError> {
    state.store.get(params.product_id).map(Json)
}

/// Endpoint: POST /products/create_product
async fn create_product(
    State(state): State<SharedState>,
    Query(params): Query<CreateProductParams>,
) -> Json<Product> {
    Json(state.store.create(params))
}

/// Endpoint: POST /products/update_product
/// Only the fields present in the query string are changed.
async fn update_product(
    State(state): State<SharedState>,
    Query(params): Query<UpdateProductParams>,
) -> Result<Json<Product>, StoreError> {
    let (id, patch) = params.into_parts();
    state.store.update(id, patch).map(Json)
}

/// Endpoint: DELETE /products/delete_product
async fn delete_product(
    State(state): State<SharedState>,
    Query(params): Query<DeleteProductParams>,
) -> Result<Json<DeleteResponse>, StoreError> {
    let deletion = state.store.delete(params.product_id)?;
    Ok(Json(deletion.into()))
}
