//! In-memory Product Store
//!
//! `ProductStore` owns the authoritative record list and the next-id counter.
//! Both live behind a single mutex so that id allocation and lookups followed
//! by mutation are never interleaved with another caller.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use super::error::StoreError;
use super::models::{
    CreateProductParams, Deletion, ListProductsParams, Product, ProductId, ProductPatch,
};
use super::seed::seed_products;

/// A specialized Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// State guarded by the store mutex
#[derive(Debug)]
struct Inner {
    /// Records in insertion order.
    products: Vec<Product>,

    /// Strictly greater than every id handed out so far.
    next_id: ProductId,
}

impl Inner {
    fn position(&self, id: ProductId) -> StoreResult<usize> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

/// Thread-safe in-memory catalog of products
#[derive(Debug)]
pub struct ProductStore {
    inner: Mutex<Inner>,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ProductStore {
    /// Creates a store holding `seed`; the counter starts past the largest seeded id.
    ///
    /// The counter saturates at `ProductId::MAX`, so a seed reaching that id
    /// leaves no room for further unique ids.
    pub fn new(seed: Vec<Product>) -> Self {
        let next_id = seed
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));

        Self {
            inner: Mutex::new(Inner {
                products: seed,
                next_id,
            }),
        }
    }

    /// Creates a store holding the startup catalog.
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    // Every operation leaves `Inner` consistent before it can panic, so a
    // poisoned lock still guards valid state.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.lock().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> ProductId {
        self.lock().next_id
    }

    /// Returns the records matching every supplied filter, in insertion order.
    pub fn list(&self, filter: &ListProductsParams) -> Vec<Product> {
        let products: Vec<Product> = self
            .lock()
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();

        debug!(
            category = ?filter.category,
            max_price = ?filter.max_price,
            count = products.len(),
            "Listed products"
        );
        products
    }

    /// Returns the record with the given id.
    pub fn get(&self, id: ProductId) -> StoreResult<Product> {
        let inner = self.lock();
        let index = inner.position(id).inspect_err(|e| warn!("{}", e))?;
        Ok(inner.products[index].clone())
    }

    /// Appends a new record under a freshly allocated id.
    pub fn create(&self, params: CreateProductParams) -> Product {
        let mut inner = self.lock();

        let product = Product {
            id: inner.next_id,
            name: params.name,
            price: params.price,
            category: params.category,
            description: params.description,
        };
        inner.next_id = inner.next_id.saturating_add(1);
        inner.products.push(product.clone());

        info!(id = product.id, name = %product.name, "Created product");
        product
    }

    /// Applies `patch` to the record with the given id and returns the result.
    pub fn update(&self, id: ProductId, patch: ProductPatch) -> StoreResult<Product> {
        let mut inner = self.lock();
        let index = inner.position(id).inspect_err(|e| warn!("{}", e))?;

        let product = &mut inner.products[index];
        patch.apply(product);

        info!(id, "Updated product");
        Ok(product.clone())
    }

    /// Removes the record with the given id.
    pub fn delete(&self, id: ProductId) -> StoreResult<Deletion> {
        let mut inner = self.lock();
        let index = inner.position(id).inspect_err(|e| warn!("{}", e))?;
        inner.products.remove(index);

        info!(id, "Deleted product");
        Ok(Deletion { id, deleted: true })
    }
}
