//! Product Catalog Domain Models
//!
//! This module contains the product record and the parameter types for
//! every catalog operation. The same parameter types are deserialized by
//! the REST handlers and by the MCP tool dispatcher, and they are the source
//! of the JSON schemas published in the tool manifest.

use schemars::JsonSchema;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Identifier assigned to a product by the store
pub type ProductId = i64;

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// A single record in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Product {
    /// Store-assigned identifier, never reused
    pub id: ProductId,

    /// Display name of the product
    pub name: String,

    /// Unit price
    pub price: f64,

    /// Category label (compared case-insensitively)
    pub category: String,

    /// Optional free-form description
    pub description: Option<String>,
}

impl Product {
    /// Returns true when `category` names this product's category, ignoring case.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

/// Input for the list_products operation
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListProductsParams {
    /// Only return products in this category (case-insensitive)
    pub category: Option<String>,

    /// Only return products priced at or below this amount
    pub max_price: Option<f64>,
}

impl ListProductsParams {
    /// Returns true when `product` satisfies every supplied filter.
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = match self.category.as_deref() {
            Some(category) if !category.is_empty() => product.in_category(category),
            _ => true,
        };
        let price_ok = self.max_price.map_or(true, |max| product.price <= max);

        category_ok && price_ok
    }
}

/// Input for the get_product operation
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetProductParams {
    /// Identifier of the product to fetch
    pub product_id: ProductId,
}

/// Input for the create_product operation
///
/// A client-supplied `id` is not part of this type and is dropped during
/// deserialization; the store always assigns the identifier.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateProductParams {
    /// Display name of the new product
    pub name: String,

    /// Unit price of the new product
    #[serde(deserialize_with = "finite_price")]
    #[schemars(with = "f64")]
    pub price: f64,

    /// Category of the new product
    pub category: String,

    /// Optional description of the new product
    pub description: Option<String>,
}

/// Input for the update_product operation
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateProductParams {
    /// Identifier of the product to update
    pub product_id: ProductId,

    /// New name, left unchanged when omitted
    pub name: Option<String>,

    /// New price, left unchanged when omitted
    #[serde(default, deserialize_with = "finite_price_opt")]
    #[schemars(with = "Option<f64>")]
    pub price: Option<f64>,

    /// New category, left unchanged when omitted
    pub category: Option<String>,

    /// New description, left unchanged when omitted
    pub description: Option<String>,
}

impl UpdateProductParams {
    /// Splits the request into the target id and the field changes.
    pub fn into_parts(self) -> (ProductId, ProductPatch) {
        (
            self.product_id,
            ProductPatch {
                name: self.name,
                price: self.price,
                category: self.category,
                description: self.description,
            },
        )
    }
}

/// Input for the delete_product operation
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteProductParams {
    /// Identifier of the product to delete
    pub product_id: ProductId,
}

// Query strings accept "NaN" and "inf" as floats; such a price could never be
// serialized back as a JSON number.
fn finite_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let price = f64::deserialize(deserializer)?;
    if price.is_finite() {
        Ok(price)
    } else {
        Err(de::Error::custom(format!(
            "price must be a finite number, got {}",
            price
        )))
    }
}

fn finite_price_opt<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<f64>::deserialize(deserializer)? {
        Some(price) if !price.is_finite() => Err(de::Error::custom(format!(
            "price must be a finite number, got {}",
            price
        ))),
        price => Ok(price),
    }
}

/// Field-level changes applied by an update.
///
/// `None` means "leave as is". An explicit JSON `null` is treated the same as
/// an omitted field, so a description cannot be cleared through an update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl ProductPatch {
    /// Overwrites every supplied field on `product`.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(description) = self.description {
            product.description = Some(description);
        }
    }
}

/// Outcome of a successful store deletion, shaped `{id, deleted}`.
///
/// `deleted` is always `true`; a failed deletion is a `StoreError` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deletion {
    pub id: ProductId,
    pub deleted: bool,
}

/// Acknowledgement returned to callers after a deletion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteResponse {
    /// Fixed confirmation text
    pub message: String,

    /// Identifier of the removed product
    pub product_id: ProductId,
}

impl From<Deletion> for DeleteResponse {
    fn from(deletion: Deletion) -> Self {
        Self {
            message: "Product deleted".to_string(),
            product_id: deletion.id,
        }
    }
}
