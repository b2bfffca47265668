//! Catalog tool manifest and dispatch
//!
//! Every tool is a variant of [`CatalogTool`]. Its input schema is generated
//! from the parameter type the call deserializes into, so the listing served
//! by `tools/list` always matches what `tools/call` accepts.

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::error::ToolError;
use super::helpers::{tool_failure, tool_success};
use crate::catalog::{models::*, ProductStore, StoreError};

/// The operations published to MCP clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogTool {
    ListProducts,
    GetProduct,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
}

impl CatalogTool {
    /// All tools in manifest order.
    pub const ALL: [CatalogTool; 5] = [
        CatalogTool::ListProducts,
        CatalogTool::GetProduct,
        CatalogTool::CreateProduct,
        CatalogTool::UpdateProduct,
        CatalogTool::DeleteProduct,
    ];

    /// Tool name as registered in MCP (identical to the REST endpoint name).
    pub fn name(self) -> &'static str {
        match self {
            CatalogTool::ListProducts => "list_products",
            CatalogTool::GetProduct => "get_product",
            CatalogTool::CreateProduct => "create_product",
            CatalogTool::UpdateProduct => "update_product",
            CatalogTool::DeleteProduct => "delete_product",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub fn title(self) -> &'static str {
        match self {
            CatalogTool::ListProducts => "List products",
            CatalogTool::GetProduct => "Get product",
            CatalogTool::CreateProduct => "Create product",
            CatalogTool::UpdateProduct => "Update product",
            CatalogTool::DeleteProduct => "Delete product",
        }
    }

    /// Tool description shown to clients.
    pub fn description(self) -> &'static str {
        match self {
            CatalogTool::ListProducts => {
                "List all products, optionally filtered by category (case-insensitive) and maximum price."
            }
            CatalogTool::GetProduct => "Get a specific product by ID.",
            CatalogTool::CreateProduct => "Create a new product. The ID is assigned by the server.",
            CatalogTool::UpdateProduct => {
                "Update an existing product. Only the supplied fields are changed."
            }
            CatalogTool::DeleteProduct => "Delete a product by ID.",
        }
    }

    /// JSON schema of the tool arguments.
    pub fn input_schema(self) -> Value {
        match self {
            CatalogTool::ListProducts => input_schema_of::<ListProductsParams>(),
            CatalogTool::GetProduct => input_schema_of::<GetProductParams>(),
            CatalogTool::CreateProduct => input_schema_of::<CreateProductParams>(),
            CatalogTool::UpdateProduct => input_schema_of::<UpdateProductParams>(),
            CatalogTool::DeleteProduct => input_schema_of::<DeleteProductParams>(),
        }
    }

    /// Manifest entry for `tools/list`.
    pub fn descriptor(self) -> Value {
        json!({
            "name": self.name(),
            "title": self.title(),
            "description": self.description(),
            "inputSchema": self.input_schema(),
        })
    }

    /// Runs the tool against `store`.
    ///
    /// Argument problems are returned as `Err`; a missing product is a
    /// regular tool result flagged with `isError`.
    pub fn call(self, store: &ProductStore, args: Value) -> Result<Value, ToolError> {
        info!("Tool call: {}", self.name());

        let outcome = match self {
            CatalogTool::ListProducts => {
                let params: ListProductsParams = parse_args(args)?;
                Ok(json!({ "products": store.list(&params) }))
            }
            CatalogTool::GetProduct => {
                let params: GetProductParams = parse_args(args)?;
                store.get(params.product_id).map(|p| json!(p))
            }
            CatalogTool::CreateProduct => {
                let params: CreateProductParams = parse_args(args)?;
                Ok(json!(store.create(params)))
            }
            CatalogTool::UpdateProduct => {
                let (id, patch) = parse_args::<UpdateProductParams>(args)?.into_parts();
                store.update(id, patch).map(|p| json!(p))
            }
            CatalogTool::DeleteProduct => {
                let params: DeleteProductParams = parse_args(args)?;
                store
                    .delete(params.product_id)
                    .map(|d| json!(DeleteResponse::from(d)))
            }
        };

        Ok(match outcome {
            Ok(structured) => tool_success(structured),
            Err(e @ StoreError::NotFound(_)) => tool_failure(e.to_string()),
        })
    }
}

/// Returns the manifest entries for every catalog tool.
pub fn tool_manifest() -> Vec<Value> {
    CatalogTool::ALL.into_iter().map(CatalogTool::descriptor).collect()
}

/// Looks up `name` and runs it.
pub fn call_tool(store: &ProductStore, name: &str, args: Value) -> Result<Value, ToolError> {
    let tool = CatalogTool::from_name(name).ok_or_else(|| {
        warn!("Unknown tool requested: {}", name);
        ToolError::unknown_tool(name)
    })?;
    tool.call(store, args)
}

fn input_schema_of<T: JsonSchema>() -> Value {
    let mut schema = Value::from(schema_for!(T));
    if let Some(object) = schema.as_object_mut() {
        object.remove("$schema");
        object.remove("title");
    }
    schema
}

// Omitted arguments are an empty object, not an error.
fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    let args = match args {
        Value::Null => json!({}),
        other => other,
    };
    Ok(serde_json::from_value(args)?)
}
