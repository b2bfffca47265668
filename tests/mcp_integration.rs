//! Integration tests for MCP (Model Context Protocol) server
//!
//! These tests verify the complete MCP protocol implementation including:
//! - Server initialization and handshake
//! - Tool discovery and listing
//! - Tool execution for every catalog operation
//! - Error handling

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use product_catalog_rust::catalog::AppState;
use product_catalog_rust::router::create_app_router;

/// Helper function to create a test app instance
fn create_test_app() -> axum::Router {
    let state = Arc::new(AppState::new());
    create_app_router(state)
}

/// Helper function to send a JSON-RPC request and get the response
async fn send_jsonrpc_request(
    app: &axum::Router,
    method: &str,
    params: Option<Value>,
    id: i32,
) -> (StatusCode, Value) {
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": id
    });

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&request_body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

/// Helper function to invoke a tool and return the `result` member
async fn call_tool(app: &axum::Router, name: &str, arguments: Value, id: i32) -> Value {
    let params = json!({ "name": name, "arguments": arguments });
    let (status, body) = send_jsonrpc_request(app, "tools/call", Some(params), id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    body["result"].clone()
}

#[tokio::test]
async fn test_mcp_sse_endpoint() {
    let app = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/mcp")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(content_type, "text/event-stream");

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body_bytes.to_vec()).unwrap();

    assert!(body_str.contains("event: endpoint"));
    assert!(body_str.contains("data: /mcp"));
}

#[tokio::test]
async fn test_mcp_initialize() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "initialize", None, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 1);

    let result = &body["result"];
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "product-catalog-rust");
    assert!(result["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn test_mcp_tools_list() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "tools/list", None, 2).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);

    let tools = body["result"]["tools"].as_array().unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "list_products",
            "get_product",
            "create_product",
            "update_product",
            "delete_product"
        ]
    );

    for tool in tools {
        assert!(!tool["description"].as_str().unwrap().is_empty());
        assert_eq!(tool["inputSchema"]["type"], "object");
    }

    let get_product = &tools[1];
    assert_eq!(get_product["title"], "Get product");
    assert_eq!(
        get_product["inputSchema"]["properties"]["product_id"]["type"],
        "integer"
    );
    assert_eq!(get_product["inputSchema"]["required"], json!(["product_id"]));
}

#[tokio::test]
async fn test_mcp_list_products_with_filters() {
    let app = create_test_app();

    let result = call_tool(
        &app,
        "list_products",
        json!({ "category": "electronics", "max_price": 50 }),
        3,
    )
    .await;

    assert_eq!(result["isError"], false);
    let products = result["structuredContent"]["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], 2);
    assert_eq!(products[0]["name"], "Mouse");

    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Mouse"));
}

#[tokio::test]
async fn test_mcp_get_product() {
    let app = create_test_app();

    let result = call_tool(&app, "get_product", json!({ "product_id": 3 }), 4).await;

    let product = &result["structuredContent"];
    assert_eq!(product["id"], 3);
    assert_eq!(product["name"], "Desk Chair");
    assert_eq!(product["category"], "Furniture");
}

#[tokio::test]
async fn test_mcp_get_missing_product() {
    let app = create_test_app();

    let result = call_tool(&app, "get_product", json!({ "product_id": 99 }), 5).await;

    assert_eq!(result["isError"], true);
    assert_eq!(result["content"][0]["text"], "Product 99 not found");
}

#[tokio::test]
async fn test_mcp_create_then_get() {
    let app = create_test_app();

    let created = call_tool(
        &app,
        "create_product",
        json!({ "id": 77, "name": "Keyboard", "price": 49.99, "category": "Electronics" }),
        6,
    )
    .await;

    assert_eq!(
        created["structuredContent"],
        json!({
            "id": 4,
            "name": "Keyboard",
            "price": 49.99,
            "category": "Electronics",
            "description": null
        })
    );

    let fetched = call_tool(&app, "get_product", json!({ "product_id": 4 }), 7).await;
    assert_eq!(fetched["structuredContent"], created["structuredContent"]);
}

#[tokio::test]
async fn test_mcp_update_product() {
    let app = create_test_app();

    let result = call_tool(
        &app,
        "update_product",
        json!({ "product_id": 1, "price": 899.99 }),
        8,
    )
    .await;

    let product = &result["structuredContent"];
    assert_eq!(product["id"], 1);
    assert_eq!(product["price"], 899.99);
    assert_eq!(product["name"], "Laptop");
    assert_eq!(product["category"], "Electronics");
    assert_eq!(product["description"], "High performance laptop");
}

#[tokio::test]
async fn test_mcp_delete_product() {
    let app = create_test_app();

    let result = call_tool(&app, "delete_product", json!({ "product_id": 2 }), 9).await;
    assert_eq!(
        result["structuredContent"],
        json!({ "message": "Product deleted", "product_id": 2 })
    );

    let listed = call_tool(&app, "list_products", json!({}), 10).await;
    let ids: Vec<i64> = listed["structuredContent"]["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let again = call_tool(&app, "delete_product", json!({ "product_id": 2 }), 11).await;
    assert_eq!(again["isError"], true);
}

#[tokio::test]
async fn test_mcp_unknown_method() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "resources/list", None, 12).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 12);

    let error = &body["error"];
    assert_eq!(error["code"], -32601);
    assert_eq!(error["message"], "Method not found");
}

#[tokio::test]
async fn test_mcp_invalid_json() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from("invalid json {{{"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(body["error"]["code"], -32700);
    assert_eq!(body["error"]["message"], "Parse error");
}

#[tokio::test]
async fn test_mcp_tool_call_unknown_tool() {
    let app = create_test_app();

    let params = json!({
        "name": "unknown_tool",
        "arguments": {}
    });

    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 13).await;

    assert_eq!(status, StatusCode::OK);

    let error = &body["error"];
    assert_eq!(error["code"], -32602);
    assert!(error["message"].as_str().unwrap().contains("Unknown tool"));
}

#[tokio::test]
async fn test_mcp_tool_call_invalid_arguments() {
    let app = create_test_app();

    let params = json!({
        "name": "get_product",
        "arguments": { "product_id": "one" }
    });

    let (status, body) = send_jsonrpc_request(&app, "tools/call", Some(params), 14).await;

    assert_eq!(status, StatusCode::OK);

    let error = &body["error"];
    assert_eq!(error["code"], -32602);
    assert!(error["message"]
        .as_str()
        .unwrap()
        .contains("Invalid arguments"));
}

#[tokio::test]
async fn test_mcp_ping() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "ping", None, 15).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 15);
    assert_eq!(body["result"], json!({}));
}

#[tokio::test]
async fn test_mcp_notifications_initialized() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "notifications/initialized", None, 16).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!({}));
}

#[tokio::test]
async fn test_mcp_invalid_method_type() {
    let app = create_test_app();

    // method should be a string, let's pass a number
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": 123,
        "id": 1
    });

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&request_body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
