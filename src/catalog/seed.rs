//! Records loaded into the store at startup.

use super::models::Product;

/// Returns the fixed startup catalog.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Laptop".into(),
            price: 999.99,
            category: "Electronics".into(),
            description: Some("High performance laptop".into()),
        },
        Product {
            id: 2,
            name: "Mouse".into(),
            price: 29.99,
            category: "Electronics".into(),
            description: Some("Wireless mouse".into()),
        },
        Product {
            id: 3,
            name: "Desk Chair".into(),
            price: 299.99,
            category: "Furniture".into(),
            description: Some("Ergonomic chair".into()),
        },
    ]
}
