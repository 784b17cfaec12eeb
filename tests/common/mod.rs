//! Shared fixtures for integration tests

// Each test binary compiles its own copy; not all of them use every helper
#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use trovedb::Store;

/// Demonstration payload: the store treats it as an opaque serde type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub price: f64,
}

/// The i-th catalog product used by list/set fixtures
pub fn product(i: i64) -> Product {
    Product {
        sku: format!("SKU-{i}"),
        name: format!("PRODUCT {i}"),
        price: i as f64 + 0.99,
    }
}

/// The book payload from the wire-format contract
pub fn spring_in_action() -> Product {
    Product {
        sku: "9781617291203".to_string(),
        name: "Spring in Action".to_string(),
        price: 39.99,
    }
}

pub fn setup() -> Store<Product> {
    Store::new()
}
