//! Trove - embedded typed key-value store
//!
//! Trove holds three kinds of values under string keys - scalars,
//! ordered lists, and unordered unique sets - with a canonical JSON
//! wire codec for any serde-serializable payload type.
//!
//! # Quick Start
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use trovedb::Store;
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Product {
//!     sku: String,
//!     name: String,
//!     price: f64,
//! }
//!
//! let store: Store<Product> = Store::new();
//!
//! // Scalar
//! let book = Product {
//!     sku: "9781617291203".to_string(),
//!     name: "Spring in Action".to_string(),
//!     price: 39.99,
//! };
//! store.set(&book.sku, &book)?;
//! assert_eq!(store.get(&book.sku)?, Some(book));
//!
//! // List
//! # let item = |i: i64| Product {
//! #     sku: format!("SKU-{i}"),
//! #     name: format!("PRODUCT {i}"),
//! #     price: i as f64 + 0.99,
//! # };
//! store.rpush("cart", &item(1))?;
//! store.rpush("cart", &item(2))?;
//! assert_eq!(store.lpop("cart")?, Some(item(1)));
//! # Ok::<(), trovedb::Error>(())
//! ```
//!
//! # Architecture
//!
//! Callers go through the [`Store`] facade, which routes each operation
//! to the shared [`KeySpace`] (entry lookup and kind enforcement) and
//! the matching primitive ([`ScalarStore`], [`ListStore`], [`SetStore`]).
//! Payloads cross into storage only as canonical JSON bytes; every key
//! has its own lock, so independent keys never contend.

// Re-export the caller-facing API
pub use trove_api::{BoundList, BoundSet, Store};
pub use trove_core::{decode, encode, Entry, EntryKind, Error, KeyError, Result};
pub use trove_primitives::{ListStore, ScalarStore, SetStore};
pub use trove_storage::KeySpace;
