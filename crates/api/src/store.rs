//! Store facade - Redis-like operation surface
//!
//! This module provides the single caller-facing entry point. Operation
//! names mirror Redis commands and desugar to primitive calls:
//!
//! | Facade | Primitive |
//! |--------|-----------|
//! | `get(key)` | `ScalarStore::get` |
//! | `set(key, value)` | `ScalarStore::set` |
//! | `lpush` / `rpush` | `ListStore::push_left` / `push_right` |
//! | `lpop` / `rpop` | `ListStore::pop_left` / `pop_right` |
//! | `llen` / `lrange` | `ListStore::len` / `range` |
//! | `sadd` / `srem` | `SetStore::add` / `remove` |
//! | `scard` / `sismember` | `SetStore::len` / `contains` |
//! | `sdiff` / `sunion` / `sinter` | `SetStore` algebra |
//! | `srandmember` | `SetStore::random_member` |
//! | `del` / `exists` | `KeySpace::delete` / `exists` |

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use trove_core::error::Result;
use trove_primitives::{ListStore, ScalarStore, SetStore};
use trove_storage::KeySpace;

use crate::bound::{BoundList, BoundSet};

/// Single entry point over one shared key space
///
/// `Store<T>` is `Send + Sync` and cheap to clone; clones share the
/// underlying key space. One logical store instance serves any number
/// of concurrent callers.
///
/// # Example
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use trove_api::Store;
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Product {
///     sku: String,
///     name: String,
///     price: f64,
/// }
///
/// let store: Store<Product> = Store::new();
/// let product = Product {
///     sku: "9781617291203".to_string(),
///     name: "Spring in Action".to_string(),
///     price: 39.99,
/// };
///
/// store.set(&product.sku, &product)?;
/// assert_eq!(store.get(&product.sku)?, Some(product));
/// # Ok::<(), trove_core::Error>(())
/// ```
#[derive(Debug)]
pub struct Store<T> {
    keyspace: Arc<KeySpace>,
    scalars: ScalarStore<T>,
    lists: ListStore<T>,
    sets: SetStore<T>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            keyspace: Arc::clone(&self.keyspace),
            scalars: self.scalars.clone(),
            lists: self.lists.clone(),
            sets: self.sets.clone(),
        }
    }
}

impl<T: Serialize + DeserializeOwned> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize + DeserializeOwned> Store<T> {
    /// Create a store over a fresh key space
    pub fn new() -> Self {
        Self::with_keyspace(Arc::new(KeySpace::new()))
    }

    /// Create a store over an existing key space
    ///
    /// Lets several stores (possibly with different payload types on
    /// disjoint keys) share one process-wide key space.
    pub fn with_keyspace(keyspace: Arc<KeySpace>) -> Self {
        Self {
            scalars: ScalarStore::new(Arc::clone(&keyspace)),
            lists: ListStore::new(Arc::clone(&keyspace)),
            sets: SetStore::new(Arc::clone(&keyspace)),
            keyspace,
        }
    }

    /// The shared key space behind this store
    pub fn keyspace(&self) -> &Arc<KeySpace> {
        &self.keyspace
    }

    // ========== Key management ==========

    /// Delete a key of any kind
    ///
    /// Idempotent; returns `true` when the key existed.
    pub fn del(&self, key: &str) -> bool {
        debug!(key, "del");
        self.keyspace.delete(key)
    }

    /// Check whether a key is live
    pub fn exists(&self, key: &str) -> bool {
        self.keyspace.exists(key)
    }

    // ========== Scalar operations ==========

    /// Store a scalar value, creating or overwriting
    pub fn set(&self, key: &str, value: &T) -> Result<()> {
        self.scalars.set(key, value)
    }

    /// Fetch a scalar value; `None` when absent
    pub fn get(&self, key: &str) -> Result<Option<T>> {
        self.scalars.get(key)
    }

    /// Fetch the stored canonical wire bytes of a scalar
    pub fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.scalars.get_raw(key)
    }

    // ========== List operations ==========

    /// Prepend to the head of a list
    pub fn lpush(&self, key: &str, value: &T) -> Result<()> {
        self.lists.push_left(key, value)
    }

    /// Append to the tail of a list
    pub fn rpush(&self, key: &str, value: &T) -> Result<()> {
        self.lists.push_right(key, value)
    }

    /// Remove and return the head element; `None` on empty or absent
    pub fn lpop(&self, key: &str) -> Result<Option<T>> {
        self.lists.pop_left(key)
    }

    /// Remove and return the tail element; `None` on empty or absent
    pub fn rpop(&self, key: &str) -> Result<Option<T>> {
        self.lists.pop_right(key)
    }

    /// List length; 0 for an absent key
    pub fn llen(&self, key: &str) -> Result<usize> {
        self.lists.len(key)
    }

    /// Inclusive-bounds slice of a list, zero-based and clamped
    pub fn lrange(&self, key: &str, start: i64, end: i64) -> Result<Vec<T>> {
        self.lists.range(key, start, end)
    }

    // ========== Set operations ==========

    /// Insert into a set; `true` when newly inserted
    pub fn sadd(&self, key: &str, value: &T) -> Result<bool> {
        self.sets.add(key, value)
    }

    /// Remove from a set; `true` when an equal member was present
    pub fn srem(&self, key: &str, value: &T) -> Result<bool> {
        self.sets.remove(key, value)
    }

    /// Check set membership by value equality
    pub fn sismember(&self, key: &str, value: &T) -> Result<bool> {
        self.sets.contains(key, value)
    }

    /// Set cardinality; 0 for an absent key
    pub fn scard(&self, key: &str) -> Result<usize> {
        self.sets.len(key)
    }

    /// Members of `key_a` not in `key_b`
    pub fn sdiff(&self, key_a: &str, key_b: &str) -> Result<Vec<T>> {
        self.sets.difference(key_a, key_b)
    }

    /// Members of `key_a` or `key_b`, deduplicated
    pub fn sunion(&self, key_a: &str, key_b: &str) -> Result<Vec<T>> {
        self.sets.union(key_a, key_b)
    }

    /// Members of both `key_a` and `key_b`
    pub fn sinter(&self, key_a: &str, key_b: &str) -> Result<Vec<T>> {
        self.sets.intersect(key_a, key_b)
    }

    /// One set member chosen uniformly at random; `None` when empty
    pub fn srandmember(&self, key: &str) -> Result<Option<T>> {
        self.sets.random_member(key)
    }

    // ========== Bound-key handles ==========

    /// Bind the list operations to one key
    pub fn bound_list(&self, key: impl Into<String>) -> BoundList<T> {
        BoundList::new(self.lists.clone(), key.into())
    }

    /// Bind the set operations to one key
    pub fn bound_set(&self, key: impl Into<String>) -> BoundSet<T> {
        BoundSet::new(self.sets.clone(), key.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use trove_core::error::Error;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Product {
        sku: String,
        name: String,
        price: f64,
    }

    fn product(i: i64) -> Product {
        Product {
            sku: format!("SKU-{i}"),
            name: format!("PRODUCT {i}"),
            price: i as f64 + 0.99,
        }
    }

    #[test]
    fn test_facade_composes_all_kinds() {
        let store: Store<Product> = Store::new();

        store.set("scalar", &product(0)).unwrap();
        store.rpush("list", &product(1)).unwrap();
        store.sadd("set", &product(2)).unwrap();

        assert!(store.exists("scalar"));
        assert!(store.exists("list"));
        assert!(store.exists("set"));
        assert_eq!(store.keyspace().len(), 3);
    }

    #[test]
    fn test_del_works_across_kinds() {
        let store: Store<Product> = Store::new();
        store.set("scalar", &product(0)).unwrap();
        store.rpush("list", &product(1)).unwrap();

        assert!(store.del("scalar"));
        assert!(store.del("list"));
        assert!(!store.del("list"));
        assert!(store.keyspace().is_empty());
    }

    #[test]
    fn test_kind_errors_surface_through_facade() {
        let store: Store<Product> = Store::new();
        store.set("k", &product(0)).unwrap();
        assert!(matches!(
            store.rpush("k", &product(1)),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            store.sadd("k", &product(1)),
            Err(Error::TypeMismatch { .. })
        ));
        // Stored scalar untouched
        assert_eq!(store.get("k").unwrap(), Some(product(0)));
    }

    #[test]
    fn test_clones_share_the_key_space() {
        let store: Store<Product> = Store::new();
        let clone = store.clone();
        store.set("k", &product(0)).unwrap();
        assert_eq!(clone.get("k").unwrap(), Some(product(0)));
    }

    #[test]
    fn test_shared_keyspace_across_stores() {
        let keyspace = Arc::new(KeySpace::new());
        let a: Store<Product> = Store::with_keyspace(Arc::clone(&keyspace));
        let b: Store<Product> = Store::with_keyspace(keyspace);
        a.rpush("cart", &product(1)).unwrap();
        assert_eq!(b.llen("cart").unwrap(), 1);
    }
}
