//! Bound-key handles
//!
//! A bound handle captures a key once and exposes the operations of one
//! primitive against it, so call sites working repeatedly on the same
//! key don't repeat it. Handles hold no state beyond the key and the
//! shared primitive: binding does not create the key, and a handle
//! stays valid (observing absence) after the key is deleted.

use serde::de::DeserializeOwned;
use serde::Serialize;
use trove_core::error::Result;
use trove_primitives::{ListStore, SetStore};

/// List operations bound to one key
#[derive(Debug)]
pub struct BoundList<T> {
    lists: ListStore<T>,
    key: String,
}

impl<T> Clone for BoundList<T> {
    fn clone(&self) -> Self {
        Self {
            lists: self.lists.clone(),
            key: self.key.clone(),
        }
    }
}

impl<T: Serialize + DeserializeOwned> BoundList<T> {
    pub(crate) fn new(lists: ListStore<T>, key: String) -> Self {
        Self { lists, key }
    }

    /// The key this handle is bound to
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append at the tail
    pub fn push_right(&self, value: &T) -> Result<()> {
        self.lists.push_right(&self.key, value)
    }

    /// Prepend at the head
    pub fn push_left(&self, value: &T) -> Result<()> {
        self.lists.push_left(&self.key, value)
    }

    /// Remove and return the head element
    pub fn pop_left(&self) -> Result<Option<T>> {
        self.lists.pop_left(&self.key)
    }

    /// Remove and return the tail element
    pub fn pop_right(&self) -> Result<Option<T>> {
        self.lists.pop_right(&self.key)
    }

    /// Current element count
    pub fn len(&self) -> Result<usize> {
        self.lists.len(&self.key)
    }

    /// True when the list is empty or the key is absent
    pub fn is_empty(&self) -> Result<bool> {
        self.lists.is_empty(&self.key)
    }

    /// Inclusive-bounds slice, zero-based and clamped
    pub fn range(&self, start: i64, end: i64) -> Result<Vec<T>> {
        self.lists.range(&self.key, start, end)
    }
}

/// Set operations bound to one key
#[derive(Debug)]
pub struct BoundSet<T> {
    sets: SetStore<T>,
    key: String,
}

impl<T> Clone for BoundSet<T> {
    fn clone(&self) -> Self {
        Self {
            sets: self.sets.clone(),
            key: self.key.clone(),
        }
    }
}

impl<T: Serialize + DeserializeOwned> BoundSet<T> {
    pub(crate) fn new(sets: SetStore<T>, key: String) -> Self {
        Self { sets, key }
    }

    /// The key this handle is bound to
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Insert a value; `true` when newly inserted
    pub fn add(&self, value: &T) -> Result<bool> {
        self.sets.add(&self.key, value)
    }

    /// Remove a value; `true` when an equal member was present
    pub fn remove(&self, value: &T) -> Result<bool> {
        self.sets.remove(&self.key, value)
    }

    /// Check membership by value equality
    pub fn contains(&self, value: &T) -> Result<bool> {
        self.sets.contains(&self.key, value)
    }

    /// Current member count
    pub fn len(&self) -> Result<usize> {
        self.sets.len(&self.key)
    }

    /// True when the set is empty or the key is absent
    pub fn is_empty(&self) -> Result<bool> {
        self.sets.is_empty(&self.key)
    }

    /// One member chosen uniformly at random
    pub fn random_member(&self) -> Result<Option<T>> {
        self.sets.random_member(&self.key)
    }
}
