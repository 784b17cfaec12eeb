//! SetStore: unique-membership primitive
//!
//! ## Semantics
//!
//! - Membership is value equality of the payload: two payloads with
//!   identical fields collapse to one member. Internally this is
//!   canonical-byte equality, which the codec makes equivalent.
//! - `add` creates the key on demand; re-adding an equal value is a
//!   no-op.
//! - Algebra (`difference`, `union`, `intersect`) is read-only: each
//!   input is snapshotted under its own lock and the result is a fresh
//!   allocation. Atomicity across the two input keys combined is not
//!   provided.
//! - `random_member` picks uniformly; callers must not assume
//!   repeatability across calls.

use rand::seq::IteratorRandom;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;
use trove_core::codec;
use trove_core::entry::{Bytes, Entry, EntryKind};
use trove_core::error::Result;
use trove_storage::KeySpace;

/// Unique-membership primitive
///
/// Stateless facade over [`KeySpace`].
#[derive(Debug)]
pub struct SetStore<T> {
    keyspace: Arc<KeySpace>,
    _payload: PhantomData<fn() -> T>,
}

impl<T> Clone for SetStore<T> {
    fn clone(&self) -> Self {
        Self {
            keyspace: Arc::clone(&self.keyspace),
            _payload: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> SetStore<T> {
    /// Create a set store over the given key space
    pub fn new(keyspace: Arc<KeySpace>) -> Self {
        Self {
            keyspace,
            _payload: PhantomData,
        }
    }

    /// Insert a value, creating the set when absent
    ///
    /// Returns `true` when the value was newly inserted, `false` when an
    /// equal member was already present.
    pub fn add(&self, key: &str, value: &T) -> Result<bool> {
        let bytes = codec::encode(value)?;
        debug!(key, "set add");
        self.keyspace
            .update(key, EntryKind::Set, |entry| members_mut(entry).insert(bytes))
    }

    /// Remove a value
    ///
    /// Returns `true` when an equal member was present. Removing the
    /// last member leaves an empty set entry in place.
    pub fn remove(&self, key: &str, value: &T) -> Result<bool> {
        let bytes = codec::encode(value)?;
        let removed = self
            .keyspace
            .modify(key, EntryKind::Set, |entry| members_mut(entry).remove(&bytes))?;
        Ok(removed.unwrap_or(false))
    }

    /// Check membership by value equality
    pub fn contains(&self, key: &str, value: &T) -> Result<bool> {
        let bytes = codec::encode(value)?;
        let found = self
            .keyspace
            .read(key, EntryKind::Set, |entry| {
                entry.as_set().is_some_and(|members| members.contains(&bytes))
            })?;
        Ok(found.unwrap_or(false))
    }

    /// Current member count; 0 for an absent key
    pub fn len(&self, key: &str) -> Result<usize> {
        let len = self.keyspace.read(key, EntryKind::Set, |entry| {
            entry.as_set().map_or(0, |members| members.len())
        })?;
        Ok(len.unwrap_or(0))
    }

    /// True when the set is empty or the key is absent
    pub fn is_empty(&self, key: &str) -> Result<bool> {
        Ok(self.len(key)? == 0)
    }

    /// Members of `key_a` that are not members of `key_b`
    ///
    /// Asymmetric: `difference(b, a)` generally differs.
    pub fn difference(&self, key_a: &str, key_b: &str) -> Result<Vec<T>> {
        let a = self.keyspace.snapshot_set(key_a)?;
        let b = self.keyspace.snapshot_set(key_b)?;
        decode_members(a.difference(&b))
    }

    /// Members of `key_a` or `key_b`, deduplicated
    pub fn union(&self, key_a: &str, key_b: &str) -> Result<Vec<T>> {
        let a = self.keyspace.snapshot_set(key_a)?;
        let b = self.keyspace.snapshot_set(key_b)?;
        decode_members(a.union(&b))
    }

    /// Members of both `key_a` and `key_b`
    pub fn intersect(&self, key_a: &str, key_b: &str) -> Result<Vec<T>> {
        let a = self.keyspace.snapshot_set(key_a)?;
        let b = self.keyspace.snapshot_set(key_b)?;
        decode_members(a.intersection(&b))
    }

    /// One member chosen uniformly at random
    ///
    /// `None` when the set is empty or the key is absent.
    pub fn random_member(&self, key: &str) -> Result<Option<T>> {
        let picked = self.keyspace.read(key, EntryKind::Set, |entry| {
            let mut rng = rand::thread_rng();
            entry
                .as_set()
                .and_then(|members| members.iter().choose(&mut rng).cloned())
        })?;
        match picked.flatten() {
            Some(bytes) => Ok(Some(codec::decode(&bytes)?)),
            None => Ok(None),
        }
    }
}

fn members_mut(entry: &mut Entry) -> &mut HashSet<Bytes> {
    // The key space has already enforced EntryKind::Set
    match entry {
        Entry::Set(members) => members,
        _ => unreachable!("key space enforces entry kind"),
    }
}

fn decode_members<'a, T: DeserializeOwned>(
    members: impl Iterator<Item = &'a Bytes>,
) -> Result<Vec<T>> {
    members.map(|bytes| codec::decode(bytes)).collect()
}
