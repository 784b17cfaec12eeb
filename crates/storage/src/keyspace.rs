//! KeySpace: shared map from keys to typed entries
//!
//! ## Design
//!
//! - DashMap holds one slot per live key, sharded for concurrent access.
//! - Each slot is an `Arc<Mutex<Entry>>`: a mutation locks only its own
//!   key, so operations on different keys proceed independently.
//! - Kind enforcement happens here, once, for every access path. An
//!   operation that names the wrong kind fails with `TypeMismatch`
//!   before touching the entry.
//!
//! ## Lock discipline
//!
//! The DashMap shard guard is always released before the per-key mutex
//! is taken, so no thread ever holds a shard lock while waiting on an
//! entry lock. A `delete` racing a mutation may detach the slot the
//! mutation holds; the mutation then lands on the detached entry and is
//! dropped with it, which is indistinguishable from the mutation having
//! completed just before the delete.
//!
//! ## Lifecycle
//!
//! A slot is created on first write and removed only by `delete`.
//! Draining a list or set leaves an empty entry in place: subsequent
//! size/range calls observe 0/empty rather than key absence.

use dashmap::mapref::entry::Entry as MapSlot;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::trace;
use trove_core::entry::{Bytes, Entry, EntryKind};
use trove_core::error::{Error, Result};
use trove_core::key::validate_key;

/// Process-wide map from string keys to typed entries
///
/// Cheap to share: clone an `Arc<KeySpace>` per caller. All methods take
/// `&self` and are safe for concurrent use.
#[derive(Debug, Default)]
pub struct KeySpace {
    entries: DashMap<String, Arc<Mutex<Entry>>>,
}

impl KeySpace {
    /// Create an empty key space
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no keys are live
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether a key is live
    pub fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Snapshot the entry stored under a key
    ///
    /// Returns a clone taken under the key's lock, or `None` when absent.
    pub fn get(&self, key: &str) -> Option<Entry> {
        let cell = Arc::clone(self.entries.get(key)?.value());
        let entry = cell.lock();
        Some(entry.clone())
    }

    /// Store an entry under a key
    ///
    /// Creates the key when absent. Replacing an existing entry requires
    /// the same kind; a different kind fails with `TypeMismatch` and
    /// leaves the stored entry untouched.
    pub fn put(&self, key: &str, entry: Entry) -> Result<()> {
        validate_key(key)?;
        match self.entries.entry(key.to_string()) {
            MapSlot::Occupied(slot) => {
                let cell = Arc::clone(slot.get());
                drop(slot);
                let mut current = cell.lock();
                if current.kind() != entry.kind() {
                    return Err(mismatch(key, entry.kind(), current.kind()));
                }
                *current = entry;
            }
            MapSlot::Vacant(slot) => {
                trace!(key, kind = %entry.kind(), "creating entry");
                slot.insert(Arc::new(Mutex::new(entry)));
            }
        }
        Ok(())
    }

    /// Delete a key
    ///
    /// Idempotent: deleting an absent key is a no-op. Returns `true`
    /// when the key existed.
    pub fn delete(&self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            trace!(key, "deleted entry");
        }
        removed
    }

    /// Mutate the entry under a key, creating it when absent
    ///
    /// An absent key first gets an empty entry of `kind`. An existing
    /// entry of another kind fails with `TypeMismatch` without mutation.
    /// The closure runs under the key's lock.
    pub fn update<R>(
        &self,
        key: &str,
        kind: EntryKind,
        f: impl FnOnce(&mut Entry) -> R,
    ) -> Result<R> {
        validate_key(key)?;
        let cell = {
            let slot = self.entries.entry(key.to_string()).or_insert_with(|| {
                trace!(key, kind = %kind, "creating entry");
                Arc::new(Mutex::new(Entry::empty(kind)))
            });
            Arc::clone(slot.value())
        };
        let mut entry = cell.lock();
        if entry.kind() != kind {
            return Err(mismatch(key, kind, entry.kind()));
        }
        Ok(f(&mut entry))
    }

    /// Mutate the entry under a key only if the key is live
    ///
    /// Returns `None` when the key is absent (the key is NOT created).
    /// The closure runs under the key's lock.
    pub fn modify<R>(
        &self,
        key: &str,
        kind: EntryKind,
        f: impl FnOnce(&mut Entry) -> R,
    ) -> Result<Option<R>> {
        let cell = match self.entries.get(key) {
            Some(slot) => Arc::clone(slot.value()),
            None => return Ok(None),
        };
        let mut entry = cell.lock();
        if entry.kind() != kind {
            return Err(mismatch(key, kind, entry.kind()));
        }
        Ok(Some(f(&mut entry)))
    }

    /// Read the entry under a key
    ///
    /// Returns `None` when the key is absent. The closure runs under the
    /// key's lock and must not retain references past its return value.
    pub fn read<R>(
        &self,
        key: &str,
        kind: EntryKind,
        f: impl FnOnce(&Entry) -> R,
    ) -> Result<Option<R>> {
        let cell = match self.entries.get(key) {
            Some(slot) => Arc::clone(slot.value()),
            None => return Ok(None),
        };
        let entry = cell.lock();
        if entry.kind() != kind {
            return Err(mismatch(key, kind, entry.kind()));
        }
        Ok(Some(f(&entry)))
    }

    /// Snapshot the members of a set key
    ///
    /// Clones the member bytes under the key's lock; an absent key yields
    /// an empty set. Set algebra computes over these snapshots so that
    /// concurrent mutation of an input cannot skew the result.
    pub fn snapshot_set(&self, key: &str) -> Result<HashSet<Bytes>> {
        let snapshot = self.read(key, EntryKind::Set, |entry| {
            entry.as_set().cloned().unwrap_or_default()
        })?;
        Ok(snapshot.unwrap_or_default())
    }
}

fn mismatch(key: &str, expected: EntryKind, actual: EntryKind) -> Error {
    Error::TypeMismatch {
        key: key.to_string(),
        expected,
        actual,
    }
}
