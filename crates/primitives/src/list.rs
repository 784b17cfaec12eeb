//! ListStore: double-ended sequence primitive
//!
//! ## Semantics
//!
//! - Ordered, index-addressable, duplicates permitted.
//! - Pushes create the key as an empty list on demand; O(1) amortized at
//!   either end (VecDeque).
//! - Pops return `None` on an empty or missing list. Popping the last
//!   element leaves an empty list entry in place; only `delete` removes
//!   the key. `len` and `range` on such a key observe 0/empty rather
//!   than absence.
//! - `range` takes inclusive zero-based bounds, clamped into the valid
//!   index range; a start past the end (before or after clamping) yields
//!   an empty result.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;
use trove_core::codec;
use trove_core::entry::{Bytes, Entry, EntryKind};
use trove_core::error::Result;
use trove_storage::KeySpace;

/// Double-ended sequence primitive
///
/// Stateless facade over [`KeySpace`].
#[derive(Debug)]
pub struct ListStore<T> {
    keyspace: Arc<KeySpace>,
    _payload: PhantomData<fn() -> T>,
}

impl<T> Clone for ListStore<T> {
    fn clone(&self) -> Self {
        Self {
            keyspace: Arc::clone(&self.keyspace),
            _payload: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> ListStore<T> {
    /// Create a list store over the given key space
    pub fn new(keyspace: Arc<KeySpace>) -> Self {
        Self {
            keyspace,
            _payload: PhantomData,
        }
    }

    /// Append a value at the tail, creating the list when absent
    pub fn push_right(&self, key: &str, value: &T) -> Result<()> {
        let bytes = codec::encode(value)?;
        self.push(key, bytes, false)
    }

    /// Prepend a value at the head, creating the list when absent
    pub fn push_left(&self, key: &str, value: &T) -> Result<()> {
        let bytes = codec::encode(value)?;
        self.push(key, bytes, true)
    }

    fn push(&self, key: &str, bytes: Bytes, front: bool) -> Result<()> {
        debug!(key, front, "list push");
        self.keyspace.update(key, EntryKind::List, |entry| {
            let items = items_mut(entry);
            if front {
                items.push_front(bytes);
            } else {
                items.push_back(bytes);
            }
        })
    }

    /// Remove and return the head element
    ///
    /// `None` on an empty or missing list; never blocks or waits.
    pub fn pop_left(&self, key: &str) -> Result<Option<T>> {
        self.pop(key, true)
    }

    /// Remove and return the tail element
    ///
    /// `None` on an empty or missing list; never blocks or waits.
    pub fn pop_right(&self, key: &str) -> Result<Option<T>> {
        self.pop(key, false)
    }

    fn pop(&self, key: &str, front: bool) -> Result<Option<T>> {
        let popped = self.keyspace.modify(key, EntryKind::List, |entry| {
            let items = items_mut(entry);
            if front {
                items.pop_front()
            } else {
                items.pop_back()
            }
        })?;
        match popped.flatten() {
            Some(bytes) => Ok(Some(codec::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Current element count; 0 for an absent key
    pub fn len(&self, key: &str) -> Result<usize> {
        let len = self.keyspace.read(key, EntryKind::List, |entry| {
            entry.as_list().map_or(0, |items| items.len())
        })?;
        Ok(len.unwrap_or(0))
    }

    /// True when the list is empty or the key is absent
    pub fn is_empty(&self, key: &str) -> Result<bool> {
        Ok(self.len(key)? == 0)
    }

    /// Inclusive-bounds slice using zero-based indices
    ///
    /// `start` and `end` are clamped into the valid index range; a window
    /// that is empty after clamping (including `start > end`) yields an
    /// empty sequence. `range(2, 12)` over 30 elements returns the 11
    /// elements at indices 2 through 12, in order.
    pub fn range(&self, key: &str, start: i64, end: i64) -> Result<Vec<T>> {
        let window = self.keyspace.read(key, EntryKind::List, |entry| {
            let items = match entry.as_list() {
                Some(items) if !items.is_empty() => items,
                _ => return Vec::new(),
            };
            let last = items.len() as i64 - 1;
            let start = start.max(0);
            let end = end.clamp(0, last);
            if start > end {
                return Vec::new();
            }
            let (start, end) = (start as usize, end as usize);
            items
                .iter()
                .skip(start)
                .take(end - start + 1)
                .cloned()
                .collect()
        })?;
        window
            .unwrap_or_default()
            .iter()
            .map(|bytes| codec::decode(bytes))
            .collect()
    }
}

fn items_mut(entry: &mut Entry) -> &mut std::collections::VecDeque<Bytes> {
    // The key space has already enforced EntryKind::List
    match entry {
        Entry::List(items) => items,
        _ => unreachable!("key space enforces entry kind"),
    }
}
