//! ScalarStore: single-value storage primitive
//!
//! ## Semantics
//!
//! - `set` creates or overwrites the scalar under a key. No prior value
//!   is preserved. A key holding a list or set fails `TypeMismatch`;
//!   delete the key first to change its kind.
//! - `get` decodes a fresh payload instance on every call. Absence is
//!   `None`, never an error; a non-scalar key is `TypeMismatch` rather
//!   than silently absent.
//! - `get_raw` exposes the stored canonical bytes for interop with
//!   external readers of the same store.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;
use trove_core::codec;
use trove_core::entry::{Entry, EntryKind};
use trove_core::error::Result;
use trove_storage::KeySpace;

/// Single-value storage primitive
///
/// Stateless facade over [`KeySpace`]: holds no data of its own beyond
/// the shared reference.
#[derive(Debug)]
pub struct ScalarStore<T> {
    keyspace: Arc<KeySpace>,
    _payload: PhantomData<fn() -> T>,
}

// Manual Clone: the payload type itself need not be Clone
impl<T> Clone for ScalarStore<T> {
    fn clone(&self) -> Self {
        Self {
            keyspace: Arc::clone(&self.keyspace),
            _payload: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> ScalarStore<T> {
    /// Create a scalar store over the given key space
    pub fn new(keyspace: Arc<KeySpace>) -> Self {
        Self {
            keyspace,
            _payload: PhantomData,
        }
    }

    /// Store a value under a key, creating or overwriting
    pub fn set(&self, key: &str, value: &T) -> Result<()> {
        let bytes = codec::encode(value)?;
        debug!(key, len = bytes.len(), "scalar set");
        self.keyspace.put(key, Entry::Scalar(bytes))
    }

    /// Fetch the value under a key
    ///
    /// Returns `None` when the key is absent.
    pub fn get(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            Some(bytes) => Ok(Some(codec::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Fetch the stored canonical bytes under a key
    ///
    /// The wire-format view of `get`: no decode step, byte-exact.
    pub fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.keyspace.read(key, EntryKind::Scalar, |entry| {
            entry.as_scalar().cloned().unwrap_or_default()
        })
    }
}
