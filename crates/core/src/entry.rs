//! Entry types for Trove
//!
//! This module defines:
//! - Entry: Tagged union over the three stored value shapes
//! - EntryKind: Discriminant used for type checks and error reporting
//!
//! ## Canonical Entry Model
//!
//! A key holds exactly one Entry, and the variant is fixed from the first
//! write until the key is deleted. Every operation declares the kind it
//! expects; a mismatch is surfaced as `Error::TypeMismatch` and never
//! mutates the stored entry.
//!
//! ## Encoded-byte storage
//!
//! Entries hold the canonical JSON encoding of payloads, not decoded
//! values. Consequences:
//! - Every read decodes a fresh instance; nothing stored is ever aliased
//!   by a caller.
//! - Set uniqueness is canonical-byte equality, which coincides with
//!   value equality of the payload because the codec is canonical.

use std::collections::{HashSet, VecDeque};
use std::fmt;

/// Canonical JSON encoding of one payload value
pub type Bytes = Vec<u8>;

/// The unit stored under a key
///
/// Tagged union over the three value shapes. The variant of a live key
/// never changes; delete the key to store a different kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A single encoded payload
    Scalar(Bytes),
    /// Ordered, duplicate-permitting, double-ended sequence
    List(VecDeque<Bytes>),
    /// Unordered collection, unique by canonical-byte equality
    Set(HashSet<Bytes>),
}

impl Entry {
    /// Create an empty entry of the given kind
    ///
    /// Used by the key space when a write targets an absent key.
    pub fn empty(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Scalar => Entry::Scalar(Bytes::new()),
            EntryKind::List => Entry::List(VecDeque::new()),
            EntryKind::Set => Entry::Set(HashSet::new()),
        }
    }

    /// The discriminant of this entry
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Scalar(_) => EntryKind::Scalar,
            Entry::List(_) => EntryKind::List,
            Entry::Set(_) => EntryKind::Set,
        }
    }

    /// Get the encoded scalar if this is a Scalar entry
    pub fn as_scalar(&self) -> Option<&Bytes> {
        match self {
            Entry::Scalar(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Get the sequence if this is a List entry
    pub fn as_list(&self) -> Option<&VecDeque<Bytes>> {
        match self {
            Entry::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the sequence mutably if this is a List entry
    pub fn as_list_mut(&mut self) -> Option<&mut VecDeque<Bytes>> {
        match self {
            Entry::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the members if this is a Set entry
    pub fn as_set(&self) -> Option<&HashSet<Bytes>> {
        match self {
            Entry::Set(members) => Some(members),
            _ => None,
        }
    }

    /// Get the members mutably if this is a Set entry
    pub fn as_set_mut(&mut self) -> Option<&mut HashSet<Bytes>> {
        match self {
            Entry::Set(members) => Some(members),
            _ => None,
        }
    }
}

/// Discriminant for [`Entry`] variants
///
/// Named in operation contracts ("this operation expects a List key")
/// and in `TypeMismatch` errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Single value
    Scalar,
    /// Ordered sequence
    List,
    /// Unordered unique collection
    Set,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryKind::Scalar => "scalar",
            EntryKind::List => "list",
            EntryKind::Set => "set",
        };
        write!(f, "{name}")
    }
}
