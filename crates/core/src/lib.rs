//! Core types for Trove
//!
//! This crate defines the foundational types used throughout the system:
//! - Key: String key validation rules
//! - Entry / EntryKind: Tagged union stored under a key (scalar | list | set)
//! - Codec: Canonical JSON wire encoding for payload types
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod entry;
pub mod error;
pub mod key;

// Re-export commonly used types
pub use codec::{decode, encode};
pub use entry::{Bytes, Entry, EntryKind};
pub use error::{Error, Result};
pub use key::{validate_key, KeyError, MAX_KEY_BYTES};
