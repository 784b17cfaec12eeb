//! Error types for Trove
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! ## Absence is not an error
//!
//! Read-style operations (get, pop, range, size) report a missing key as
//! `None` / `0` / empty, never as an error. Write operations create keys
//! on demand and never fail for absence. The only per-operation failures
//! are kind mismatches, malformed wire bytes, and invalid keys, and each
//! is fatal to that single operation only: the key space is never left
//! corrupted by a failed call.

use crate::entry::EntryKind;
use crate::key::KeyError;
use thiserror::Error;

/// Result type alias for Trove operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the Trove store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operation's expected entry kind does not match the key's stored kind
    #[error("type mismatch on key {key:?}: expected {expected}, found {actual}")]
    TypeMismatch {
        /// Key the operation targeted
        key: String,
        /// Kind the operation expected
        expected: EntryKind,
        /// Kind actually stored under the key
        actual: EntryKind,
    },

    /// Stored or supplied wire bytes could not be decoded
    #[error("decode error{}: {message}", offset_suffix(.offset))]
    Decode {
        /// Byte offset of the offending input, when determinable
        offset: Option<usize>,
        /// Underlying parser message
        message: String,
    },

    /// Payload could not be encoded to the canonical wire form
    #[error("encode error: {0}")]
    Encode(String),

    /// Key failed validation
    #[error("invalid key: {0}")]
    InvalidKey(#[from] KeyError),
}

fn offset_suffix(offset: &Option<usize>) -> String {
    match offset {
        Some(pos) => format!(" at byte {pos}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display_names_key_and_kinds() {
        let err = Error::TypeMismatch {
            key: "cart".to_string(),
            expected: EntryKind::List,
            actual: EntryKind::Scalar,
        };
        let msg = err.to_string();
        assert!(msg.contains("cart"));
        assert!(msg.contains("expected list"));
        assert!(msg.contains("found scalar"));
    }

    #[test]
    fn test_decode_display_with_offset() {
        let err = Error::Decode {
            offset: Some(17),
            message: "expected value".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("at byte 17"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn test_decode_display_without_offset() {
        let err = Error::Decode {
            offset: None,
            message: "unexpected end of input".to_string(),
        };
        let msg = err.to_string();
        assert!(!msg.contains("at byte"));
        assert!(msg.contains("unexpected end of input"));
    }

    #[test]
    fn test_invalid_key_from_key_error() {
        let err: Error = KeyError::Empty.into();
        assert!(matches!(err, Error::InvalidKey(KeyError::Empty)));
        assert!(err.to_string().contains("invalid key"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        fn returns_error() -> Result<i32> {
            Err(Error::Encode("test".to_string()))
        }

        assert_eq!(returns_result().unwrap(), 42);
        assert!(returns_error().is_err());
    }
}
