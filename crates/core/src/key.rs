//! Key validation for Trove
//!
//! Keys are case-sensitive Unicode strings with specific constraints,
//! enforced on every write path:
//! - Keys must be valid UTF-8 (guaranteed by Rust's &str type)
//! - Keys must not be empty
//! - Keys must not contain NUL bytes (\0)
//! - Keys must not exceed [`MAX_KEY_BYTES`]
//!
//! Read paths skip validation: an invalid key can never have been written,
//! so reading it simply observes absence.

use thiserror::Error;

/// Maximum key length in bytes
pub const MAX_KEY_BYTES: usize = 1024;

/// Validate a key
///
/// This is the primary validation function, called by the key space on
/// every write.
///
/// # Examples
///
/// ```
/// use trove_core::key::validate_key;
///
/// assert!(validate_key("cart").is_ok());
/// assert!(validate_key("user:123").is_ok());
///
/// assert!(validate_key("").is_err()); // empty
/// assert!(validate_key("a\x00b").is_err()); // contains NUL
/// ```
pub fn validate_key(key: &str) -> Result<(), KeyError> {
    if key.is_empty() {
        return Err(KeyError::Empty);
    }

    if key.contains('\x00') {
        return Err(KeyError::ContainsNul);
    }

    let len = key.len();
    if len > MAX_KEY_BYTES {
        return Err(KeyError::TooLong {
            actual: len,
            max: MAX_KEY_BYTES,
        });
    }

    Ok(())
}

/// Key validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Key is empty (length 0)
    #[error("key cannot be empty")]
    Empty,

    /// Key contains a NUL byte (\0)
    #[error("key cannot contain NUL bytes")]
    ContainsNul,

    /// Key exceeds maximum length
    #[error("key too long: {actual} bytes exceeds maximum {max}")]
    TooLong {
        /// Actual key length in bytes
        actual: usize,
        /// Maximum allowed length in bytes
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        assert!(validate_key("cart").is_ok());
        assert!(validate_key("9781617291203").is_ok());
        assert!(validate_key("user:123:cart").is_ok());
        assert!(validate_key("日本語").is_ok());
        assert!(validate_key(" ").is_ok()); // whitespace-only is allowed
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(validate_key(""), Err(KeyError::Empty));
    }

    #[test]
    fn test_nul_byte_rejected() {
        assert_eq!(validate_key("a\x00b"), Err(KeyError::ContainsNul));
        assert_eq!(validate_key("\x00"), Err(KeyError::ContainsNul));
    }

    #[test]
    fn test_max_length_boundary() {
        let at_limit = "k".repeat(MAX_KEY_BYTES);
        assert!(validate_key(&at_limit).is_ok());

        let over_limit = "k".repeat(MAX_KEY_BYTES + 1);
        assert_eq!(
            validate_key(&over_limit),
            Err(KeyError::TooLong {
                actual: MAX_KEY_BYTES + 1,
                max: MAX_KEY_BYTES,
            })
        );
    }

    #[test]
    fn test_length_counts_bytes_not_chars() {
        // Multi-byte characters count by encoded length
        let key = "é".repeat(MAX_KEY_BYTES / 2 + 1); // 2 bytes each
        assert!(validate_key(&key).is_err());
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        // Both forms are valid; the key space treats them as distinct
        assert!(validate_key("Cart").is_ok());
        assert!(validate_key("cart").is_ok());
    }
}
