//! Canonical JSON wire codec
//!
//! Every payload stored in or read from the key space passes through this
//! module. The wire form is the compatibility boundary with external
//! readers of the same store, so it is a first-class contract rather than
//! a serializer default:
//!
//! - Struct fields serialize in declaration order (serde's behavior),
//!   giving a stable key order.
//! - No whitespace is emitted.
//! - Numbers render as bare JSON numbers with shortest round-trip
//!   formatting (`39.99`, not `39.9900`).
//!
//! ## Round-trip law
//!
//! `decode(encode(x)) == x` for every valid payload. The demonstration
//! payload `{"sku":"9781617291203","name":"Spring in Action","price":39.99}`
//! must survive byte-exactly.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encode a payload to its canonical JSON bytes
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| Error::Encode(e.to_string()))
}

/// Decode a payload from canonical JSON bytes
///
/// Exact inverse of [`encode`]. Malformed input fails with
/// [`Error::Decode`] carrying the byte offset of the offending input
/// when determinable.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| Error::Decode {
        offset: byte_offset(bytes, e.line(), e.column()),
        message: e.to_string(),
    })
}

/// Translate serde_json's 1-based line/column position into a byte offset
///
/// Returns `None` when the parser reported no position (line or column 0)
/// or the position does not fall inside the input.
fn byte_offset(input: &[u8], line: usize, column: usize) -> Option<usize> {
    if line == 0 || column == 0 {
        return None;
    }

    let mut line_start = 0;
    let mut remaining = line - 1;
    for (i, b) in input.iter().enumerate() {
        if remaining == 0 {
            break;
        }
        if *b == b'\n' {
            remaining -= 1;
            line_start = i + 1;
        }
    }
    if remaining > 0 {
        return None;
    }

    let offset = line_start + column - 1;
    if offset > input.len() {
        return None;
    }
    Some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        sku: String,
        name: String,
        price: f64,
    }

    fn sample() -> Item {
        Item {
            sku: "9781617291203".to_string(),
            name: "Spring in Action".to_string(),
            price: 39.99,
        }
    }

    #[test]
    fn test_encode_canonical_bytes() {
        let bytes = encode(&sample()).unwrap();
        assert_eq!(
            bytes,
            br#"{"sku":"9781617291203","name":"Spring in Action","price":39.99}"#
        );
    }

    #[test]
    fn test_encode_no_trailing_zeros() {
        let item = Item {
            sku: "SKU-1".to_string(),
            name: "PRODUCT 1".to_string(),
            price: 1.99,
        };
        let json = String::from_utf8(encode(&item).unwrap()).unwrap();
        assert!(json.ends_with("1.99}"), "got: {json}");
    }

    #[test]
    fn test_decode_is_inverse_of_encode() {
        let item = sample();
        let decoded: Item = decode(&encode(&item).unwrap()).unwrap();
        assert_eq!(decoded, item);
    }

    #[test]
    fn test_decode_malformed_reports_offset() {
        // "expected value at line 1 column 6" -> byte offset 5
        let err = decode::<Vec<i64>>(b"[1,2,x]").unwrap_err();
        match err {
            Error::Decode { offset, .. } => assert_eq!(offset, Some(5)),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_malformed_multiline_offset() {
        // Error on the second line: offset counts from the start of input
        let input = b"[1,\nx]";
        let err = decode::<Vec<i64>>(input).unwrap_err();
        match err {
            Error::Decode { offset, .. } => assert_eq!(offset, Some(4)),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_truncated_input_fails() {
        let mut bytes = encode(&sample()).unwrap();
        bytes.truncate(bytes.len() - 5);
        assert!(matches!(
            decode::<Item>(&bytes),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn test_decode_empty_input_fails() {
        assert!(decode::<Item>(b"").is_err());
    }

    #[test]
    fn test_byte_offset_out_of_range_is_none() {
        assert_eq!(byte_offset(b"[]", 1, 10), None);
        assert_eq!(byte_offset(b"[]", 5, 1), None);
        assert_eq!(byte_offset(b"[]", 0, 0), None);
    }

    proptest! {
        #[test]
        fn prop_roundtrip(
            sku in "[A-Za-z0-9-]{1,20}",
            name in "\\PC{0,40}",
            cents in 0u32..1_000_000,
        ) {
            let item = Item {
                sku,
                name,
                price: f64::from(cents) / 100.0,
            };
            let decoded: Item = decode(&encode(&item).unwrap()).unwrap();
            prop_assert_eq!(decoded, item);
        }

        #[test]
        fn prop_encoding_is_deterministic(sku in "[A-Za-z0-9-]{1,20}") {
            let item = Item {
                sku,
                name: "PRODUCT".to_string(),
                price: 0.99,
            };
            prop_assert_eq!(encode(&item).unwrap(), encode(&item).unwrap());
        }
    }
}
