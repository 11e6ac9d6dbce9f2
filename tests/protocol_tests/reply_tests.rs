//! Reply Tests
//!
//! Scalar conversion accessors and variant helpers.

use bytes::Bytes;
use kvwire::error::ConversionError;
use kvwire::protocol::{decode_reply, Reply};

// =============================================================================
// Successful Conversions
// =============================================================================

#[test]
fn test_integer_reply_to_every_width() {
    let reply = Reply::Integer("100".into());

    assert_eq!(reply.to_i8().unwrap(), 100);
    assert_eq!(reply.to_i16().unwrap(), 100);
    assert_eq!(reply.to_i32().unwrap(), 100);
    assert_eq!(reply.to_i64().unwrap(), 100);
    assert_eq!(reply.to_u8().unwrap(), 100);
    assert_eq!(reply.to_u16().unwrap(), 100);
    assert_eq!(reply.to_u32().unwrap(), 100);
    assert_eq!(reply.to_u64().unwrap(), 100);
}

#[test]
fn test_negative_integer() {
    let reply = decode_reply(b":-128\r\n").unwrap();
    assert_eq!(reply.to_i8().unwrap(), -128);
    assert_eq!(reply.to_i64().unwrap(), -128);
}

#[test]
fn test_bulk_and_status_text_convert() {
    assert_eq!(Reply::bulk(Bytes::from_static(b"42")).to_u16().unwrap(), 42);
    assert_eq!(Reply::Status("7".into()).to_i32().unwrap(), 7);
}

#[test]
fn test_extreme_values() {
    assert_eq!(
        Reply::Integer("18446744073709551615".into()).to_u64().unwrap(),
        u64::MAX
    );
    assert_eq!(
        Reply::Integer("-9223372036854775808".into()).to_i64().unwrap(),
        i64::MIN
    );
}

// =============================================================================
// Range Errors
// =============================================================================

#[test]
fn test_overflow_i8() {
    let reply = decode_reply(b":300\r\n").unwrap();
    let err = reply.to_i8().unwrap_err();

    assert_eq!(
        err,
        ConversionError::OutOfRange {
            text: "300".into(),
            target: "i8",
        }
    );
    assert!(err.to_string().contains("out of range for i8"));
}

#[test]
fn test_negative_to_unsigned_is_out_of_range() {
    let err = Reply::Integer("-1".into()).to_u32().unwrap_err();
    assert!(matches!(err, ConversionError::OutOfRange { target: "u32", .. }));
}

#[test]
fn test_beyond_any_width() {
    let err = Reply::Integer("999999999999999999999999999999999999999999".into())
        .to_u64()
        .unwrap_err();
    assert!(matches!(err, ConversionError::OutOfRange { .. }));
}

#[test]
fn test_u64_overflow_by_one() {
    let err = Reply::Integer("18446744073709551616".into()).to_u64().unwrap_err();
    assert!(matches!(err, ConversionError::OutOfRange { target: "u64", .. }));
}

// =============================================================================
// Type Errors
// =============================================================================

#[test]
fn test_non_numeric_text() {
    let err = Reply::Status("OK".into()).to_i64().unwrap_err();
    assert_eq!(err, ConversionError::NotANumber { text: "OK".into() });
}

#[test]
fn test_empty_bulk_is_not_a_number() {
    let err = Reply::bulk(Bytes::new()).to_i32().unwrap_err();
    assert!(matches!(err, ConversionError::NotANumber { .. }));
}

#[test]
fn test_array_is_type_mismatch() {
    let reply = Reply::MultiBulk(Some(vec![Reply::Integer("1".into())]));
    assert_eq!(
        reply.to_i64().unwrap_err(),
        ConversionError::TypeMismatch { kind: "array" }
    );
    assert_eq!(
        Reply::MultiBulk(None).to_u8().unwrap_err(),
        ConversionError::TypeMismatch { kind: "null array" }
    );
}

#[test]
fn test_null_bulk_is_type_mismatch() {
    assert_eq!(
        Reply::Bulk(None).to_i16().unwrap_err(),
        ConversionError::TypeMismatch { kind: "null bulk" }
    );
}

#[test]
fn test_server_error_propagates_original_message() {
    let reply = decode_reply(b"-WRONGTYPE Operation against a key\r\n").unwrap();
    let err = reply.to_i64().unwrap_err();

    assert_eq!(
        err,
        ConversionError::Server("WRONGTYPE Operation against a key".into())
    );
    assert_eq!(err.to_string(), "WRONGTYPE Operation against a key");
}

// =============================================================================
// Helper Tests
// =============================================================================

#[test]
fn test_as_text() {
    assert_eq!(Reply::Integer("5".into()).as_text().unwrap(), "5");
    assert_eq!(Reply::bulk(Bytes::from_static(b"abc")).as_text().unwrap(), "abc");
    assert!(Reply::Bulk(None).as_text().is_err());
}

#[test]
fn test_nil_and_error_predicates() {
    assert!(Reply::Bulk(None).is_nil());
    assert!(Reply::MultiBulk(None).is_nil());
    assert!(!Reply::Bulk(Some(Bytes::new())).is_nil());
    assert!(!Reply::MultiBulk(Some(vec![])).is_nil());

    assert!(Reply::Error("ERR".into()).is_error());
    assert!(!Reply::Status("ERR".into()).is_error());
}
