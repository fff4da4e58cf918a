//! Integration tests for raw token coercion

use argspec_foundation::{CoercionFailure, ErrorKind, TypeCoercer, TypeTag, Value};

fn failure(tag: &str, raw: &str) -> CoercionFailure {
    let err = TypeCoercer::coerce(&TypeTag::parse(tag), raw).unwrap_err();
    match err.kind {
        ErrorKind::TypeCoercion { reason, .. } => reason,
        other => panic!("expected coercion error, got {other:?}"),
    }
}

// =============================================================================
// Successful Coercion
// =============================================================================

#[test]
fn int_in_various_radixes() {
    let cases = [
        ("Int10", "42", 42),
        ("Int2", "101", 5),
        ("Int8", "17", 15),
        ("Int16", "10", 16),
        ("Int36", "99", 333),
    ];
    for (tag, raw, expected) in cases {
        let value = TypeCoercer::coerce(&TypeTag::parse(tag), raw).unwrap();
        assert_eq!(value, Value::Int(expected), "{tag} {raw}");
    }
}

#[test]
fn float_accepts_standard_forms() {
    for (raw, expected) in [("1.5", 1.5), ("3", 3.0), ("2e3", 2000.0), ("-0.25", -0.25)] {
        let value = TypeCoercer::coerce(&TypeTag::Float, raw).unwrap();
        assert_eq!(value.as_float(), Some(expected), "{raw}");
    }
}

#[test]
fn string_passes_through() {
    let value = TypeCoercer::coerce(&TypeTag::String, "-not an option").unwrap();
    assert_eq!(value.as_str(), Some("-not an option"));
}

// =============================================================================
// Coercion Failures
// =============================================================================

#[test]
fn int_rejects_non_digits() {
    assert_eq!(failure("Int16", "1a"), CoercionFailure::NotDigits);
    assert_eq!(failure("Int10", ""), CoercionFailure::NotDigits);
    assert_eq!(failure("Int10", "+5"), CoercionFailure::NotDigits);
    assert_eq!(failure("Int10", "1.0"), CoercionFailure::NotDigits);
}

#[test]
fn int_reads_leading_digits_valid_in_radix() {
    let cases = [("Int8", "19", 1), ("Int2", "102", 2), ("Int8", "7789", 63)];
    for (tag, raw, expected) in cases {
        let value = TypeCoercer::coerce(&TypeTag::parse(tag), raw).unwrap();
        assert_eq!(value, Value::Int(expected), "{tag} {raw}");
    }
}

#[test]
fn int_rejects_token_with_no_digits_valid_in_radix() {
    assert_eq!(failure("Int8", "9"), CoercionFailure::NoValidDigits);
    assert_eq!(failure("Int2", "21"), CoercionFailure::NoValidDigits);
}

#[test]
fn int_rejects_overflow() {
    assert_eq!(failure("Int10", "99999999999999999999"), CoercionFailure::OutOfRange);
}

#[test]
fn int_rejects_unusable_radix() {
    assert_eq!(failure("Int1", "0"), CoercionFailure::InvalidRadix(1));
    assert_eq!(failure("Int37", "1"), CoercionFailure::InvalidRadix(37));
}

#[test]
fn int_radix_zero_reads_decimal() {
    let value = TypeCoercer::coerce(&TypeTag::parse("Int0"), "12").unwrap();
    assert_eq!(value, Value::Int(12));
}

#[test]
fn float_rejects_garbage() {
    assert_eq!(failure("Float", "one"), CoercionFailure::InvalidFloat);
    assert_eq!(failure("Float", ""), CoercionFailure::InvalidFloat);
}

#[test]
fn unknown_tag_always_fails() {
    assert_eq!(failure("Path", "/tmp"), CoercionFailure::UnknownType);
    assert_eq!(failure("Int", "1"), CoercionFailure::UnknownType);
}
