//! Integration tests for Error types
//!
//! Tests error construction, display, locations, and error kinds.

use argspec_foundation::{CoercionFailure, Error, ErrorKind, Location, TypeTag};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_unknown_option() {
    let err = Error::unknown_option("--bogus");
    assert!(matches!(err.kind, ErrorKind::UnknownOption(_)));
    assert!(err.location.is_none());
    assert_eq!(err.to_string(), "unknown option: --bogus");
}

#[test]
fn error_missing_required_option() {
    let err = Error::missing_required_option("--size");
    assert_eq!(err.to_string(), "--size is a mandatory option");
}

#[test]
fn error_type_coercion() {
    let err = Error::type_coercion(&TypeTag::Int(16), "1a", CoercionFailure::NotDigits);
    assert!(matches!(err.kind, ErrorKind::TypeCoercion { .. }));
    let msg = err.to_string();
    assert!(msg.contains("Int16"));
    assert!(msg.contains("\"1a\""));
}

#[test]
fn error_insufficient_rest_names_the_tag() {
    let err = Error::insufficient_rest_arguments(&TypeTag::Float);
    assert_eq!(
        err.kind,
        ErrorKind::InsufficientRestArguments {
            tag: "Float".to_string()
        }
    );
}

// =============================================================================
// Locations
// =============================================================================

#[test]
fn location_is_appended_to_display() {
    let err = Error::too_many_arguments("extra").at(Location::Argument(3));
    assert_eq!(err.to_string(), "too many arguments, starting at \"extra\" (argument 3)");
}

#[test]
fn or_at_keeps_existing_location() {
    let err = Error::unknown_option("-x")
        .at(Location::Argument(1))
        .or_at(Location::Argument(7));
    assert_eq!(err.location, Some(Location::Argument(1)));

    let err = Error::unknown_option("-x").or_at(Location::Argument(7));
    assert_eq!(err.location, Some(Location::Argument(7)));
}

// =============================================================================
// Error Categories
// =============================================================================

#[test]
fn only_spec_syntax_is_a_compile_error() {
    assert!(Error::spec_syntax("bad").kind.is_compile_error());
    assert!(!Error::unknown_option("-x").kind.is_compile_error());
    assert!(!Error::missing_argument("-x").kind.is_compile_error());
    assert!(!Error::too_many_arguments("x").kind.is_compile_error());
}

#[test]
fn errors_are_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::spec_syntax("bad"));
}
