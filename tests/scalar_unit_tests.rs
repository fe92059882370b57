//! Unit tests for scalar normalization of identity and mode fields

use cicdez::error::{ErrorKind, FieldError};
use cicdez::extensions::FieldPath;
use cicdez::extensions::scalar::{RawScalar, normalize_identity, normalize_mode};
use cicdez::model::FileMode;
use serde_yaml::Value;

fn node(yaml: &str) -> Value {
    serde_yaml::from_str(yaml).unwrap()
}

fn path() -> FieldPath {
    FieldPath::service("web").key("local_configs").index(0).key("mode")
}

#[test]
fn test_raw_scalar_classification() {
    assert_eq!(RawScalar::from_node(None), RawScalar::Absent);
    assert_eq!(RawScalar::from_node(Some(&Value::Null)), RawScalar::Absent);
    assert_eq!(RawScalar::from_node(Some(&node("1000"))), RawScalar::Unsigned(1000));
    assert_eq!(RawScalar::from_node(Some(&node("-5"))), RawScalar::Signed(-5));
    assert_eq!(RawScalar::from_node(Some(&node("\"1000\""))), RawScalar::Text("1000"));
    assert_eq!(RawScalar::from_node(Some(&node("true"))), RawScalar::Other("a boolean"));
}

#[test]
fn test_identity_integer_and_string_are_equal() {
    let from_int = normalize_identity(Some(&node("1000")), &path()).unwrap();
    let from_str = normalize_identity(Some(&node("\"1000\"")), &path()).unwrap();
    assert_eq!(from_int, "1000");
    assert_eq!(from_int, from_str);
}

#[test]
fn test_identity_absent_is_empty() {
    assert_eq!(normalize_identity(None, &path()).unwrap(), "");
    assert_eq!(normalize_identity(Some(&Value::Null), &path()).unwrap(), "");
}

#[test]
fn test_identity_keeps_names_verbatim() {
    assert_eq!(normalize_identity(Some(&node("www-data")), &path()).unwrap(), "www-data");
}

#[test]
fn test_identity_rejects_non_scalars() {
    let error = normalize_identity(Some(&node("[1, 2]")), &path()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidType);

    let error = normalize_identity(Some(&node("1.5")), &path()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidType);
}

#[test]
fn test_mode_octal_literal() {
    // Leading-zero spelling is octal, not decimal 440
    let mode = normalize_mode(Some(&node("0440")), &path()).unwrap();
    assert_eq!(mode.bits(), 0o440);
    assert_eq!(mode.bits(), 288);
}

#[test]
fn test_mode_quoted_string_is_octal() {
    assert_eq!(normalize_mode(Some(&node("\"0440\"")), &path()).unwrap().bits(), 0o440);
    assert_eq!(normalize_mode(Some(&node("\"440\"")), &path()).unwrap().bits(), 0o440);
    assert_eq!(normalize_mode(Some(&node("\"0o755\"")), &path()).unwrap().bits(), 0o755);
}

#[test]
fn test_mode_prefixed_octal_integer() {
    assert_eq!(normalize_mode(Some(&node("0o600")), &path()).unwrap().bits(), 0o600);
}

#[test]
fn test_mode_plain_integer_is_taken_as_is() {
    assert_eq!(normalize_mode(Some(&node("420")), &path()).unwrap().bits(), 420);
}

#[test]
fn test_mode_absent_is_unset() {
    let mode = normalize_mode(None, &path()).unwrap();
    assert!(mode.is_unset());
    assert_eq!(mode, FileMode::UNSET);

    assert!(normalize_mode(Some(&node("\"\"")), &path()).unwrap().is_unset());
}

#[test]
fn test_mode_out_of_range() {
    let error = normalize_mode(Some(&node("0o10000")), &path()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidMode);
    assert_eq!(
        error.path().to_string(),
        "services.web.local_configs[0].mode"
    );

    let error = normalize_mode(Some(&node("\"17777\"")), &path()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidMode);
}

#[test]
fn test_mode_rejects_unparsable_values() {
    for yaml in ["\"0988\"", "-1", "\"rw-r--r--\"", "\"0o\"", "true", "1.5"] {
        let error = normalize_mode(Some(&node(yaml)), &path()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidMode, "mode {yaml}");
    }
}

#[test]
fn test_file_mode_display_is_octal() {
    assert_eq!(FileMode::new(0o440).unwrap().to_string(), "0440");
    assert!(FileMode::new(0o10000).is_none());
}

#[test]
fn test_identity_rejects_negative_integers() {
    let error = normalize_identity(Some(&node("-1")), &path()).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidType);
    assert!(error.to_string().contains("found a negative integer"));
}

#[test]
fn test_identity_integer_spellings() {
    // Prefixed octal is an integer and renders in decimal
    assert_eq!(normalize_identity(Some(&node("0o1750")), &path()).unwrap(), "1000");
    // Leading-zero digits are a string to the decoder and stay verbatim
    assert_eq!(normalize_identity(Some(&node("01000")), &path()).unwrap(), "01000");
}

#[test]
fn test_mode_error_shows_the_written_value() {
    let error = normalize_mode(Some(&node("true")), &path()).unwrap_err();
    assert!(matches!(error, FieldError::InvalidMode { ref value, .. } if value == "true"));

    let error = normalize_mode(Some(&node("1.5")), &path()).unwrap_err();
    assert!(matches!(error, FieldError::InvalidMode { ref value, .. } if value == "1.5"));
    assert!(!error.to_string().contains("floating point"));
}
