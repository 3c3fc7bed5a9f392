use crate::{IdentifierError, PanValidation, check_pan_format, validate_pan};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_well_formed_pan_when_validated_then_valid() {
    let result = validate_pan("ABCDE1234F");

    assert_that!(result.is_valid, eq(true));
    assert!(result.error.is_none());
}

#[test]
fn given_lowercase_pan_when_validated_then_invalid_format() {
    let result = validate_pan("abcde1234f");

    assert_eq!(
        result,
        PanValidation {
            is_valid: false,
            error: Some("Invalid PAN format".to_string()),
        }
    );
}

#[test]
fn given_empty_pan_when_validated_then_length_error() {
    let result = validate_pan("");

    assert_that!(result.is_valid, eq(false));
    assert_eq!(result.error.as_deref(), Some("PAN must be 10 characters"));
}

#[test]
fn given_wrong_length_when_checked_then_invalid_length() {
    assert!(matches!(
        check_pan_format("ABCDE1234"),
        Err(IdentifierError::InvalidLength { .. })
    ));
    assert!(matches!(
        check_pan_format("ABCDE1234FG"),
        Err(IdentifierError::InvalidLength { .. })
    ));
}

#[test]
fn given_misplaced_digits_when_checked_then_invalid_format() {
    assert!(matches!(
        check_pan_format("ABCD11234F"),
        Err(IdentifierError::InvalidFormat { .. })
    ));
    assert!(matches!(
        check_pan_format("ABCDE12345"),
        Err(IdentifierError::InvalidFormat { .. })
    ));
}

#[test]
fn given_multibyte_input_of_ten_chars_when_checked_then_invalid_format() {
    let result = check_pan_format("ABCDE1234É");

    assert_that!(result, err(anything()));
    assert_eq!(result.unwrap_err().message(), "Invalid PAN format");
}

#[test]
fn given_same_pan_twice_when_validated_then_identical_results() {
    for pan in ["ABCDE1234F", "abcde1234f", ""] {
        assert_eq!(validate_pan(pan), validate_pan(pan));
    }
    assert_that!(check_pan_format("AAAPL1234C"), ok(anything()));
}

#[test]
fn given_validation_when_serialized_then_camel_case_without_empty_error() {
    let json = serde_json::to_value(validate_pan("ABCDE1234F")).unwrap();

    assert_eq!(json, serde_json::json!({ "isValid": true }));
}
