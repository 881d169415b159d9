use crate::{ApiError, parse_match_id};

#[test]
fn given_positive_integer_when_parsed_then_ok() {
    assert_eq!(parse_match_id("42").unwrap(), 42);
}

#[test]
fn given_non_positive_or_non_numeric_when_parsed_then_validation_error() {
    for raw in ["0", "-3", "abc", "1.5", ""] {
        let result = parse_match_id(raw);
        assert!(
            matches!(result, Err(ApiError::Validation { .. })),
            "'{raw}' should be rejected"
        );
    }
}
