use crate::{ApiError, ListQuery};

use sportz_config::ApiConfig;

fn assert_limit_rejected(result: crate::ApiResult<usize>) {
    match result {
        Err(ApiError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("limit")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_no_limit_when_resolved_bounded_then_default_is_used() {
    let config = ApiConfig::default();

    let limit = ListQuery { limit: None }.resolve_bounded(&config).unwrap();

    assert_eq!(limit, config.default_list_limit);
}

#[test]
fn given_limit_at_max_when_resolved_bounded_then_kept() {
    let limit = ListQuery { limit: Some(100) }
        .resolve_bounded(&ApiConfig::default())
        .unwrap();

    assert_eq!(limit, 100);
}

#[test]
fn given_limit_above_max_when_resolved_bounded_then_validation_error() {
    assert_limit_rejected(ListQuery { limit: Some(101) }.resolve_bounded(&ApiConfig::default()));
}

#[test]
fn given_no_limit_when_resolved_clamped_then_max_is_used() {
    let config = ApiConfig::default();

    let limit = ListQuery { limit: None }.resolve_clamped(&config).unwrap();

    assert_eq!(limit, config.max_list_limit);
}

#[test]
fn given_limit_above_max_when_resolved_clamped_then_clamped() {
    let config = ApiConfig::default();

    let limit = ListQuery { limit: Some(5000) }
        .resolve_clamped(&config)
        .unwrap();

    assert_eq!(limit, config.max_list_limit);
}

#[test]
fn given_zero_limit_when_resolved_then_validation_error() {
    let config = ApiConfig::default();

    assert_limit_rejected(ListQuery { limit: Some(0) }.resolve_bounded(&config));
    assert_limit_rejected(ListQuery { limit: Some(0) }.resolve_clamped(&config));
}
