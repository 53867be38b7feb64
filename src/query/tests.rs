//! Tests for the query builder

use super::*;
use crate::types::{AccountType, Category};
use chrono::{TimeZone, Utc};
use test_case::test_case;

#[test]
fn test_required_fields_always_present() {
    let params = QueryBuilder::new()
        .required("category", Category::Linear)
        .required("accountType", AccountType::Unified)
        .build();

    assert_eq!(params.len(), 2);
    assert_eq!(params.get("category"), Some(&"linear".to_string()));
    assert_eq!(params.get("accountType"), Some(&"UNIFIED".to_string()));
}

#[test]
fn test_absent_optional_field_is_omitted() {
    let params = QueryBuilder::new()
        .required("category", Category::Spot)
        .optional("symbol", None::<&str>)
        .optional("limit", None::<u32>)
        .build();

    assert_eq!(params.len(), 1);
    assert!(!params.contains_key("symbol"));
    assert!(!params.contains_key("limit"));
}

#[test]
fn test_present_zero_and_empty_values_are_sent() {
    let params = QueryBuilder::new()
        .optional("limit", Some(0u32))
        .optional("symbol", Some(""))
        .build();

    assert_eq!(params.get("limit"), Some(&"0".to_string()));
    assert_eq!(params.get("symbol"), Some(&String::new()));
}

#[test]
fn test_timestamp_as_epoch_millis() {
    let ts = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
    let params = QueryBuilder::new().optional("startTime", Some(ts)).build();
    assert_eq!(params.get("startTime"), Some(&"1700000000123".to_string()));
}

#[test_case(0, "0" ; "zero")]
#[test_case(42, "42" ; "small")]
#[test_case(1_000_000, "1000000" ; "no separators")]
fn test_integer_rendering(value: u32, expected: &str) {
    assert_eq!(value.to_query_value(), expected);
}

#[test]
fn test_negative_integer_rendering() {
    assert_eq!((-15i64).to_query_value(), "-15");
}

#[test]
fn test_later_insert_replaces_value() {
    let params = QueryBuilder::new()
        .optional("cursor", Some("a"))
        .optional("cursor", Some("b"))
        .build();
    assert_eq!(params.get("cursor"), Some(&"b".to_string()));
}
