//! Tests for the decode module

use super::*;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct TestPage {
    list: Vec<u32>,
    next_page_cursor: String,
}

impl Page for TestPage {
    type Record = u32;

    fn take_records(&mut self) -> Vec<u32> {
        std::mem::take(&mut self.list)
    }

    fn next_cursor(&self) -> &str {
        &self.next_page_cursor
    }

    fn finish(&mut self, records: Vec<u32>) {
        self.list = records;
        self.next_page_cursor.clear();
    }
}

#[test]
fn test_decode_envelope_success() {
    let value = json!({
        "retCode": 0,
        "retMsg": "success",
        "result": {"list": [1, 2], "nextPageCursor": "abc"},
        "retExtInfo": {},
        "time": 1_700_000_000_000i64
    });

    let envelope: Envelope<TestPage> = decode_envelope(&value).unwrap();
    assert!(envelope.is_success());
    assert_eq!(envelope.ret_msg, "success");
    assert_eq!(envelope.result.list, vec![1, 2]);
    assert_eq!(envelope.result.next_cursor(), "abc");
    assert_eq!(envelope.time, Some(1_700_000_000_000));
}

#[test]
fn test_decode_envelope_defaults_optional_fields() {
    let value = json!({
        "retCode": 0,
        "retMsg": "OK",
        "result": {"list": [], "nextPageCursor": ""}
    });

    let envelope: Envelope<TestPage> = decode_envelope(&value).unwrap();
    assert_eq!(envelope.ret_ext_info, json!({}));
    assert_eq!(envelope.time, None);
}

#[test]
fn test_decode_envelope_missing_cursor_fails() {
    let value = json!({
        "retCode": 0,
        "retMsg": "OK",
        "result": {"list": [1]}
    });

    let err = decode_envelope::<TestPage>(&value).unwrap_err();
    assert!(err.to_string().contains("nextPageCursor"));
}

#[test]
fn test_decode_envelope_mistyped_records_fail() {
    let value = json!({
        "retCode": 0,
        "retMsg": "OK",
        "result": {"list": "not-a-list", "nextPageCursor": ""}
    });

    assert!(decode_envelope::<TestPage>(&value).is_err());
}

#[test]
fn test_decode_envelope_missing_result_fails() {
    let value = json!({"retCode": 0, "retMsg": "OK"});
    assert!(decode_envelope::<TestPage>(&value).is_err());
}

#[test]
fn test_envelope_ok_normalizes_status() {
    let envelope = Envelope::ok(vec![1, 2, 3]);
    assert_eq!(envelope.ret_code, 0);
    assert_eq!(envelope.ret_msg, "OK");
    assert_eq!(envelope.ret_ext_info, json!({}));
    assert!(envelope.time.is_none());
}

#[test]
fn test_page_finish_clears_cursor() {
    let mut page = TestPage {
        list: vec![9],
        next_page_cursor: "next".to_string(),
    };
    let taken = page.take_records();
    assert_eq!(taken, vec![9]);
    assert!(page.list.is_empty());

    page.finish(vec![1, 2]);
    assert_eq!(page.list, vec![1, 2]);
    assert_eq!(page.next_cursor(), "");
}
