//! Envelope and page abstractions

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard Bybit v5 response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<R> {
    /// Status code, `0` on success
    pub ret_code: i64,
    /// Status message
    pub ret_msg: String,
    /// Endpoint-specific payload
    pub result: R,
    /// Extra information, usually `{}`
    #[serde(default = "empty_object")]
    pub ret_ext_info: Value,
    /// Server time in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

impl<R> Envelope<R> {
    /// Wrap a result in a successful envelope (`retCode = 0`, `retMsg = "OK"`)
    pub fn ok(result: R) -> Self {
        Self {
            ret_code: 0,
            ret_msg: "OK".to_string(),
            result,
            ret_ext_info: empty_object(),
            time: None,
        }
    }

    /// Whether the envelope reports success
    pub fn is_success(&self) -> bool {
        self.ret_code == 0
    }
}

/// The `result` of one page of a cursor-paginated collection.
///
/// The aggregator only moves records around; it never looks inside them.
pub trait Page: DeserializeOwned + Send {
    /// Item type of the collection
    type Record: Send;

    /// Move the records out of this page, leaving it empty
    fn take_records(&mut self) -> Vec<Self::Record>;

    /// Continuation token, empty when this is the last page
    fn next_cursor(&self) -> &str;

    /// Install the aggregated records and clear the continuation token
    fn finish(&mut self, records: Vec<Self::Record>);
}
