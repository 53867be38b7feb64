//! Query builder and the request traits it serves

use crate::types::{AccountType, Category, Params};
use chrono::{DateTime, Utc};

/// Conversion of a request field into its wire string
pub trait QueryValue {
    /// Render the value as sent on the wire
    fn to_query_value(&self) -> String;
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl QueryValue for &str {
    fn to_query_value(&self) -> String {
        (*self).to_string()
    }
}

macro_rules! impl_query_value_int {
    ($($t:ty),*) => {
        $(
            impl QueryValue for $t {
                fn to_query_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_query_value_int!(u8, u16, u32, u64, i32, i64);

/// Timestamps travel as base-10 epoch milliseconds
impl QueryValue for DateTime<Utc> {
    fn to_query_value(&self) -> String {
        self.timestamp_millis().to_string()
    }
}

impl QueryValue for Category {
    fn to_query_value(&self) -> String {
        self.as_str().to_string()
    }
}

impl QueryValue for AccountType {
    fn to_query_value(&self) -> String {
        self.as_str().to_string()
    }
}

/// Builder for a [`Params`] mapping
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    params: Params,
}

impl QueryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field that is always sent
    #[must_use]
    pub fn required(mut self, key: &str, value: impl QueryValue) -> Self {
        self.params.insert(key.to_string(), value.to_query_value());
        self
    }

    /// Add a field that is sent only when present
    #[must_use]
    pub fn optional<V: QueryValue>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.params.insert(key.to_string(), value.to_query_value());
        }
        self
    }

    /// Finish building
    pub fn build(self) -> Params {
        self.params
    }
}

/// A request that can be rendered as query parameters
pub trait ToQuery {
    /// Build the parameter mapping for the current request state
    fn to_query(&self) -> Params;
}

/// A request whose collection endpoint is paginated by an opaque cursor
pub trait CursorRequest: ToQuery {
    /// Replace the continuation cursor sent with the next request
    fn set_cursor(&mut self, cursor: String);
}
