//! Transport trait

use super::client::HttpClient;
use crate::error::Result;
use crate::types::Params;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Authenticated request/response exchange with the REST API.
///
/// Responses are returned as generic JSON; callers specialize them with the
/// decoders in [`crate::decode`]. Implementations must be safe to share
/// between concurrent aggregations.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` with the given query parameters
    async fn get(&self, path: &str, params: &Params) -> Result<Value>;

    /// POST a JSON body to `path`
    async fn post(&self, path: &str, body: &Value) -> Result<Value>;
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, path: &str, params: &Params) -> Result<Value> {
        self.get_json(path, params).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.post_json(path, body).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn get(&self, path: &str, params: &Params) -> Result<Value> {
        (**self).get(path, params).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        (**self).post(path, body).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, path: &str, params: &Params) -> Result<Value> {
        (**self).get(path, params).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        (**self).post(path, body).await
    }
}
