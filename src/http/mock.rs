//! Scripted in-memory transport for unit tests

use super::Transport;
use crate::error::{Error, Result};
use crate::types::Params;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A request observed by [`ScriptedTransport`]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Get { path: String, params: Params },
    Post { path: String, body: Value },
}

/// Replays queued responses in order and records every call
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub(crate) fn respond(self, value: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(value));
        self
    }

    /// Queue a failure
    pub(crate) fn fail(self, err: Error) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Query parameters of every GET, in order
    pub(crate) fn get_params(&self) -> Vec<Params> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Get { params, .. } => Some(params),
                Call::Post { .. } => None,
            })
            .collect()
    }

    fn next(&self) -> Result<Value> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Other("no scripted response left".to_string())))
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, path: &str, params: &Params) -> Result<Value> {
        self.calls.lock().unwrap().push(Call::Get {
            path: path.to_string(),
            params: params.clone(),
        });
        self.next()
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.calls.lock().unwrap().push(Call::Post {
            path: path.to_string(),
            body: body.clone(),
        });
        self.next()
    }
}
