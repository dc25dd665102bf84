use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use super::Transport;
use crate::jsonrpc::{self, Request, Response};
use crate::Result;

/// In-memory transport answering from canned response bodies.
///
/// Bodies go through the real decoder, so a body without `result` behaves
/// exactly as it would coming off the wire. Unknown methods get the node's
/// "method not found" error.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, Value>>,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method` with the given raw envelope, e.g. `{"result": "0x10"}`.
    pub fn set_response(&self, method: &str, body: Value) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(method.to_string(), body);
    }

    pub fn set_result(&self, method: &str, result: Value) {
        self.set_response(method, serde_json::json!({ "jsonrpc": "2.0", "result": result }));
    }

    /// Every request seen so far, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_request(&self) -> Option<Request> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &Request) -> Result<Response> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let body = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&request.method)
            .cloned();

        match body {
            Some(body) => jsonrpc::decode(body.to_string().as_bytes()),
            None => Ok(Response::failure(
                request.id.clone(),
                -32601,
                format!("the method {} does not exist/is not available", request.method),
            )),
        }
    }
}
