//! JSON-RPC 2.0 envelopes.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, RpcError};
use crate::Result;

pub const VERSION: &str = "2.0";

/// Request identifier: a number drawn from the client counter, or whatever
/// the caller pinned.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Id {
    Num(u64),
    Str(String),
}

impl From<u64> for Id {
    fn from(id: u64) -> Self {
        Id::Num(id)
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Id::Str(id.to_string())
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Id::Str(id)
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Id::Num(n) => write!(f, "{n}"),
            Id::Str(s) => f.write_str(s),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Request {
    pub jsonrpc: String, // jsonrpc must be "2.0"
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>, // always sent, `[]` when the method takes nothing
    pub id: Id,
}

impl Request {
    pub fn new(method: impl Into<String>, params: Vec<Value>, id: Id) -> Self {
        Self {
            jsonrpc: VERSION.to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

/// A decoded response envelope. `result` is `Some` whenever the member was
/// present, including an explicit `null`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Response {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl Response {
    pub fn failure(id: Id, code: i64, message: impl Into<String>) -> Self {
        Self {
            id: Some(serde_json::to_value(id).unwrap_or(Value::Null)),
            result: None,
            error: Some(serde_json::json!({ "code": code, "message": message.into() })),
        }
    }
}

pub fn encode(request: &Request) -> Result<Vec<u8>> {
    serde_json::to_vec(request).map_err(Error::Encode)
}

/// Parse a response body. Anything that is not a JSON object is `BadJson`.
pub fn decode(bytes: &[u8]) -> Result<Response> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| Error::BadJson(format!("invalid json received from node: {e}")))?;
    if !value.is_object() {
        return Err(Error::BadJson(format!("expected a json object, got {value}")));
    }
    serde_json::from_value(value).map_err(|e| Error::BadJson(e.to_string()))
}

pub fn extract_result(response: Response) -> Result<Value> {
    if let Some(result) = response.result {
        return Ok(result);
    }
    match response.error {
        Some(error) => {
            let error: RpcError = serde_json::from_value(error)
                .map_err(|e| Error::BadJson(format!("malformed error object: {e}")))?;
            Err(Error::BadResponse(error))
        }
        None => Err(Error::BadJson(
            "response carries neither result nor error".to_string(),
        )),
    }
}
