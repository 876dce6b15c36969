//! Response envelope
//!
//! Exactly one of `result`/`error` carries the outcome; the other member
//! serializes as `null` so callers always see all four envelope fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::RpcError;
use super::request::PROTOCOL_VERSION;

/// The `error` member of a response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
}

/// A response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Value,
    pub error: Option<ErrorObject>,
    pub id: Value,
}

impl RpcResponse {
    /// Build a success envelope
    pub fn success(result: Value, id: Value) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION.to_string(),
            result,
            error: None,
            id,
        }
    }

    /// Build an error envelope
    pub fn error(err: &RpcError, id: Value) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION.to_string(),
            result: Value::Null,
            error: Some(ErrorObject {
                code: err.code(),
                message: err.message().to_string(),
            }),
            id,
        }
    }

    /// Whether this envelope carries a result
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Serialize the envelope
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("RpcResponse serialization cannot fail")
    }
}
