//! Request envelope parsing
//!
//! A request must carry all four JSON-RPC 2.0 members before any core
//! logic runs; that check happens at the transport boundary and yields an
//! HTTP-level rejection, not an envelope. The `params` payload is only
//! interpreted later, by the dispatcher, so its failures can be answered
//! with a proper error envelope carrying the request id.

use serde::Deserialize;
use serde_json::Value;

use super::errors::RpcError;

/// The one protocol version the service speaks
pub const PROTOCOL_VERSION: &str = "2.0";

/// Message for any missing top-level envelope member
const MISSING_MEMBERS: &str = "Please set \"jsonrpc\", \"method\", \"params\", and request \"id\".";

/// A parsed request envelope
#[derive(Debug, Clone)]
pub struct RpcRequest {
    /// Protocol version, always [`PROTOCOL_VERSION`] once parsed
    pub jsonrpc: String,
    /// Requested procedure name
    pub method: String,
    /// Uninterpreted parameter object
    pub params: Value,
    /// Caller correlation id, echoed back verbatim
    pub id: Value,
}

/// Raw envelope for serde
#[derive(Debug, Deserialize)]
struct RawRequest {
    #[serde(default)]
    jsonrpc: Option<String>,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    params: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
}

impl RpcRequest {
    /// Parse a request body. The error is a plain message for the
    /// transport layer to reject with; no envelope can be built yet
    /// because the id may be the missing member.
    pub fn parse(body: &Value) -> Result<Self, String> {
        let raw: RawRequest = serde_json::from_value(body.clone())
            .map_err(|e| format!("Invalid JSON-RPC request: {}", e))?;

        let jsonrpc = raw.jsonrpc.ok_or(MISSING_MEMBERS)?;
        let method = raw.method.ok_or(MISSING_MEMBERS)?;
        let params = raw.params.ok_or(MISSING_MEMBERS)?;
        let id = raw.id.ok_or(MISSING_MEMBERS)?;

        if jsonrpc != PROTOCOL_VERSION {
            return Err(format!(
                "Unsupported protocol version \"{}\"; expected \"{}\".",
                jsonrpc, PROTOCOL_VERSION
            ));
        }

        Ok(Self {
            jsonrpc,
            method,
            params,
            id,
        })
    }
}

/// Parameters of the query execution method
#[derive(Debug, Clone, Deserialize)]
pub struct QueryParams {
    /// Shared-secret token
    pub token: String,
    /// Raw query in vocabulary terms
    pub query: String,
    /// Bound values for the statement's `?` placeholders
    #[serde(default, alias = "data")]
    pub query_data: Vec<Value>,
}

impl QueryParams {
    /// Extract the method parameters, answering with envelope errors.
    pub fn from_value(params: &Value) -> Result<Self, RpcError> {
        if params.get("token").map_or(true, Value::is_null) {
            return Err(RpcError::invalid_request("Please set token as parameter."));
        }
        if params.get("query").map_or(true, Value::is_null) {
            return Err(RpcError::invalid_request("Please set query as parameter."));
        }

        serde_json::from_value(params.clone())
            .map_err(|e| RpcError::invalid_request(format!("Invalid parameters: {}", e)))
    }
}
