//! JSON-RPC 2.0 surface for rpcql
//!
//! Request/response envelopes, the fixed error codes, and the dispatcher
//! that runs one request through auth, validation, rewriting, execution,
//! and result shaping. Every failure becomes exactly one error envelope;
//! the transport layer alone writes bytes.

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{RpcError, RpcErrorCode};
pub use handler::{Method, QueryService};
pub use request::{QueryParams, RpcRequest, PROTOCOL_VERSION};
pub use response::{ErrorObject, RpcResponse};
