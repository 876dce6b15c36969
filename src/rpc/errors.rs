//! RPC error codes and their public messages
//!
//! Codes follow the original service: 32601 for an unregistered method,
//! 32602 for a rejected query or an empty read. 32600 covers malformed
//! parameters and failed authentication. Public messages are fixed strings;
//! caller-supplied content is never echoed into them.

use std::fmt;

/// The error codes the service emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcErrorCode {
    /// Malformed parameters or failed authentication
    InvalidRequest,
    /// Method name resolves to no registered procedure
    MethodNotFound,
    /// Query rejected by validation, or a read returned nothing
    InvalidQuery,
}

impl RpcErrorCode {
    /// Numeric code carried in the error envelope
    pub fn code(&self) -> i64 {
        match self {
            RpcErrorCode::InvalidRequest => 32600,
            RpcErrorCode::MethodNotFound => 32601,
            RpcErrorCode::InvalidQuery => 32602,
        }
    }
}

impl fmt::Display for RpcErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An error destined for the response envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcError {
    code: RpcErrorCode,
    message: String,
}

impl RpcError {
    /// Missing or malformed parameter
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            code: RpcErrorCode::InvalidRequest,
            message: reason.into(),
        }
    }

    /// Token comparison failed. Says nothing about the query.
    pub fn auth_failed() -> Self {
        Self {
            code: RpcErrorCode::InvalidRequest,
            message: "Token authentication has failed.".to_string(),
        }
    }

    /// No registered procedure under the requested name
    pub fn method_not_found() -> Self {
        Self {
            code: RpcErrorCode::MethodNotFound,
            message: "Sorry. The RPC method does not exist.".to_string(),
        }
    }

    /// One or more tokens fell outside the vocabulary
    pub fn query_rejected() -> Self {
        Self {
            code: RpcErrorCode::InvalidQuery,
            message: "The query is not valid. Please verify with whitelisted terms.".to_string(),
        }
    }

    /// A read statement produced no rows
    pub fn no_results() -> Self {
        Self {
            code: RpcErrorCode::InvalidQuery,
            message: "No results found.".to_string(),
        }
    }

    /// The executor failed on a write statement
    pub fn execution_failed() -> Self {
        Self {
            code: RpcErrorCode::InvalidQuery,
            message: "Statement execution failed.".to_string(),
        }
    }

    /// Numeric error code
    pub fn code(&self) -> i64 {
        self.code.code()
    }

    /// Public message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)
    }
}

impl std::error::Error for RpcError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RpcError::method_not_found().code(), 32601);
        assert_eq!(RpcError::query_rejected().code(), 32602);
        assert_eq!(RpcError::no_results().code(), 32602);
        assert_eq!(RpcError::auth_failed().code(), 32600);
    }

    #[test]
    fn test_canonical_messages() {
        assert_eq!(
            RpcError::method_not_found().message(),
            "Sorry. The RPC method does not exist."
        );
        assert_eq!(RpcError::no_results().message(), "No results found.");
    }
}
