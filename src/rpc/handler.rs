//! Request dispatcher
//!
//! Runs one request through the fixed stage order: method resolution,
//! authentication, tokenize + validate, rewrite, execute, shape. Each stage
//! is a pure function returning a value; a failure at any stage produces
//! exactly one error envelope and ends the request. No retries, no partial
//! results.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use crate::auth::TokenAuthenticator;
use crate::executor::{ExecOutcome, ExecutorResult, StatementExecutor};
use crate::query::{restore_fields, rewrite, tokenize, validate, ValidationOutcome};
use crate::vocabulary::VocabularyRegistry;

use super::errors::RpcError;
use super::request::{QueryParams, RpcRequest};
use super::response::RpcResponse;

/// Registered procedures. Method names resolve through this table; an
/// unregistered name answers 32601 instead of reaching any handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Validate, rewrite, and execute a whitelisted query
    RpcQl,
}

impl Method {
    /// Resolve a caller-supplied method name
    pub fn resolve(name: &str) -> Option<Self> {
        match name {
            "rpc_ql" => Some(Method::RpcQl),
            _ => None,
        }
    }
}

/// The request-handling service: owns the read-only registry, the
/// authenticator, and the executor boundary. Cheap to share across
/// concurrent requests; nothing here is mutated after construction.
#[derive(Clone)]
pub struct QueryService {
    registry: Arc<VocabularyRegistry>,
    authenticator: TokenAuthenticator,
    executor: Arc<dyn StatementExecutor>,
}

impl QueryService {
    /// Create a service over the given collaborators
    pub fn new(
        registry: Arc<VocabularyRegistry>,
        authenticator: TokenAuthenticator,
        executor: Arc<dyn StatementExecutor>,
    ) -> Self {
        Self {
            registry,
            authenticator,
            executor,
        }
    }

    /// The vocabulary registry (served by the discovery listing)
    pub fn registry(&self) -> &VocabularyRegistry {
        &self.registry
    }

    /// Handle one parsed request, always producing an envelope.
    pub fn dispatch(&self, request: RpcRequest) -> RpcResponse {
        let id = request.id.clone();
        match self.handle(request) {
            Ok(result) => RpcResponse::success(result, id),
            Err(err) => RpcResponse::error(&err, id),
        }
    }

    fn handle(&self, request: RpcRequest) -> Result<Value, RpcError> {
        let method = Method::resolve(&request.method).ok_or_else(|| {
            debug!(method = %request.method, "unknown method");
            RpcError::method_not_found()
        })?;

        match method {
            Method::RpcQl => self.run_query(&request.params),
        }
    }

    /// The query execution procedure
    fn run_query(&self, params: &Value) -> Result<Value, RpcError> {
        let params = QueryParams::from_value(params)?;

        if !self.authenticator.verify(&params.token) {
            // Nothing about the query is disclosed past this point.
            debug!("token authentication failed");
            return Err(RpcError::auth_failed());
        }

        let tokens = tokenize(&params.query);
        if let ValidationOutcome::Rejected { offending } = validate(&self.registry, &tokens) {
            debug!(offending = ?offending, "query rejected by validation");
            return Err(RpcError::query_rejected());
        }

        let statement = rewrite(&self.registry, &params.query);
        let is_read = leading_keyword_is_select(&statement);
        debug!(is_read, "executing rewritten statement");

        self.shape(
            self.executor.execute(&statement, &params.query_data),
            is_read,
        )
    }

    /// Shape the executor outcome into the envelope's result member.
    fn shape(&self, outcome: ExecutorResult<ExecOutcome>, is_read: bool) -> Result<Value, RpcError> {
        let outcome = match outcome {
            Ok(outcome) => outcome,
            // A failed read reports the same way as an empty one.
            Err(_) if is_read => return Err(RpcError::no_results()),
            Err(err) => {
                debug!(%err, "write statement failed");
                return Err(RpcError::execution_failed());
            }
        };

        match outcome {
            ExecOutcome::Rows(rows) if rows.is_empty() && is_read => Err(RpcError::no_results()),
            ExecOutcome::Rows(rows) if rows.is_empty() => Ok(json!("Success")),
            ExecOutcome::Rows(rows) => {
                let rows = Value::Array(rows.into_iter().map(Value::Object).collect());
                Ok(restore_fields(&self.registry, rows))
            }
            // An executor answering a read with a bare count has no rows to
            // show; report it like an empty read.
            ExecOutcome::Affected(_) if is_read => Err(RpcError::no_results()),
            ExecOutcome::Affected(_) => Ok(json!("Success")),
        }
    }
}

/// Read-statement classification: inspect the leading keyword only
fn leading_keyword_is_select(statement: &str) -> bool {
    statement
        .split_whitespace()
        .next()
        .is_some_and(|kw| kw.eq_ignore_ascii_case("SELECT"))
}
