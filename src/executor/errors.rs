//! Executor errors

use thiserror::Error;

/// Result type for statement execution
pub type ExecutorResult<T> = Result<T, ExecutorError>;

/// Errors reported by a statement executor
#[derive(Debug, Clone, Error)]
pub enum ExecutorError {
    /// The statement referenced a table the store does not have
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// The executor could not make sense of the statement
    #[error("Unsupported statement: {0}")]
    UnsupportedStatement(String),

    /// The underlying store failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}
