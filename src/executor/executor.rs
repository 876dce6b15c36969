//! The statement executor trait and its outcome types

use serde_json::{Map, Value};

use super::errors::ExecutorResult;

/// One result row: field name to value, as returned by the store
pub type Row = Map<String, Value>;

/// What a statement execution produced
#[derive(Debug, Clone, PartialEq)]
pub enum ExecOutcome {
    /// Result rows from a read statement
    Rows(Vec<Row>),
    /// Row count from a write/mutation statement
    Affected(u64),
}

impl ExecOutcome {
    /// The rows, if this outcome carries any
    pub fn rows(&self) -> Option<&[Row]> {
        match self {
            ExecOutcome::Rows(rows) => Some(rows),
            ExecOutcome::Affected(_) => None,
        }
    }
}

/// Executes a rewritten statement against a persistent store.
///
/// Bound values arrive as an ordered list matching the `?` placeholders in
/// the statement; they are never interpolated into the statement text.
/// Implementations own all connection and transaction concerns.
pub trait StatementExecutor: Send + Sync {
    /// Execute one statement with its bound values
    fn execute(&self, statement: &str, params: &[Value]) -> ExecutorResult<ExecOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_rows_accessor() {
        let outcome = ExecOutcome::Rows(vec![Row::new()]);
        assert_eq!(outcome.rows().unwrap().len(), 1);
        assert!(ExecOutcome::Affected(3).rows().is_none());
    }
}
