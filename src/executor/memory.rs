//! In-memory fixture executor
//!
//! Backs the demo server and the test suites. It resolves only the table
//! named after FROM/INTO and returns that table's rows wholesale: WHERE
//! clauses and bound values are ignored. It is a stand-in for a real store,
//! not a query engine — statement understanding beyond the leading keyword
//! is out of scope for this crate.

use std::collections::HashMap;

use serde_json::{json, Value};

use super::errors::{ExecutorError, ExecutorResult};
use super::executor::{ExecOutcome, Row, StatementExecutor};

/// Statement executor over in-memory tables
#[derive(Debug, Clone, Default)]
pub struct MemoryExecutor {
    tables: HashMap<String, Vec<Row>>,
}

impl MemoryExecutor {
    /// Create an executor with no tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table with its rows
    pub fn with_table(mut self, name: impl Into<String>, rows: Vec<Row>) -> Self {
        self.tables.insert(name.into(), rows);
        self
    }

    /// The demo dataset the sample server serves: a `db_persons` table
    /// matching the built-in vocabulary.
    pub fn demo() -> Self {
        let rows = [
            json!({
                "db_person_id": 1,
                "db_person_name": "Ann",
                "db_person_gender": "F",
                "db_person_birthdate": "1990-04-12"
            }),
            json!({
                "db_person_id": 2,
                "db_person_name": "Ben",
                "db_person_gender": "M",
                "db_person_birthdate": "1985-11-30"
            }),
            json!({
                "db_person_id": 3,
                "db_person_name": "Cara",
                "db_person_gender": "F",
                "db_person_birthdate": "2001-07-08"
            }),
        ];

        let rows = rows
            .into_iter()
            .map(|v| match v {
                Value::Object(map) => map,
                _ => unreachable!("demo rows are objects"),
            })
            .collect();

        Self::new().with_table("db_persons", rows)
    }

    /// Table named after the given marker keyword (FROM or INTO)
    fn table_after<'a>(tokens: &[&'a str], marker: &str) -> Option<&'a str> {
        tokens
            .iter()
            .position(|t| t.eq_ignore_ascii_case(marker))
            .and_then(|i| tokens.get(i + 1))
            .copied()
    }

    fn lookup_table(&self, name: &str) -> ExecutorResult<&Vec<Row>> {
        // Strip punctuation an INSERT statement attaches to the table name.
        let name = name.split(['(', ',']).next().unwrap_or(name).trim_matches(')');
        self.tables
            .get(name)
            .ok_or_else(|| ExecutorError::UnknownTable(name.to_string()))
    }
}

impl StatementExecutor for MemoryExecutor {
    fn execute(&self, statement: &str, _params: &[Value]) -> ExecutorResult<ExecOutcome> {
        let tokens: Vec<&str> = statement.split_whitespace().collect();
        let Some(leading) = tokens.first() else {
            return Err(ExecutorError::UnsupportedStatement(statement.to_string()));
        };

        if leading.eq_ignore_ascii_case("SELECT") {
            let table = Self::table_after(&tokens, "FROM")
                .ok_or_else(|| ExecutorError::UnsupportedStatement(statement.to_string()))?;
            return Ok(ExecOutcome::Rows(self.lookup_table(table)?.clone()));
        }

        if leading.eq_ignore_ascii_case("INSERT") {
            let table = Self::table_after(&tokens, "INTO")
                .ok_or_else(|| ExecutorError::UnsupportedStatement(statement.to_string()))?;
            self.lookup_table(table)?;
            // Fixture only: the write is acknowledged, not persisted.
            return Ok(ExecOutcome::Affected(1));
        }

        Err(ExecutorError::UnsupportedStatement(statement.to_string()))
    }
}
