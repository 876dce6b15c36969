//! CLI errors

use thiserror::Error;

use crate::vocabulary::VocabularyError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the terminal
#[derive(Debug, Error)]
pub enum CliError {
    /// Filesystem or network failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file did not parse
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The vocabulary could not be built; the process must not serve
    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),

    /// `check` found tokens outside the vocabulary
    #[error("Query rejected; offending terms: {0}")]
    QueryRejected(String),
}
