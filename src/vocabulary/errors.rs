//! Vocabulary registry errors
//!
//! Both variants are fatal at startup: an ambiguous registry would make
//! rewriting nondeterministic, so the process must not serve requests.

use thiserror::Error;

/// Result type for registry construction
pub type VocabularyResult<T> = Result<T, VocabularyError>;

/// Errors detected while building the registry
#[derive(Debug, Clone, Error)]
pub enum VocabularyError {
    /// Two entries share a display term (case-insensitive)
    #[error("Duplicate display term in vocabulary: {0}")]
    DuplicateDisplayTerm(String),

    /// A table/column internal term is itself a display term, which would
    /// make rewriting non-idempotent and restoration ambiguous
    #[error("Internal term collides with display term: {0}")]
    InternalTermCollision(String),
}
