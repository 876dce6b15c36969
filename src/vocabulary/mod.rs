//! Vocabulary Registry subsystem for rpcql
//!
//! The registry is the closed set of terms a caller may use in a query:
//! SQL keywords that map to themselves, and table/column display names that
//! map to the actual storage identifiers.
//!
//! # Design Principles
//!
//! - Built once at startup, read-only for the life of the process
//! - Duplicate display terms are a fatal construction error
//! - No internal table/column identifier may itself be a display term
//! - Rewrite order is deterministic regardless of entry declaration order

mod entry;
mod errors;
mod registry;

pub use entry::{Category, VocabularyEntry};
pub use errors::{VocabularyError, VocabularyResult};
pub use registry::VocabularyRegistry;
