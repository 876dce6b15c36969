//! Query validation and term-substitution core for rpcql
//!
//! The only subsystem with real logic: everything else is plumbing around
//! these pure, synchronous transformations.
//!
//! # Design Principles
//!
//! - Exact case-insensitive token membership, never substring containment
//! - Rewriting operates on the raw query so punctuation survives
//! - Deterministic substitution order: longest display term first
//! - No stage writes output or holds state; each returns a value

mod rewriter;
mod tokenizer;
mod validator;

pub use rewriter::{restore_fields, rewrite};
pub use tokenizer::tokenize;
pub use validator::{validate, ValidationOutcome};
