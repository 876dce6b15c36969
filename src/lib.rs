//! rpcql - whitelist-validated query language over JSON-RPC
//!
//! Callers submit a token, a query written in a closed vocabulary, and
//! optional bound values. The service validates every token against the
//! vocabulary, rewrites display terms into storage identifiers, executes
//! the statement through a parameterized executor, and answers with a
//! JSON-RPC 2.0 envelope.

pub mod auth;
pub mod cli;
pub mod executor;
pub mod query;
pub mod rpc;
pub mod server;
pub mod vocabulary;
