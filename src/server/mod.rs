//! HTTP transport for rpcql
//!
//! POST `/` carries the RPC execution call, GET `/` the vocabulary
//! discovery listing, GET `/health` a liveness probe. The transport parses
//! and writes envelopes; all decisions live in [`crate::rpc`].

mod config;
mod routes;
mod server;

pub use config::ServerConfig;
pub use routes::rpc_routes;
pub use server::RpcServer;
