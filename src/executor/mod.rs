//! Statement execution boundary for rpcql
//!
//! The core never opens connections or manages transactions: it hands a
//! rewritten statement plus bound values to a `StatementExecutor` and shapes
//! whatever comes back. Deployments implement the trait against their store;
//! the in-memory executor here backs the demo server and the test suites.

mod errors;
mod executor;
mod memory;

pub use errors::{ExecutorError, ExecutorResult};
pub use executor::{ExecOutcome, Row, StatementExecutor};
pub use memory::MemoryExecutor;
