//! Command-line front end for rpcql
//!
//! All process logic lives here; `main.rs` only calls [`run`] and maps an
//! error to a non-zero exit.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{load_config, Config};
pub use errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { config } => commands::serve(&config),
        Command::Vocab { config } => commands::vocab(&config),
        Command::Check { config, query } => commands::check(&config, &query),
    }
}
