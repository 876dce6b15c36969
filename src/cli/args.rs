//! CLI argument definitions using clap
//!
//! Commands:
//! - rpcql serve --config <path>
//! - rpcql vocab --config <path>
//! - rpcql check --config <path> <query>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rpcql - whitelist-validated query language over JSON-RPC
#[derive(Parser, Debug)]
#[command(name = "rpcql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the RPC server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./rpcql.json")]
        config: PathBuf,
    },

    /// Print the vocabulary listing and exit
    Vocab {
        /// Path to configuration file
        #[arg(long, default_value = "./rpcql.json")]
        config: PathBuf,
    },

    /// Validate and rewrite a query offline, without executing it
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./rpcql.json")]
        config: PathBuf,

        /// The query to check, in vocabulary terms
        query: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults_config_path() {
        let cli = Cli::try_parse_from(["rpcql", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config } => {
                assert_eq!(config, PathBuf::from("./rpcql.json"));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_check_takes_query_argument() {
        let cli = Cli::try_parse_from(["rpcql", "check", "SELECT * FROM persons"]).unwrap();
        match cli.command {
            Command::Check { query, .. } => {
                assert_eq!(query, "SELECT * FROM persons");
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn test_missing_subcommand_fails() {
        assert!(Cli::try_parse_from(["rpcql"]).is_err());
    }
}
