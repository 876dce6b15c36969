//! rpcql CLI entry point
//!
//! A minimal entrypoint: parse arguments, run the selected command, print
//! errors to stderr, exit non-zero on failure. All logic lives in the CLI
//! module.

use rpcql::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
