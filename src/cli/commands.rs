//! CLI command implementations
//!
//! The vocabulary registry is built exactly once here, before anything
//! serves: a registry that fails construction aborts the process with a
//! non-zero exit instead of answering requests over an ambiguous
//! vocabulary.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::TokenAuthenticator;
use crate::executor::MemoryExecutor;
use crate::query::{rewrite, tokenize, validate, ValidationOutcome};
use crate::rpc::QueryService;
use crate::server::{RpcServer, ServerConfig};
use crate::vocabulary::{VocabularyEntry, VocabularyRegistry};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Listen settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Shared-secret token callers must present
    #[serde(default = "default_token")]
    pub token: String,

    /// Vocabulary override; the built-in vocabulary when absent
    #[serde(default)]
    pub vocabulary: Option<Vec<VocabularyEntry>>,
}

// The demo secret of the original service. Deployments set their own.
fn default_token() -> String {
    "12345".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            token: default_token(),
            vocabulary: None,
        }
    }
}

/// Load configuration, falling back to defaults when the file is absent
pub fn load_config(path: &Path) -> CliResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::InvalidConfig(e.to_string()))
}

/// Build the registry from a config, built-in vocabulary when none is given
fn build_registry(config: &Config) -> CliResult<VocabularyRegistry> {
    match &config.vocabulary {
        Some(entries) => Ok(VocabularyRegistry::new(entries.clone())?),
        None => Ok(VocabularyRegistry::builtin()),
    }
}

/// `rpcql serve`
pub fn serve(config_path: &Path) -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let config = load_config(config_path)?;
    let registry = build_registry(&config)?;
    info!(terms = registry.len(), "vocabulary loaded");

    let service = QueryService::new(
        Arc::new(registry),
        TokenAuthenticator::new(&config.token),
        Arc::new(MemoryExecutor::demo()),
    );
    let server = RpcServer::new(Arc::new(service), config.server);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

/// `rpcql vocab`
pub fn vocab(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let registry = build_registry(&config)?;
    for line in registry.display_listing() {
        println!("{}", line);
    }
    Ok(())
}

/// `rpcql check <query>`
pub fn check(config_path: &Path, query: &str) -> CliResult<()> {
    let config = load_config(config_path)?;
    let registry = build_registry(&config)?;

    let tokens = tokenize(query);
    match validate(&registry, &tokens) {
        ValidationOutcome::Accepted => {
            println!("accepted");
            println!("{}", rewrite(&registry, query));
            Ok(())
        }
        ValidationOutcome::Rejected { offending } => Err(CliError::QueryRejected(
            offending.join(", "),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/rpcql.json")).unwrap();
        assert_eq!(config.token, "12345");
        assert!(config.vocabulary.is_none());
    }

    #[test]
    fn test_config_file_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"server": {{"port": 9000}}, "token": "sesame"}}"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.token, "sesame");
    }

    #[test]
    fn test_malformed_config_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            load_config(file.path()),
            Err(CliError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_vocabulary_override_is_used() {
        let config = Config {
            vocabulary: Some(vec![
                VocabularyEntry::keyword("SELECT"),
                VocabularyEntry::keyword("FROM"),
                VocabularyEntry::table("orders", "db_orders", "Orders Table"),
            ]),
            ..Default::default()
        };
        let registry = build_registry(&config).unwrap();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("orders"));
        assert!(!registry.contains("persons"));
    }

    #[test]
    fn test_duplicate_vocabulary_override_is_fatal() {
        let config = Config {
            vocabulary: Some(vec![
                VocabularyEntry::keyword("SELECT"),
                VocabularyEntry::keyword("select"),
            ]),
            ..Default::default()
        };
        assert!(matches!(
            build_registry(&config),
            Err(CliError::Vocabulary(_))
        ));
    }

    #[test]
    fn test_check_rejects_foreign_terms() {
        // No config file: defaults plus the built-in vocabulary.
        let result = check(Path::new("/nonexistent/rpcql.json"), "SELECT foo FROM persons");
        match result {
            Err(CliError::QueryRejected(terms)) => assert_eq!(terms, "foo"),
            other => panic!("expected rejection, got {:?}", other.err()),
        }
    }
}
