//! The HTTP server
//!
//! Assembles the router over a shared [`QueryService`], applies CORS and
//! request tracing, and binds the configured address.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::rpc::QueryService;

use super::config::ServerConfig;
use super::routes::rpc_routes;

/// HTTP server for the rpcql service
pub struct RpcServer {
    config: ServerConfig,
    router: Router,
}

impl RpcServer {
    /// Create a server over the given service and configuration
    pub fn new(service: Arc<QueryService>, config: ServerConfig) -> Self {
        let router = Self::build_router(service, &config);
        Self { config, router }
    }

    fn build_router(service: Arc<QueryService>, config: &ServerConfig) -> Router {
        // Permissive CORS when no origins are configured (development);
        // the configured list otherwise.
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        rpc_routes(service)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// The configured socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process ends
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "rpcql listening");
        info!("POST / - RPC execution call");
        info!("GET  / - vocabulary listing");
        info!("GET  /health - liveness probe");

        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenAuthenticator;
    use crate::executor::MemoryExecutor;
    use crate::vocabulary::VocabularyRegistry;

    fn service() -> Arc<QueryService> {
        Arc::new(QueryService::new(
            Arc::new(VocabularyRegistry::builtin()),
            TokenAuthenticator::new("12345"),
            Arc::new(MemoryExecutor::demo()),
        ))
    }

    #[test]
    fn test_server_uses_configured_port() {
        let server = RpcServer::new(service(), ServerConfig::with_port(9999));
        assert_eq!(server.socket_addr(), "0.0.0.0:9999");
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let config = ServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let server = RpcServer::new(service(), config);
        let _router = server.router();
    }
}
