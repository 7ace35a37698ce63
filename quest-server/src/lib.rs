//! quest-server - HTTP server for the quest questionnaire service
//!
//! This crate provides the server infrastructure that owns the
//! SessionTracker. Clients drive the questionnaire over a small JSON API.

mod error;
pub mod http;
mod state;

use std::sync::Arc;

use tokio::net::TcpListener;

pub use error::ServerError;
pub use http::create_router;
pub use state::AppState;

/// The main quest server
pub struct QuestServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl QuestServer {
    /// Create a new server with default state
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            state: Arc::new(AppState::new()),
        }
    }

    /// Create a server with custom state (for testing)
    pub fn with_state(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the shared application state
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Run the server, binding to the configured address
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.clone(),
                source: e,
            })?;

        tracing::info!("quest server listening on {}", addr);

        let router = create_router(self.state);
        axum::serve(listener, router)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7780,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with the specified host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Returns the socket address string (e.g., "127.0.0.1:7780")
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
