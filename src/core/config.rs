//! Configuration management for the MCP server.
//!
//! Configuration is read from environment variables (optionally supplied by a
//! `.env` file). The Poly Pizza auth token is mandatory: a [`Config`] cannot
//! exist without one, so neither can the server built from it.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment variable holding the Poly Pizza API token.
pub const AUTH_TOKEN_VAR: &str = "POLYPIZZA_AUTH_TOKEN";

/// Environment variable overriding the upstream API base URL.
pub const BASE_URL_VAR: &str = "POLYPIZZA_API_BASE_URL";

/// Base URL of the Poly Pizza REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.poly.pizza/v1.1";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream API configuration.
    pub upstream: UpstreamConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Where tool calls are forwarded to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Poly Pizza API token, sent as `x-auth-token` on every request.
    pub auth_token: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("auth_token", &"[REDACTED]")
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "polypizza-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create a configuration with default values and the given token.
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            credentials: CredentialsConfig {
                auth_token: auth_token.into(),
            },
        }
    }

    /// Point the upstream client at a different base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.upstream.base_url = base_url.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Fails with [`Error::Config`] when `POLYPIZZA_AUTH_TOKEN` is unset or
    /// blank. Other variables fall back to defaults:
    /// `POLYPIZZA_API_BASE_URL`, `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, and the
    /// transport variables read by [`TransportConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let auth_token = std::env::var(AUTH_TOKEN_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                Error::config(format!(
                    "{AUTH_TOKEN_VAR} environment variable is required but not set"
                ))
            })?;

        let mut config = Self::new(auth_token);

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            info!("Using upstream base URL from environment: {}", base_url);
            config.upstream.base_url = base_url;
        }

        config.transport = TransportConfig::from_env();

        Ok(config)
    }
}
