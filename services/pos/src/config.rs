//! Configuration management for the point-of-sale service.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;

/// Origin that allows any caller.
pub const ANY_ORIGIN: &str = "*";

/// Service configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Allowed CORS origins; `"*"` allows any
    pub cors_origins: Vec<String>,
    /// Start with the five demo products
    pub seed_catalog: bool,
}

/// Server configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` for binding.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            cors_origins: vec!["http://localhost:3000".to_string(), ANY_ORIGIN.to_string()],
            seed_catalog: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to the defaults:
    ///
    /// | Variable           | Default                   |
    /// |--------------------|---------------------------|
    /// | `POS_HOST`         | `0.0.0.0`                 |
    /// | `POS_PORT`         | `8080`                    |
    /// | `POS_CORS_ORIGINS` | `http://localhost:3000,*` |
    /// | `POS_SEED_CATALOG` | `true`                    |
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server: ServerConfig {
                host: env::var("POS_HOST").unwrap_or(defaults.server.host),
                port: env::var("POS_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.server.port),
            },
            cors_origins: env::var("POS_CORS_ORIGINS")
                .map(|s| parse_origins(&s))
                .unwrap_or(defaults.cors_origins),
            seed_catalog: env::var("POS_SEED_CATALOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.seed_catalog),
        }
    }

    /// Whether the origin list contains the wildcard.
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
