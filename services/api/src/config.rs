//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use axum::http::HeaderValue;
use std::net::SocketAddr;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Which origins the CORS layer accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedOrigin {
    Any,
    Exact(HeaderValue),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    /// `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub log_level: Level,
    pub cors_allowed_origin: AllowedOrigin,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // --- Server ---
        let bind_address_str =
            lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:5000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        // --- Database ---
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "DATABASE_MAX_CONNECTIONS".to_string(),
                    format!("'{}' is not a positive integer", raw),
                )
            })?,
            None => 5,
        };

        // --- Logging ---
        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- CORS ---
        let cors_allowed_origin = match lookup("CORS_ALLOWED_ORIGIN") {
            None => AllowedOrigin::Any,
            Some(origin) if origin.trim() == "*" => AllowedOrigin::Any,
            Some(origin) => origin
                .trim()
                .parse::<HeaderValue>()
                .ok()
                .filter(|value| !value.is_empty())
                .map(AllowedOrigin::Exact)
                .ok_or_else(|| {
                    ConfigError::InvalidValue(
                        "CORS_ALLOWED_ORIGIN".to_string(),
                        format!("'{}' is not a valid origin", origin),
                    )
                })?,
        };

        Ok(Self {
            bind_address,
            database_url,
            database_max_connections,
            log_level,
            cors_allowed_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:5000".parse().unwrap());
        assert_eq!(config.database_url, None);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.cors_allowed_origin, AllowedOrigin::Any);
    }

    #[test]
    fn reads_every_variable() {
        let config = load(&[
            ("BIND_ADDRESS", "127.0.0.1:8080"),
            ("DATABASE_URL", "postgres://localhost/trivia"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("RUST_LOG", "debug"),
            ("CORS_ALLOWED_ORIGIN", "http://localhost:3000"),
        ])
        .unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/trivia")
        );
        assert_eq!(config.database_max_connections, 12);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(
            config.cors_allowed_origin,
            AllowedOrigin::Exact(HeaderValue::from_static("http://localhost:3000"))
        );
    }

    #[test]
    fn blank_database_url_means_in_memory() {
        let config = load(&[("DATABASE_URL", "  ")]).unwrap();
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn rejects_a_bad_bind_address() {
        let err = load(&[("BIND_ADDRESS", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(var, _) if var == "BIND_ADDRESS"));
    }

    #[test]
    fn rejects_a_bad_log_level() {
        let err = load(&[("RUST_LOG", "loud")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(var, _) if var == "RUST_LOG"));
    }

    #[test]
    fn rejects_a_blank_origin() {
        let err = load(&[("CORS_ALLOWED_ORIGIN", " ")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(var, _) if var == "CORS_ALLOWED_ORIGIN"));
    }

    #[test]
    fn rejects_zero_connections() {
        let err = load(&[("DATABASE_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue(var, _) if var == "DATABASE_MAX_CONNECTIONS")
        );
    }
}
