//! Configuration management for the contacts API server.
//!
//! This module handles loading and validating configuration from
//! environment variables, with an optional `.env` file for development.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Configuration for the contacts API server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Log level (default: "info")
    pub log_level: String,

    /// Whether to pre-populate the store with the reference contacts
    /// (default: true)
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIND_ADDR`: Listen address (default: "127.0.0.1:3001")
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `SEED_DEMO_DATA`: Seed the reference contacts (default: "true")
    pub fn from_env() -> ConfigResult<Self> {
        // Load a .env file if present, without failing when it's absent
        let _ = dotenvy::dotenv();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

        // Validate bind address format
        if bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidValue {
                var: "BIND_ADDR".to_string(),
                reason: format!("Must be a host:port address, got: {}", bind_addr),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let seed_demo_data = Self::parse_env_bool("SEED_DEMO_DATA", true)?;

        Ok(Config {
            bind_addr,
            log_level,
            seed_demo_data,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}
