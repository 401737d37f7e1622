//! Configuration settings.
//!
//! Defines the main `Config` struct and environment variable loading logic.

use super::error::{Result, ServerError};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";

fn get_env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_or<T: FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key).ok().filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ServerError::Config(format!("{key} has an invalid value: {raw:?}"))),
        None => Ok(default),
    }
}

/// Application configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: SocketAddr,
    /// Logging format: "json" or "pretty".
    pub log_format: String,
    /// Maximum number of connections served at once.
    pub concurrency_limit: usize,
    /// Time allowed for a client to send its request head.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            log_format: "json".to_string(),
            concurrency_limit: 1024,
            request_timeout: Duration::from_secs(5),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Recognised variables: `LISTEN_ADDR`, `LOG_FORMAT`, `CONCURRENCY_LIMIT`
    /// and `REQUEST_TIMEOUT_SECS`. Unset or empty variables take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if a variable is set but cannot be parsed,
    /// or if `CONCURRENCY_LIMIT` / `REQUEST_TIMEOUT_SECS` is zero.
    pub fn from_env() -> Result<Self> {
        let listen_addr = get_env_or("LISTEN_ADDR", DEFAULT_LISTEN_ADDR)
            .parse()
            .map_err(|_| {
                ServerError::Config("LISTEN_ADDR must be a valid socket address".to_string())
            })?;
        let log_format = get_env_or("LOG_FORMAT", "json");
        let concurrency_limit = parse_env_or("CONCURRENCY_LIMIT", 1024usize)?;
        let request_timeout_secs = parse_env_or("REQUEST_TIMEOUT_SECS", 5u64)?;

        if concurrency_limit == 0 {
            return Err(ServerError::Config(
                "CONCURRENCY_LIMIT must be greater than zero".to_string(),
            ));
        }
        if request_timeout_secs == 0 {
            return Err(ServerError::Config(
                "REQUEST_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            listen_addr,
            log_format,
            concurrency_limit,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}
