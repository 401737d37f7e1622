//! Test utilities and shared configuration.
//!
//! This module provides common helpers for unit and integration tests.

#[cfg(any(test, feature = "testing"))]
use crate::config::Config;
#[cfg(any(test, feature = "testing"))]
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
#[cfg(any(test, feature = "testing"))]
use std::sync::Arc;
#[cfg(any(test, feature = "testing"))]
use std::time::Duration;

/// Creates a configuration for testing purposes.
///
/// Binds to an ephemeral loopback port and logs in the pretty format.
#[cfg(any(test, feature = "testing"))]
#[must_use]
pub fn create_test_config() -> Arc<Config> {
    Arc::new(Config {
        listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
        log_format: "pretty".to_string(),
        concurrency_limit: 64,
        request_timeout: Duration::from_secs(5),
    })
}
