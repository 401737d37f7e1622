//! `safecookie` - Minimal HTTP server demonstrating safe cookie handling.
//!
//! Copyright (C) 2026 Maverick
//! SPDX-License-Identifier: AGPL-3.0-only
//!
//! Loads configuration, sets up logging, and serves `/set` and `/get`.

use safecookie::Config;
use safecookie::server::{bind, serve};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stdout());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(non_blocking);

    if log_format.eq_ignore_ascii_case("pretty") {
        subscriber.init();
    } else {
        subscriber.json().init();
    }

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(
        listen_addr = %config.listen_addr,
        log_format = %config.log_format,
        concurrency_limit = config.concurrency_limit,
        "Server initialized"
    );

    let listener = match bind(&config).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, listen_addr = %config.listen_addr, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    serve(listener, config).await;
    ExitCode::SUCCESS
}
