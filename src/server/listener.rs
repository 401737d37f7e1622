//! TCP accept loop.
//!
//! Each connection carries exactly one request and is closed after the response.

use crate::config::{Config, Result};
use crate::server::request::{ParseStatus, Request};
use crate::server::{Response, router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

const READ_BUF_SIZE: usize = 8192;

/// Binds the listener to `config.listen_addr`.
///
/// # Errors
///
/// Returns [`ServerError::Io`](crate::config::ServerError::Io) if the address cannot be bound.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "Listening...");
    Ok(listener)
}

/// Accepts connections until the process exits.
pub async fn serve(listener: TcpListener, config: Arc<Config>) {
    let connection_limit = Arc::new(Semaphore::new(config.concurrency_limit));

    loop {
        let Ok(permit) = connection_limit.clone().acquire_owned().await else {
            break;
        };

        match listener.accept().await {
            Ok((mut client, peer_addr)) => {
                let cfg = config.clone();
                tokio::spawn(async move {
                    let _permit = permit;
                    if let Err(e) = handle_connection(&mut client, peer_addr, &cfg).await {
                        debug!(peer_addr = %peer_addr, error = %e, "Connection error");
                    }
                });
            }
            Err(e) => {
                error!(error = %e, "Accept error");
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            }
        }
    }
}

async fn handle_connection(
    client: &mut TcpStream,
    peer_addr: SocketAddr,
    config: &Config,
) -> std::io::Result<()> {
    let _ = client.set_nodelay(true);

    let Some(response) = read_and_route(client, peer_addr, config).await? else {
        return Ok(());
    };

    client.write_all(&response.to_bytes()).await?;
    client.flush().await?;
    client.shutdown().await
}

/// Reads one request head and produces its response.
///
/// `None` means the client went away or timed out and nothing should be written.
async fn read_and_route(
    client: &mut TcpStream,
    peer_addr: SocketAddr,
    config: &Config,
) -> std::io::Result<Option<Response>> {
    let mut buf = vec![0u8; READ_BUF_SIZE];
    let mut pos = 0;

    loop {
        let Ok(read) = tokio::time::timeout(config.request_timeout, client.read(&mut buf[pos..])).await
        else {
            warn!(peer_addr = %peer_addr, "Request header read timed out");
            return Ok(None);
        };

        let bytes_read = read?;
        if bytes_read == 0 {
            return Ok(None);
        }
        pos += bytes_read;

        match Request::parse(&buf[..pos]) {
            Ok(ParseStatus::Complete(request)) => return Ok(Some(router::handle(&request))),
            Ok(ParseStatus::Partial) => {
                if pos >= buf.len() {
                    warn!(peer_addr = %peer_addr, "Request headers too large");
                    let mut response = Response::new(431);
                    response.error(431, "request header fields too large");
                    return Ok(Some(response));
                }
            }
            Err(e) => {
                warn!(peer_addr = %peer_addr, error = ?e, "Invalid HTTP Request");
                let mut response = Response::new(400);
                response.error(400, "bad request");
                return Ok(Some(response));
            }
        }
    }
}
