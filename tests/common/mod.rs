use safecookie::Config;
use safecookie::server::{bind, serve};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

pub fn create_test_config() -> Arc<Config> {
    Arc::new(Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        log_format: "pretty".to_string(),
        concurrency_limit: 64,
        request_timeout: Duration::from_secs(5),
    })
}

pub async fn spawn_server(config: Arc<Config>) -> SocketAddr {
    let listener = bind(&config).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, config));
    addr
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
