use reqwest::Client;
use std::time::Duration;

pub fn create_http_client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .tcp_nodelay(true)
        .user_agent(concat!("wq/", env!("CARGO_PKG_VERSION")))
        .use_rustls_tls();

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build()
}
