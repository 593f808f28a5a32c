use std::time::Duration;

use reqwest::{header, Client};

/// Client shared by every upstream call. Built once at startup so
/// connections are pooled across requests.
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::CONNECTION,
        header::HeaderValue::from_static("keep-alive"),
    );

    Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Some(Duration::from_secs(30)))
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .default_headers(headers)
        .build()
}
