// ghfeed - Latest releases and commits of a GitHub repository from its Atom feeds
// Copyright (C) 2025 ghfeed contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! HTTP client for ghfeed.
//!
//! Requests are single-shot: a failed request is reported to the caller and
//! never retried.

use crate::common::config::NetworkConfig;
use crate::common::error::FetchError;
use reqwest::{Client, ClientBuilder, NoProxy};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client used for feed downloads
pub struct HttpClient {
    client: Client,
    insecure: bool,
}

impl HttpClient {
    /// Client for tests against local servers, ignoring proxies from the environment
    #[cfg(test)]
    pub fn new() -> Result<Self, FetchError> {
        let config = NetworkConfig::default();
        Self::build(Self::builder(&config).no_proxy(), &config)
    }

    /// Create from configuration
    pub fn from_config(config: &NetworkConfig) -> Result<Self, FetchError> {
        Self::build(Self::builder(config), config)
    }

    fn builder(config: &NetworkConfig) -> ClientBuilder {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(&config.user_agent)
            .gzip(true)
            .brotli(true);

        // Without an explicit proxy reqwest reads http_proxy, https_proxy, all_proxy
        // and no_proxy from the environment
        if let Some(ref proxy) = config.proxy {
            match reqwest::Proxy::all(proxy) {
                Ok(proxy) => builder = builder.proxy(proxy.no_proxy(NoProxy::from_env())),
                Err(e) => warn!("Ignoring invalid proxy {}: {}", proxy, e),
            }
        }

        if config.insecure {
            warn!("TLS certificate verification is disabled; feeds can be tampered with in transit");
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder
    }

    fn build(builder: ClientBuilder, config: &NetworkConfig) -> Result<Self, FetchError> {
        let client = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            insecure: config.insecure,
        })
    }

    /// Whether certificate verification is skipped
    pub fn is_insecure(&self) -> bool {
        self.insecure
    }

    /// GET request returning the body as bytes.
    ///
    /// Any non-2xx status is an error.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        debug!("{} -> {}", url, status);
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Body { url: url.to_string(), reason: e.to_string() })?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new().unwrap();
        assert!(!client.is_insecure());
    }

    #[test]
    fn test_insecure_is_opt_in() {
        let config = NetworkConfig { insecure: true, ..NetworkConfig::default() };
        let client = HttpClient::from_config(&config).unwrap();
        assert!(client.is_insecure());
    }

    #[tokio::test]
    async fn test_configured_proxy_carries_requests() {
        use std::io::{BufRead, BufReader, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let proxy = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
            }
            stream
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 7\r\nConnection: close\r\n\r\nproxied")
                .unwrap();
            request_line
        });

        let config = NetworkConfig {
            proxy: Some(format!("http://{}", addr)),
            ..NetworkConfig::default()
        };
        let client = HttpClient::from_config(&config).unwrap();
        let url = "http://feeds.example.invalid/org/repo/releases.atom";
        let body = client.get_bytes(url).await.unwrap();

        assert_eq!(body, b"proxied");
        // Proxied requests use the absolute URL as the request target
        assert!(proxy.join().unwrap().starts_with(&format!("GET {} ", url)));
    }

    #[test]
    fn test_invalid_proxy_is_ignored() {
        let config = NetworkConfig {
            proxy: Some("::not a url::".to_string()),
            ..NetworkConfig::default()
        };
        assert!(HttpClient::from_config(&config).is_ok());
    }

    #[tokio::test]
    async fn test_connection_refused_is_fetch_error() {
        // Bind then drop to get a port nothing listens on
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let url = format!("http://127.0.0.1:{}/org/repo/releases.atom", port);

        let client = HttpClient::new().unwrap();
        let err = client.get_bytes(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::ConnectionFailed { .. }));
    }
}
