//! HTTP Client
//!
//! Async HTTP/1.1 client on top of `smol` TCP streams.
//! One connection per request (`Connection: close`), plain `http://` only.

use std::time::Duration;

use smol::io::{AsyncReadExt, AsyncWriteExt};
use smol::net::TcpStream;
use url::Url;

use crate::http1::{Http1Parser, Http1Request};
use crate::{NetError, Response};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Whole-request timeout; `None` waits for the server indefinitely
    pub request_timeout: Option<Duration>,
    /// Default headers
    pub default_headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("kiosk-shell/{}", env!("CARGO_PKG_VERSION")),
            request_timeout: None,
            default_headers: Vec::new(),
        }
    }
}

/// HTTP client builder
pub struct HttpClientBuilder {
    config: ClientConfig,
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    pub fn user_agent(mut self, ua: &str) -> Self {
        self.config.user_agent = ua.to_string();
        self
    }

    pub fn request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn default_header(mut self, name: &str, value: &str) -> Self {
        self.config.default_headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn build(self) -> HttpClient {
        HttpClient::with_config(self.config)
    }
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a client builder
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// Create with custom config
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Make a GET request
    pub async fn get(&self, url: &str) -> Result<Response, NetError> {
        self.request("GET", url, Vec::new()).await
    }

    /// Make an HTTP request, honouring the configured timeout
    pub async fn request(
        &self,
        method: &str,
        url: &str,
        headers: Vec<(String, String)>,
    ) -> Result<Response, NetError> {
        let exchange = self.exchange(method, url, headers);

        match self.config.request_timeout {
            Some(limit) => {
                let expiry = async {
                    smol::Timer::after(limit).await;
                    Err(NetError::Timeout(limit))
                };
                smol::future::or(exchange, expiry).await
            }
            None => exchange.await,
        }
    }

    async fn exchange(
        &self,
        method: &str,
        url: &str,
        headers: Vec<(String, String)>,
    ) -> Result<Response, NetError> {
        let target = Target::parse(url)?;

        let mut req = Http1Request::new(method, &target.path_and_query)
            .header("Host", &target.host_header())
            .header("User-Agent", &self.config.user_agent)
            .header("Connection", "close");

        for (name, value) in &headers {
            req = req.header(name, value);
        }

        // Per-request headers win over the configured defaults
        for (name, value) in &self.config.default_headers {
            if !req.has_header(name) {
                req = req.header(name, value);
            }
        }

        tracing::info!("HTTP {} {}", req.method, url);

        let mut stream = TcpStream::connect((target.host.as_str(), target.port))
            .await
            .map_err(|e| NetError::Network(format!("connect {}:{}: {}", target.host, target.port, e)))?;

        stream.write_all(&req.serialize()).await?;
        stream.flush().await?;

        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await?;

        let mut reader = raw.as_slice();
        let response = Http1Parser::parse(&mut reader)?;

        tracing::debug!(status = response.status, bytes = response.body.len(), "HTTP response");

        Ok(response.into())
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Connection target extracted from a URL
#[derive(Debug, Clone, PartialEq, Eq)]
struct Target {
    host: String,
    port: u16,
    explicit_port: bool,
    path_and_query: String,
}

impl Target {
    fn parse(url: &str) -> Result<Self, NetError> {
        let parsed = Url::parse(url)
            .map_err(|e| NetError::InvalidUrl(format!("{}: {}", url, e)))?;

        if parsed.scheme() != "http" {
            return Err(NetError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                url,
                parsed.scheme()
            )));
        }

        let host = parsed.host_str()
            .ok_or_else(|| NetError::InvalidUrl(format!("{}: missing host", url)))?
            .trim_start_matches('[')
            .trim_end_matches(']')
            .to_string();

        let mut path_and_query = parsed.path().to_string();
        if let Some(query) = parsed.query() {
            path_and_query.push('?');
            path_and_query.push_str(query);
        }

        Ok(Self {
            host,
            port: parsed.port_or_known_default().unwrap_or(80),
            explicit_port: parsed.port().is_some(),
            path_and_query,
        })
    }

    fn host_header(&self) -> String {
        let host = if self.host.contains(':') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };

        if self.explicit_port {
            format!("{}:{}", host, self.port)
        } else {
            host
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_parse() {
        let t = Target::parse("http://backend:5000/api/fonts?v=2").unwrap();
        assert_eq!(t.host, "backend");
        assert_eq!(t.port, 5000);
        assert_eq!(t.path_and_query, "/api/fonts?v=2");
        assert_eq!(t.host_header(), "backend:5000");
    }

    #[test]
    fn test_target_default_port() {
        let t = Target::parse("http://example.com").unwrap();
        assert_eq!(t.port, 80);
        assert_eq!(t.path_and_query, "/");
        assert_eq!(t.host_header(), "example.com");
    }

    #[test]
    fn test_target_ipv6() {
        let t = Target::parse("http://[::1]:8080/x").unwrap();
        assert_eq!(t.host, "::1");
        assert_eq!(t.host_header(), "[::1]:8080");
    }

    #[test]
    fn test_target_rejects_https() {
        assert!(matches!(
            Target::parse("https://example.com/"),
            Err(NetError::InvalidUrl(_))
        ));
        assert!(matches!(Target::parse("not a url"), Err(NetError::InvalidUrl(_))));
    }

    #[test]
    fn test_builder() {
        let client = HttpClient::builder()
            .user_agent("test-agent")
            .request_timeout(Some(Duration::from_secs(2)))
            .default_header("Accept", "application/json")
            .build();

        assert_eq!(client.config().user_agent, "test-agent");
        assert_eq!(client.config().request_timeout, Some(Duration::from_secs(2)));
        assert_eq!(client.config().default_headers.len(), 1);
    }
}
