//! Fetch API
//!
//! `fetch()`-style helpers over [`HttpClient`].

use std::time::Duration;

use crate::{HttpClient, NetError, Response};

/// Fetch options
#[derive(Debug, Default)]
pub struct FetchOptions {
    pub method: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl FetchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Fetch a URL (async)
pub async fn fetch(url: &str) -> Result<FetchResponse, NetError> {
    fetch_with_options(url, FetchOptions::default()).await
}

/// Fetch with options
pub async fn fetch_with_options(url: &str, options: FetchOptions) -> Result<FetchResponse, NetError> {
    let client = HttpClient::builder()
        .request_timeout(options.timeout)
        .build();

    let method = if options.method.is_empty() {
        "GET".to_string()
    } else {
        options.method.to_uppercase()
    };

    let response = client
        .request(&method, url, options.headers)
        .await?;

    Ok(FetchResponse::from(response))
}

/// Fetch response with convenience methods
#[derive(Debug)]
pub struct FetchResponse {
    inner: Response,
}

impl FetchResponse {
    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.inner.status
    }

    /// Check if response is OK (2xx)
    pub fn ok(&self) -> bool {
        self.inner.is_success()
    }

    /// Turn a non-2xx status into [`NetError::HttpError`]
    pub fn error_for_status(self) -> Result<Self, NetError> {
        if self.ok() {
            Ok(self)
        } else {
            Err(NetError::HttpError { status: self.status() })
        }
    }

    /// Get header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Get body as text
    pub fn text(&self) -> Result<String, NetError> {
        String::from_utf8(self.inner.body.clone())
            .map_err(|e| NetError::Network(e.to_string()))
    }

    /// Get body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.inner.body)
    }

    /// Get raw body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.inner.body
    }
}

impl From<Response> for FetchResponse {
    fn from(inner: Response) -> Self {
        Self { inner }
    }
}
