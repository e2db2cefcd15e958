//! Kiosk Networking
//!
//! Minimal HTTP/1.1 client and fetch-style helpers used by the console shell.

pub mod client;
pub mod fetch;
pub mod http1;

pub use client::{ClientConfig, HttpClient, HttpClientBuilder};
pub use fetch::{fetch, fetch_with_options, FetchOptions, FetchResponse};
pub use http1::{Http1Parser, Http1Request, Http1Response, HttpVersion};
pub use url::Url;

/// HTTP Response
#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    /// Get body as text
    pub fn text(&self) -> Option<String> {
        String::from_utf8(self.body.clone()).ok()
    }

    /// Check if response is successful
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network error
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
