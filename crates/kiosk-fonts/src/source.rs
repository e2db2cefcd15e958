//! Manifest sources

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use kiosk_net::{FetchOptions, NetError, Url};
use serde_json::Value;

use crate::FontError;

/// Produces the raw font manifest payload.
///
/// Implementations make at most one attempt per call; there is no retry.
pub trait ManifestSource {
    fn fetch_manifest(&self) -> impl Future<Output = Result<Value, FontError>>;
}

/// `GET` the manifest from an HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpManifestSource {
    endpoint: Url,
    timeout: Option<Duration>,
}

impl HttpManifestSource {
    pub fn new(endpoint: &str) -> Result<Self, NetError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| NetError::InvalidUrl(format!("{}: {}", endpoint, e)))?;
        Ok(Self::from_url(endpoint))
    }

    pub fn from_url(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout: None,
        }
    }

    /// Give up on the request after `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ManifestSource for HttpManifestSource {
    async fn fetch_manifest(&self) -> Result<Value, FontError> {
        let options = FetchOptions::new()
            .method("GET")
            .header("Accept", "application/json")
            .timeout(self.timeout);

        let response = kiosk_net::fetch_with_options(self.endpoint.as_str(), options)
            .await?
            .error_for_status()?;

        Ok(response.json()?)
    }
}

/// Read the manifest from a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileManifestSource {
    path: PathBuf,
}

impl FileManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ManifestSource for FileManifestSource {
    async fn fetch_manifest(&self) -> Result<Value, FontError> {
        tracing::info!("Reading font manifest from {}", self.path.display());
        let bytes = smol::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Hands out a fixed payload
#[derive(Debug, Clone)]
pub struct StaticManifestSource(pub Value);

impl ManifestSource for StaticManifestSource {
    async fn fetch_manifest(&self) -> Result<Value, FontError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_source_endpoint() {
        let source = HttpManifestSource::new("http://backend:5000/api/fonts")
            .unwrap()
            .with_timeout(Some(Duration::from_secs(3)));
        assert_eq!(source.endpoint().path(), "/api/fonts");
        assert_eq!(source.timeout, Some(Duration::from_secs(3)));

        assert!(matches!(HttpManifestSource::new("::"), Err(NetError::InvalidUrl(_))));
    }

    #[test]
    fn test_file_source() {
        let path = std::env::temp_dir().join(format!("kiosk-fonts-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"fonts":[{"family":"Inter","filename":"Inter.ttf"}]}"#).unwrap();

        let value = smol::block_on(FileManifestSource::new(&path).fetch_manifest()).unwrap();
        assert_eq!(value["fonts"][0]["family"], "Inter");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_source_missing() {
        let source = FileManifestSource::new("/nonexistent/kiosk/fonts.json");
        let err = smol::block_on(source.fetch_manifest()).unwrap_err();
        assert!(matches!(err, FontError::Io(_)));
    }
}
