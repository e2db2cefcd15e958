//! Font pipeline errors

use kiosk_net::NetError;

use crate::ManifestError;

/// Anything that can go wrong between requesting the manifest and having
/// style fragments ready
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Font manifest request failed: {0}")]
    Net(#[from] NetError),

    #[error("Font manifest is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Could not read font manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}
