//! Shell Configuration

use std::time::Duration;

use kiosk_fonts::{FaceConfig, ManifestPolicy};
use kiosk_net::{NetError, Url};
use kiosk_router::RouteTable;

/// Everything the bootstrapper needs, passed in explicitly
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Backend origin the API and static files are served from
    pub origin: String,

    /// Path of the fonts manifest endpoint, relative to `origin`
    pub manifest_path: String,

    /// Font URL root and format hint
    pub faces: FaceConfig,

    /// Descriptor validation
    pub policy: ManifestPolicy,

    /// Abort the manifest request after this long (`None` = wait)
    pub fetch_timeout: Option<Duration>,

    /// `id` of the element the app is mounted into
    pub mount_target: String,

    /// Client-side routes
    pub routes: RouteTable,

    /// Location shown on first mount
    pub initial_path: String,
}

impl ShellConfig {
    pub fn with_origin(mut self, origin: &str) -> Self {
        self.origin = origin.to_string();
        self
    }

    pub fn with_manifest_path(mut self, path: &str) -> Self {
        self.manifest_path = path.to_string();
        self
    }

    pub fn with_faces(mut self, faces: FaceConfig) -> Self {
        self.faces = faces;
        self
    }

    pub fn with_policy(mut self, policy: ManifestPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_mount_target(mut self, id: &str) -> Self {
        self.mount_target = id.to_string();
        self
    }

    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    pub fn with_initial_path(mut self, path: &str) -> Self {
        self.initial_path = path.to_string();
        self
    }

    /// Absolute URL of the fonts manifest
    pub fn manifest_url(&self) -> Result<Url, NetError> {
        Url::parse(&self.origin)
            .and_then(|origin| origin.join(&self.manifest_path))
            .map_err(|e| NetError::InvalidUrl(format!("{} + {}: {}", self.origin, self.manifest_path, e)))
    }

    /// URL of the hosting document for the initial location
    pub fn document_url(&self) -> String {
        format!(
            "{}{}",
            self.origin.trim_end_matches('/'),
            self.routes.href(&self.initial_path)
        )
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            origin: "http://127.0.0.1:5000".into(),
            manifest_path: "/api/fonts".into(),
            faces: FaceConfig::default(),
            policy: ManifestPolicy::default(),
            fetch_timeout: None,
            mount_target: "app".into(),
            routes: RouteTable::console(),
            initial_path: "/".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.manifest_url().unwrap().as_str(), "http://127.0.0.1:5000/api/fonts");
        assert_eq!(config.faces.fonts_root, "/static/fonts");
        assert_eq!(config.mount_target, "app");
        assert!(config.fetch_timeout.is_none());
        assert!(!config.policy.strict);
    }

    #[test]
    fn test_manifest_url_join() {
        let config = ShellConfig::default()
            .with_origin("http://backend:5000/console/")
            .with_manifest_path("api/fonts");
        assert_eq!(config.manifest_url().unwrap().as_str(), "http://backend:5000/console/api/fonts");

        let bad = ShellConfig::default().with_origin("backend");
        assert!(matches!(bad.manifest_url(), Err(NetError::InvalidUrl(_))));
    }

    #[test]
    fn test_document_url() {
        let config = ShellConfig::default()
            .with_origin("http://localhost:8080/")
            .with_routes(RouteTable::console().with_base("/console"))
            .with_initial_path("/datasources");
        assert_eq!(config.document_url(), "http://localhost:8080/console/datasources");
    }
}
