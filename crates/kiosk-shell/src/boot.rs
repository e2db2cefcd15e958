//! Bootstrapper - font pipeline, then mount

use kiosk_dom::DomError;
use kiosk_fonts::{
    inject, FontError, FontPipeline, HttpManifestSource, LoadedFaces, ManifestSource, ManifestWarning, StyleSink,
    StyleSinkError,
};

use crate::{AppRoot, MountHost, ShellConfig};

/// Errors that abort startup.
///
/// Font pipeline failures never show up here; they end in
/// [`FontOutcome::Skipped`].
#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("Could not register stylesheet: {0}")]
    Style(#[from] StyleSinkError),

    #[error("Mount target #{0} not found")]
    MountTargetMissing(String),

    #[error("Could not mount application: {0}")]
    Dom(#[from] DomError),
}

/// What happened to the fonts during boot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontOutcome {
    /// Stylesheet appended with this many face rules
    Registered {
        faces: usize,
        warnings: Vec<ManifestWarning>,
    },
    /// Pipeline failed; no stylesheet was appended
    Skipped { reason: String },
}

/// Result of a completed boot
#[derive(Debug)]
pub struct BootReport {
    pub fonts: FontOutcome,
    pub app: AppRoot,
}

/// Runs the font pipeline to completion, then mounts the app
#[derive(Debug, Clone)]
pub struct Bootstrapper {
    config: ShellConfig,
}

impl Bootstrapper {
    pub fn new(config: ShellConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    fn pipeline(&self) -> FontPipeline {
        FontPipeline::new(self.config.faces.clone(), self.config.policy)
    }

    /// Manifest source for the configured HTTP endpoint
    pub fn http_source(&self) -> Result<HttpManifestSource, FontError> {
        let url = self.config.manifest_url()?;
        Ok(HttpManifestSource::from_url(url).with_timeout(self.config.fetch_timeout))
    }

    /// Boot against the configured manifest endpoint
    pub async fn boot_http<H>(&self, host: &mut H) -> Result<BootReport, BootError>
    where
        H: StyleSink + MountHost,
    {
        let loaded = match self.http_source() {
            Ok(source) => self.pipeline().load(&source).await,
            Err(err) => Err(err),
        };
        self.finish(loaded, host)
    }

    /// Boot with fonts from `source`.
    ///
    /// The application is mounted only after the pipeline has settled.
    pub async fn boot<S, H>(&self, source: &S, host: &mut H) -> Result<BootReport, BootError>
    where
        S: ManifestSource,
        H: StyleSink + MountHost,
    {
        let loaded = self.pipeline().load(source).await;
        self.finish(loaded, host)
    }

    fn finish<H>(&self, loaded: Result<LoadedFaces, FontError>, host: &mut H) -> Result<BootReport, BootError>
    where
        H: StyleSink + MountHost,
    {
        let fonts = match loaded {
            Ok(faces) => {
                inject(host, &faces.fragments)?;
                FontOutcome::Registered {
                    faces: faces.fragments.len(),
                    warnings: faces.warnings,
                }
            }
            Err(err) => {
                tracing::error!("Font injection failed: {}", err);
                FontOutcome::Skipped {
                    reason: err.to_string(),
                }
            }
        };

        let app = AppRoot::new(self.config.routes.clone(), &self.config.initial_path);
        host.mount(&self.config.mount_target, &app)?;

        match app.screen() {
            Some(screen) => tracing::info!("Mounted {} into #{}", screen, self.config.mount_target),
            None => tracing::info!("Mounted into #{} with no matching route", self.config.mount_target),
        }

        Ok(BootReport { fonts, app })
    }
}

impl Default for Bootstrapper {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}
