//! Font pipeline: fetch, normalize, synthesize

use crate::{
    normalize_with, synthesize_all, FaceConfig, FontError, ManifestPolicy, ManifestSource, ManifestWarning,
    StyleFragment,
};

/// Faces ready for injection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFaces {
    /// One fragment per manifest entry, in manifest order
    pub fragments: Vec<StyleFragment>,
    pub warnings: Vec<ManifestWarning>,
}

/// Fetch → normalize → synthesize, configured once
#[derive(Debug, Clone, Default)]
pub struct FontPipeline {
    pub faces: FaceConfig,
    pub policy: ManifestPolicy,
}

impl FontPipeline {
    pub fn new(faces: FaceConfig, policy: ManifestPolicy) -> Self {
        Self { faces, policy }
    }

    /// Run the pipeline up to (not including) injection.
    ///
    /// The fetch is the only await point.
    pub async fn load<S: ManifestSource>(&self, source: &S) -> Result<LoadedFaces, FontError> {
        let payload = source.fetch_manifest().await?;
        let normalized = normalize_with(&payload, self.policy)?;
        let fragments = synthesize_all(&normalized.manifest, &self.faces);

        Ok(LoadedFaces {
            fragments,
            warnings: normalized.warnings,
        })
    }
}
