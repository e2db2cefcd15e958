//! Kiosk Fonts
//!
//! Dynamic `@font-face` registration for the console shell.
//!
//! The pipeline runs once per boot:
//! fetch manifest → [`normalize`] → [`synthesize`] per descriptor → [`inject`].
//!
//! # Example
//! ```rust,ignore
//! use kiosk_fonts::{FontPipeline, HttpManifestSource};
//!
//! let source = HttpManifestSource::new("http://127.0.0.1:5000/api/fonts")?;
//! let faces = FontPipeline::default().load(&source).await?;
//! kiosk_fonts::inject(&mut document, &faces.fragments)?;
//! ```

mod descriptor;
mod error;
mod face;
mod inject;
mod manifest;
mod pipeline;
mod source;

pub use descriptor::FontDescriptor;
pub use error::FontError;
pub use face::{synthesize, synthesize_all, FaceConfig, FaceRule, FontStyle, StyleFragment, WeightRange};
pub use inject::{inject, StyleSink, StyleSinkError};
pub use manifest::{
    normalize, normalize_with, FontManifest, ManifestError, ManifestPolicy, ManifestWarning, Normalized,
};
pub use pipeline::{FontPipeline, LoadedFaces};
pub use source::{FileManifestSource, HttpManifestSource, ManifestSource, StaticManifestSource};
