//! Manifest normalization
//!
//! The fonts endpoint answers either with a bare array of descriptors or
//! with `{"fonts": [...]}`. Both are decoded once, at the boundary, into
//! [`FontManifest`]; every other shape is rejected. Entries themselves are
//! converted leniently, one by one.

use serde::Deserialize;
use serde_json::Value;

use crate::FontDescriptor;

/// Envelope shapes accepted from the fonts endpoint
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawManifest {
    Direct(Vec<Value>),
    Wrapped { fonts: Vec<Value> },
}

/// Ordered, normalized list of font descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontManifest {
    fonts: Vec<FontDescriptor>,
}

impl FontManifest {
    pub fn new(fonts: Vec<FontDescriptor>) -> Self {
        Self { fonts }
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Descriptors in manifest order
    pub fn iter(&self) -> std::slice::Iter<'_, FontDescriptor> {
        self.fonts.iter()
    }

    pub fn as_slice(&self) -> &[FontDescriptor] {
        &self.fonts
    }
}

impl<'a> IntoIterator for &'a FontManifest {
    type Item = &'a FontDescriptor;
    type IntoIter = std::slice::Iter<'a, FontDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fonts.iter()
    }
}

/// Non-fatal diagnostics raised while normalizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestWarning {
    /// Payload was `{"fonts": [...]}` rather than a bare array
    WrappedEnvelope,
}

impl std::fmt::Display for ManifestWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestWarning::WrappedEnvelope => {
                write!(f, "expected an array of fonts, got an object wrapping one in `fonts`")
            }
        }
    }
}

/// Manifest validation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManifestError {
    #[error("Malformed font manifest: expected an array or an object with a `fonts` array, got {0}")]
    Malformed(String),

    #[error("Font #{index} has an empty `{field}`")]
    EmptyField { index: usize, field: &'static str },

    #[error("Font #{index} is {kind}, not an object")]
    NotAnObject { index: usize, kind: String },
}

/// Descriptor-level validation policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManifestPolicy {
    /// Reject non-object entries and descriptors with an empty `family`
    /// or `filename`
    pub strict: bool,
}

impl ManifestPolicy {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Result of a successful normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub manifest: FontManifest,
    pub warnings: Vec<ManifestWarning>,
}

/// Normalize a raw payload with the default (lenient) policy
pub fn normalize(payload: &Value) -> Result<Normalized, ManifestError> {
    normalize_with(payload, ManifestPolicy::default())
}

/// Normalize a raw payload
pub fn normalize_with(payload: &Value, policy: ManifestPolicy) -> Result<Normalized, ManifestError> {
    let raw = RawManifest::deserialize(payload)
        .map_err(|_| ManifestError::Malformed(describe(payload)))?;

    let mut warnings = Vec::new();
    let entries = match raw {
        RawManifest::Direct(entries) => entries,
        RawManifest::Wrapped { fonts } => {
            let warning = ManifestWarning::WrappedEnvelope;
            tracing::warn!("{}", warning);
            warnings.push(warning);
            fonts
        }
    };

    let mut fonts = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let font = FontDescriptor::from_value(entry);
        if policy.strict {
            if !entry.is_object() {
                return Err(ManifestError::NotAnObject { index, kind: kind(entry).into() });
            }
            if font.family().is_empty() {
                return Err(ManifestError::EmptyField { index, field: "family" });
            }
            if font.filename().is_empty() {
                return Err(ManifestError::EmptyField { index, field: "filename" });
            }
        }
        fonts.push(font);
    }

    Ok(Normalized {
        manifest: FontManifest::new(fonts),
        warnings,
    })
}

/// Short description of a JSON value's shape for error messages
fn describe(value: &Value) -> String {
    match value {
        Value::Object(map) => match map.get("fonts") {
            Some(other) => format!("an object whose `fonts` is {}", kind(other)),
            None => "an object without `fonts`".into(),
        },
        other => kind(other).into(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
