//! `@font-face` synthesis

use std::fmt;

use crate::{FontDescriptor, FontManifest};

/// Weight axis declared for every face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightRange {
    pub min: u16,
    pub max: u16,
}

impl WeightRange {
    /// Full `wght` axis of a variable font
    pub const VARIABLE: WeightRange = WeightRange { min: 100, max: 900 };
}

impl fmt::Display for WeightRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.min, self.max)
    }
}

/// Slant of a face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
}

impl FontStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where font files are served from and how they are labelled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceConfig {
    /// URL prefix every descriptor filename is resolved under
    pub fonts_root: String,
    /// Value of the `format()` hint in `src`
    pub format_hint: String,
}

impl FaceConfig {
    pub fn with_fonts_root(mut self, root: &str) -> Self {
        self.fonts_root = root.to_string();
        self
    }

    pub fn with_format_hint(mut self, hint: &str) -> Self {
        self.format_hint = hint.to_string();
        self
    }

    /// Resolve a descriptor filename against the fonts root
    pub fn font_url(&self, filename: &str) -> String {
        format!("{}/{}", self.fonts_root.trim_end_matches('/'), filename)
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            fonts_root: "/static/fonts".into(),
            format_hint: "truetype-variations".into(),
        }
    }
}

/// Typed form of one `@font-face` rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceRule {
    pub family: String,
    pub src: String,
    pub format: String,
    pub weight: WeightRange,
    pub style: FontStyle,
}

impl FaceRule {
    pub fn new(font: &FontDescriptor, config: &FaceConfig) -> Self {
        let style = if font.is_italic() {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        };

        Self {
            family: font.family().to_string(),
            src: config.font_url(font.filename()),
            format: config.format_hint.clone(),
            weight: WeightRange::VARIABLE,
            style,
        }
    }
}

impl fmt::Display for FaceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@font-face {{")?;
        writeln!(f, "  font-family: '{}';", self.family)?;
        writeln!(f, "  src: url('{}') format('{}');", self.src, self.format)?;
        writeln!(f, "  font-weight: {};", self.weight)?;
        writeln!(f, "  font-style: {};", self.style)?;
        writeln!(f, "}}")
    }
}

/// Stylesheet text of one face rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleFragment(String);

impl StyleFragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&FaceRule> for StyleFragment {
    fn from(rule: &FaceRule) -> Self {
        Self(rule.to_string())
    }
}

impl fmt::Display for StyleFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the style fragment for one descriptor
pub fn synthesize(font: &FontDescriptor, config: &FaceConfig) -> StyleFragment {
    let rule = FaceRule::new(font, config);
    tracing::debug!(family = %rule.family, src = %rule.src, style = %rule.style, "synthesized face");
    StyleFragment::from(&rule)
}

/// Build fragments for a whole manifest, in manifest order
pub fn synthesize_all(manifest: &FontManifest, config: &FaceConfig) -> Vec<StyleFragment> {
    manifest.iter().map(|font| synthesize(font, config)).collect()
}
