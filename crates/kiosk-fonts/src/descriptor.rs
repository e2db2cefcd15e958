//! Font descriptor

use serde_json::Value;

/// One entry of the font manifest.
///
/// Missing or `null` members become empty strings; they are only rejected
/// under [`ManifestPolicy::strict`](crate::ManifestPolicy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    family: String,
    filename: String,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            filename: filename.into(),
        }
    }

    /// Lenient conversion of one manifest entry.
    ///
    /// Scalars are rendered as text. An entry that is not an object yields
    /// empty members.
    pub fn from_value(entry: &Value) -> Self {
        Self {
            family: member_text(entry, "family"),
            filename: member_text(entry, "filename"),
        }
    }

    /// Face name, used verbatim
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Path relative to the static fonts root
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Whether the filename mentions "italic" anywhere, ignoring case
    pub fn is_italic(&self) -> bool {
        self.filename.to_lowercase().contains("italic")
    }
}

fn member_text(entry: &Value, name: &str) -> String {
    match entry.get(name) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_italic() {
        assert!(FontDescriptor::new("Body", "Body-Italic.ttf").is_italic());
        assert!(FontDescriptor::new("Body", "body-ITALIC.ttf").is_italic());
        assert!(!FontDescriptor::new("Body", "BODY-REGULAR.TTF").is_italic());
        // Substring match, not word boundary
        assert!(FontDescriptor::new("Serif", "SemiItalicSerif.ttf").is_italic());
        // Only the filename counts
        assert!(!FontDescriptor::new("Italic Display", "Display.ttf").is_italic());
    }

    #[test]
    fn test_from_value_lenient() {
        let d = FontDescriptor::from_value(&json!({"family": "Inter", "filename": "Inter.ttf", "size": 12}));
        assert_eq!(d, FontDescriptor::new("Inter", "Inter.ttf"));

        let d = FontDescriptor::from_value(&json!({"filename": null}));
        assert_eq!(d.family(), "");
        assert_eq!(d.filename(), "");
    }

    #[test]
    fn test_from_value_scalars_as_text() {
        let d = FontDescriptor::from_value(&json!({"family": 5, "filename": "Five.ttf"}));
        assert_eq!(d.family(), "5");

        let d = FontDescriptor::from_value(&json!({"family": true, "filename": 1.5}));
        assert_eq!(d, FontDescriptor::new("true", "1.5"));
    }

    #[test]
    fn test_from_value_non_object() {
        assert_eq!(FontDescriptor::from_value(&json!(7)), FontDescriptor::new("", ""));
        assert_eq!(FontDescriptor::from_value(&json!("Inter")), FontDescriptor::new("", ""));
    }
}
