//! Stylesheet injection

use kiosk_dom::{Document, DomError};

use crate::StyleFragment;

/// Something that can take a block of stylesheet text.
///
/// Each call registers a new stylesheet; repeated calls accumulate.
pub trait StyleSink {
    fn register_style(&mut self, css: &str) -> Result<(), StyleSinkError>;
}

/// The sink refused the stylesheet
#[derive(Debug, thiserror::Error)]
pub enum StyleSinkError {
    #[error("Document rejected stylesheet: {0}")]
    Dom(#[from] DomError),
}

impl StyleSink for Document {
    fn register_style(&mut self, css: &str) -> Result<(), StyleSinkError> {
        self.append_style(css)?;
        Ok(())
    }
}

/// Register all fragments as one stylesheet, in order
pub fn inject<S: StyleSink + ?Sized>(sink: &mut S, fragments: &[StyleFragment]) -> Result<(), StyleSinkError> {
    let css: String = fragments.iter().map(StyleFragment::as_str).collect();
    sink.register_style(&css)?;
    tracing::info!("Registered {} font face(s)", fragments.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{synthesize, FaceConfig, FontDescriptor};

    #[test]
    fn test_inject_into_document() {
        let config = FaceConfig::default();
        let frags = vec![
            synthesize(&FontDescriptor::new("Inter", "Inter.ttf"), &config),
            synthesize(&FontDescriptor::new("Lora", "Lora-Italic.ttf"), &config),
        ];

        let mut doc = Document::default();
        inject(&mut doc, &frags).unwrap();

        let styles = doc.head_styles();
        assert_eq!(styles.len(), 1);

        let text = doc.text_content(styles[0]);
        let inter = text.find("/static/fonts/Inter.ttf").unwrap();
        let lora = text.find("/static/fonts/Lora-Italic.ttf").unwrap();
        assert!(inter < lora);
        assert!(text.find("'Inter'").unwrap() < text.find("'Lora'").unwrap());
    }

    #[test]
    fn test_repeated_inject_accumulates() {
        let mut doc = Document::default();
        inject(&mut doc, &[]).unwrap();
        inject(&mut doc, &[]).unwrap();
        assert_eq!(doc.head_styles().len(), 2);
    }

    #[test]
    fn test_headless_document_fails() {
        let mut doc = Document::empty("about:blank");
        let err = inject(&mut doc, &[]).unwrap_err();
        assert!(matches!(err, StyleSinkError::Dom(DomError::MissingHead)));
    }
}
