//! End-to-end tests for kiosk-fonts
//!
//! Manifest served over HTTP → normalize → synthesize → inject into a document.

use kiosk_dom::Document;
use kiosk_fonts::*;
use lightningcss::rules::CssRule;
use lightningcss::stylesheet::{ParserOptions, StyleSheet};
use serde_json::json;
use smol::io::{AsyncReadExt, AsyncWriteExt};
use smol::net::TcpListener;

/// Serve `body` as JSON once and return the endpoint URL
async fn serve_json(status: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    smol::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
    })
    .detach();

    format!("http://{}/api/fonts", addr)
}

/// Run the pipeline against an HTTP manifest and inject into a fresh document
fn load_into_document(payload: serde_json::Value) -> (Document, LoadedFaces) {
    smol::block_on(async {
        let url = serve_json("200 OK", payload.to_string()).await;
        let source = HttpManifestSource::new(&url).unwrap();
        let faces = FontPipeline::default().load(&source).await.unwrap();

        let mut doc = Document::default();
        inject(&mut doc, &faces.fragments).unwrap();
        (doc, faces)
    })
}

fn style_text(doc: &Document) -> String {
    let styles = doc.head_styles();
    assert_eq!(styles.len(), 1, "exactly one <style> expected");
    doc.text_content(styles[0])
}

// ============================================================================
// END-TO-END SCENARIOS
// ============================================================================

#[test]
fn test_single_normal_face() {
    let (doc, faces) = load_into_document(json!([{"family": "Inter", "filename": "Inter.ttf"}]));
    assert_eq!(faces.fragments.len(), 1);

    let css = style_text(&doc);
    assert!(css.contains("font-family: 'Inter';"));
    assert!(css.contains("font-style: normal;"));
    assert!(css.contains("font-weight: 100 900;"));
    assert!(css.contains("/static/fonts/Inter.ttf')"));
}

#[test]
fn test_single_italic_face() {
    let (doc, _) = load_into_document(json!([{"family": "Inter", "filename": "Inter-Italic.ttf"}]));
    assert!(style_text(&doc).contains("font-style: italic;"));
}

#[test]
fn test_empty_wrapped_manifest() {
    let (doc, faces) = load_into_document(json!({"fonts": []}));
    assert!(faces.fragments.is_empty());
    assert_eq!(faces.warnings, vec![ManifestWarning::WrappedEnvelope]);
    assert_eq!(style_text(&doc), "");
}

#[test]
fn test_manifest_order_preserved() {
    let payload = json!([
        {"family": "Zilla", "filename": "Zilla.ttf"},
        {"family": "Alegreya", "filename": "Alegreya-Italic.ttf"},
        {"family": "Manrope", "filename": "Manrope.ttf"},
    ]);
    let (doc, _) = load_into_document(payload);
    let css = style_text(&doc);

    let positions: Vec<usize> = ["Zilla.ttf", "Alegreya-Italic.ttf", "Manrope.ttf"]
        .iter()
        .map(|f| css.find(f).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_http_failure_status() {
    smol::block_on(async {
        let url = serve_json("503 Service Unavailable", "{}".into()).await;
        let source = HttpManifestSource::new(&url).unwrap();
        let err = FontPipeline::default().load(&source).await.unwrap_err();
        assert!(matches!(err, FontError::Net(kiosk_net::NetError::HttpError { status: 503 })));
    });
}

#[test]
fn test_invalid_json_body() {
    smol::block_on(async {
        let url = serve_json("200 OK", "<html>oops</html>".into()).await;
        let source = HttpManifestSource::new(&url).unwrap();
        let err = FontPipeline::default().load(&source).await.unwrap_err();
        assert!(matches!(err, FontError::Decode(_)));
    });
}

// ============================================================================
// GENERATED CSS
// ============================================================================

#[test]
fn test_generated_css_parses() {
    let manifest = normalize(&json!([
        {"family": "Inter", "filename": "Inter.ttf"},
        {"family": "Inter", "filename": "Inter-Italic.ttf"},
        {"family": "Source Serif", "filename": "SourceSerif.ttf"},
    ]))
    .unwrap()
    .manifest;

    let css: String = synthesize_all(&manifest, &FaceConfig::default())
        .iter()
        .map(StyleFragment::as_str)
        .collect();

    let sheet = StyleSheet::parse(&css, ParserOptions::default()).unwrap();
    let faces = sheet
        .rules
        .0
        .iter()
        .filter(|rule| matches!(rule, CssRule::FontFace(_)))
        .count();
    assert_eq!(faces, 3);
}
