//! Document - High-level document API

use crate::{DomError, DomTree, Node, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with `<html>`, `<head>` and `<body>`
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Freshly allocated nodes under the root always attach
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            head_element: head,
            body_element: body,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Create a document whose body holds a `<div id="{host_id}">` mount point
    pub fn with_host(url: &str, host_id: &str) -> Self {
        let mut doc = Self::new(url);
        let body = doc.body_element;
        // Body exists in a structured document
        let _ = doc.create_element_in(body, "div", &[("id", host_id)]);
        doc
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.find(self.tree.root(), &|node: &Node| {
            node.as_element().and_then(|e| e.id()) == Some(id)
        })
    }

    /// Create an element with attributes and append it to `parent`
    pub fn create_element_in(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> Result<NodeId, DomError> {
        let elem = self.tree.create_element(tag);
        if let Some(data) = self.tree.get_mut(elem).and_then(|n| n.as_element_mut()) {
            for (name, value) in attrs {
                data.set_attr(name, value);
            }
        }
        self.tree.append_child(parent, elem)?;
        Ok(elem)
    }

    /// Append a text node to `parent`
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId, DomError> {
        let node = self.tree.create_text(text);
        self.tree.append_child(parent, node)?;
        Ok(node)
    }

    /// Append a `<style>` element with `css` as its text to `<head>`
    pub fn append_style(&mut self, css: &str) -> Result<NodeId, DomError> {
        if !self.head_element.is_valid() {
            return Err(DomError::MissingHead);
        }
        let style = self.create_element_in(self.head_element, "style", &[("type", "text/css")])?;
        if !css.is_empty() {
            self.append_text(style, css)?;
        }
        tracing::debug!(bytes = css.len(), "appended <style> to head");
        Ok(style)
    }

    /// `<style>` elements currently in `<head>`, in document order
    pub fn head_styles(&self) -> Vec<NodeId> {
        self.tree.children(self.head_element)
            .filter(|(_, n)| n.as_element().is_some_and(|e| e.tag == "style"))
            .map(|(id, _)| id)
            .collect()
    }

    /// Text content of a node and its descendants
    pub fn text_content(&self, id: NodeId) -> String {
        self.tree.text_content(id)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure() {
        let doc = Document::new("http://localhost:8080/");
        assert_eq!(doc.url(), "http://localhost:8080/");
        assert!(doc.head().is_valid());
        assert!(doc.body().is_valid());
        assert!(doc.head_styles().is_empty());
    }

    #[test]
    fn test_get_element_by_id() {
        let doc = Document::with_host("about:blank", "app");
        let host = doc.get_element_by_id("app").unwrap();
        assert_eq!(doc.tree().get(host).unwrap().parent, doc.body());
        assert!(doc.get_element_by_id("missing").is_none());
    }

    #[test]
    fn test_append_style() {
        let mut doc = Document::default();
        let first = doc.append_style("a { color: red; }").unwrap();
        let second = doc.append_style("").unwrap();

        assert_eq!(doc.head_styles(), vec![first, second]);
        assert_eq!(doc.text_content(first), "a { color: red; }");
        assert_eq!(doc.text_content(second), "");
    }

    #[test]
    fn test_append_style_without_head() {
        let mut doc = Document::empty("about:blank");
        assert!(matches!(doc.append_style("x"), Err(DomError::MissingHead)));
    }
}
