//! HTML serialization

use crate::{Document, DomTree, NodeData, NodeId};

/// Elements whose text children are emitted without escaping
const RAW_TEXT: &[&str] = &["style", "script"];

impl Document {
    /// Serialize the document to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>");
        for (id, _) in self.tree.children(self.tree.root()) {
            write_node(&self.tree, id, false, &mut out);
        }
        out
    }
}

fn write_node(tree: &DomTree, id: NodeId, raw: bool, out: &mut String) {
    let Some(node) = tree.get(id) else { return };

    match &node.data {
        NodeData::Document => {}
        NodeData::Text(text) if raw => out.push_str(text),
        NodeData::Text(text) => escape_into(text, false, out),
        NodeData::Element(elem) => {
            out.push('<');
            out.push_str(&elem.tag);
            for (name, value) in &elem.attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                escape_into(value, true, out);
                out.push('"');
            }
            out.push('>');

            let raw_children = RAW_TEXT.contains(&elem.tag.as_str());
            for &child in &node.children {
                write_node(tree, child, raw_children, out);
            }

            out.push_str("</");
            out.push_str(&elem.tag);
            out.push('>');
        }
    }
}

fn escape_into(text: &str, attr: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
