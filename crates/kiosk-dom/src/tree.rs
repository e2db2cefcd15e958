//! DOM Tree (arena-based allocation)

use crate::{DomError, Node, NodeData, NodeId};

/// Arena-based DOM tree. Nodes are never freed; detached nodes stay in the arena.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// Document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::element(tag))
    }

    /// Allocate a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content.to_string()))
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.get(child).is_none() {
            return Err(DomError::InvalidNode(child));
        }
        match self.get(parent).map(|n| &n.data) {
            None => return Err(DomError::InvalidNode(parent)),
            Some(NodeData::Text(_)) => return Err(DomError::NotAContainer(parent)),
            Some(_) => {}
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest(child));
        }

        self.detach(child);
        self.nodes[parent.0 as usize].children.push(child);
        self.nodes[child.0 as usize].parent = parent;
        Ok(())
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        while let Some(n) = self.get(node) {
            if node == ancestor {
                return true;
            }
            node = n.parent;
        }
        false
    }

    fn detach(&mut self, child: NodeId) {
        let parent = self.nodes[child.0 as usize].parent;
        if let Some(p) = self.get_mut(parent) {
            p.children.retain(|&c| c != child);
        }
        self.nodes[child.0 as usize].parent = NodeId::NONE;
    }

    /// Iterate children of a node
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |&c| self.get(c).map(|n| (c, n)))
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(node) = self.get(id) {
            if let Some(text) = node.as_text() {
                out.push_str(text);
            }
            for &child in &node.children {
                self.collect_text(child, out);
            }
        }
    }

    /// Depth-first search for the first element matching `pred`
    pub fn find(&self, start: NodeId, pred: &dyn Fn(&Node) -> bool) -> Option<NodeId> {
        for (id, node) in self.children(start) {
            if pred(node) {
                return Some(id);
            }
            if let Some(found) = self.find(id, pred) {
                return Some(found);
            }
        }
        None
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_text() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p");
        let a = tree.create_text("Hello, ");
        let b = tree.create_text("world");
        tree.append_child(tree.root(), p).unwrap();
        tree.append_child(p, a).unwrap();
        tree.append_child(p, b).unwrap();

        assert_eq!(tree.text_content(p), "Hello, world");
        assert_eq!(tree.children(p).count(), 2);
        assert_eq!(tree.get(a).unwrap().parent, p);
    }

    #[test]
    fn test_reparent() {
        let mut tree = DomTree::new();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        let c = tree.create_element("span");
        tree.append_child(tree.root(), a).unwrap();
        tree.append_child(tree.root(), b).unwrap();
        tree.append_child(a, c).unwrap();
        tree.append_child(b, c).unwrap();

        assert_eq!(tree.children(a).count(), 0);
        assert_eq!(tree.children(b).count(), 1);
    }

    #[test]
    fn test_append_errors() {
        let mut tree = DomTree::new();
        let text = tree.create_text("x");
        let span = tree.create_element("span");

        assert!(matches!(tree.append_child(text, span), Err(DomError::NotAContainer(_))));
        assert!(matches!(tree.append_child(NodeId(99), span), Err(DomError::InvalidNode(_))));
        assert!(matches!(tree.append_child(span, NodeId::NONE), Err(DomError::InvalidNode(_))));
        assert!(matches!(tree.append_child(span, span), Err(DomError::HierarchyRequest(_))));
    }
}
