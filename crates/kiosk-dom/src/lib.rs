//! Kiosk DOM - Document Object Model
//!
//! Small arena-backed DOM: enough structure to host injected stylesheets
//! and a mounted application root.

mod document;
mod node;
mod serialize;
mod tree;

pub use document::Document;
pub use node::{ElementData, Node, NodeData};
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Whether this ID refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}

/// DOM mutation error
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Node {0:?} does not exist")]
    InvalidNode(NodeId),

    #[error("Node {0:?} cannot have children")]
    NotAContainer(NodeId),

    #[error("Node {0:?} would become its own ancestor")]
    HierarchyRequest(NodeId),

    #[error("Document has no <head> element")]
    MissingHead,
}
