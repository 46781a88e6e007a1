//! Parse tree nodes
//!
//! A node is a symbol label plus owned, ordered children. Non-terminal
//! expansions own one child per matched symbol; terminal matches and
//! ε-only expansions are leaves. Renderers only need the label and children
//! accessors, nothing here depends on a rendering technology.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseNode {
    label: String,
    children: Vec<ParseNode>,
}

impl ParseNode {
    /// Create a node with no children yet.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Attach a completed child subtree. Children keep attachment order.
    pub fn push(&mut self, child: ParseNode) {
        self.children.push(child);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[ParseNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total node count of this subtree, itself included.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(ParseNode::size).sum::<usize>()
    }
}
