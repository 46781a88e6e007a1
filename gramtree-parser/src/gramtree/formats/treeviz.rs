//! Treeviz formatter for parse trees
//!
//! One line per node, structure encoded with box-drawing connectors, labels
//! truncated past a caller-chosen width. Quick to scan for the shallow, wide
//! trees a grammar derivation produces:
//!
//!     E
//!     ├─ T
//!     │  └─ 1
//!     ├─ +
//!     └─ E
//!        └─ T
//!           └─ 2

use crate::gramtree::parsing::tree::ParseNode;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn format_node(node: &ParseNode, prefix: &str, is_last: bool, max_chars: usize, out: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    out.push_str(prefix);
    out.push_str(connector);
    out.push(' ');
    out.push_str(&truncate(node.label(), max_chars));
    out.push('\n');

    let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
    let count = node.children().len();
    for (index, child) in node.children().iter().enumerate() {
        format_node(child, &child_prefix, index == count - 1, max_chars, out);
    }
}

/// Render a parse tree with labels truncated to `max_label_chars`.
pub fn render(root: &ParseNode, max_label_chars: usize) -> String {
    let mut out = String::new();
    out.push_str(&truncate(root.label(), max_label_chars));
    out.push('\n');

    let count = root.children().len();
    for (index, child) in root.children().iter().enumerate() {
        format_node(child, "", index == count - 1, max_label_chars, &mut out);
    }

    out
}

/// Render a parse tree with the default label width.
pub fn to_treeviz_str(root: &ParseNode) -> String {
    render(root, 30)
}
