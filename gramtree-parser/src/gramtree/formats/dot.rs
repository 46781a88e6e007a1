//! Graphviz DOT formatter for parse trees
//!
//! Emits a digraph with one node per tree node and one edge per parent-child
//! pair, labeled by symbol name. Nodes are addressed by integer indices
//! assigned in a pre-order walk, so identical trees always serialize to
//! identical DOT text regardless of where the nodes live in memory.

use crate::gramtree::parsing::tree::ParseNode;

/// Escape a label for a double-quoted DOT string.
fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

fn write_node(node: &ParseNode, next_id: &mut usize, out: &mut String) -> usize {
    let id = *next_id;
    *next_id += 1;
    out.push_str(&format!("    n{} [label=\"{}\"];\n", id, escape(node.label())));

    for child in node.children() {
        let child_id = write_node(child, next_id, out);
        out.push_str(&format!("    n{} -> n{};\n", id, child_id));
    }

    id
}

/// Serialize a parse tree as a Graphviz digraph with the given node shape.
pub fn render(root: &ParseNode, node_shape: &str) -> String {
    let mut out = String::new();
    out.push_str("digraph syntax_tree {\n");
    out.push_str(&format!("    node [shape={}];\n", node_shape));

    let mut next_id = 0;
    write_node(root, &mut next_id, &mut out);

    out.push_str("}\n");
    out
}

/// Serialize a parse tree as a Graphviz digraph with circle-shaped nodes.
pub fn to_dot(root: &ParseNode) -> String {
    render(root, "circle")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_statement_per_node_and_edge() {
        let mut root = ParseNode::new("E");
        root.push(ParseNode::new("1"));
        root.push(ParseNode::new("+"));

        let dot = to_dot(&root);
        assert_eq!(dot.matches("[label=").count(), 3);
        assert_eq!(dot.matches("->").count(), 2);
    }

    #[test]
    fn test_ids_are_preorder() {
        let mut left = ParseNode::new("L");
        left.push(ParseNode::new("a"));
        let mut root = ParseNode::new("R");
        root.push(left);
        root.push(ParseNode::new("b"));

        let dot = to_dot(&root);
        assert!(dot.contains("n0 [label=\"R\"]"));
        assert!(dot.contains("n1 [label=\"L\"]"));
        assert!(dot.contains("n2 [label=\"a\"]"));
        assert!(dot.contains("n3 [label=\"b\"]"));
        assert!(dot.contains("n0 -> n1;"));
        assert!(dot.contains("n1 -> n2;"));
        assert!(dot.contains("n0 -> n3;"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let node = ParseNode::new(r#"say "hi" \ bye"#);
        let dot = to_dot(&node);
        assert!(dot.contains(r#"[label="say \"hi\" \\ bye"]"#));
    }

    #[test]
    fn test_shape_is_configurable() {
        let dot = render(&ParseNode::new("S"), "box");
        assert!(dot.contains("node [shape=box];"));
    }
}
