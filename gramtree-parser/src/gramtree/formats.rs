//! Output formatters for parse trees
//!
//! The core exposes trees through label/children accessors only; everything
//! here is a consumer of that surface:
//!
//! - [`treeviz`]: one-line-per-node text layout for terminal output
//! - [`dot`]: Graphviz DOT digraph for rendering an image of the tree

pub mod dot;
pub mod treeviz;

pub use dot::to_dot;
pub use treeviz::to_treeviz_str;
