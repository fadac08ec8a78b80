//! Graph compilation error.
//!
//! Returned by `StateGraph::compile` when the edge order references a node
//! that was never registered, or when the graph has no nodes at all.

use thiserror::Error;

/// Error when compiling a state graph.
///
/// Validation runs at construction time so a compiled graph is always total:
/// every position in the edge order has a registered node.
#[derive(Debug, Error)]
pub enum CompilationError {
    /// A node id in the edge chain was not registered via `add_node`.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// The edge order is empty; an empty pipeline cannot be invoked.
    #[error("graph has no edges")]
    Empty,
}
