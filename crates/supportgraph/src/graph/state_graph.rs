//! State graph builder: nodes + linear edge order.
//!
//! Add nodes with `add_node`, define the chain with `add_edge`, then `compile`
//! (or `compile_with_observer`) to get a `CompiledStateGraph`.

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::CompiledStateGraph;
use crate::graph::node::Node;
use crate::graph::observer::StepObserver;

/// State graph: nodes plus linear edge order. No conditional edges.
///
/// Generic over state type `S`. Build with `add_node` / `add_edge`, then
/// `compile()` to obtain an executable graph. The order of `add_edge` calls is
/// the execution order: first is START→id, last leads to END.
///
/// **Interaction**: Accepts `Box<dyn Node<S>>`; produces `CompiledStateGraph<S>`.
pub struct StateGraph<S> {
    nodes: HashMap<String, Box<dyn Node<S>>>,
    /// Linear chain: [id1, id2, ...] => START -> id1 -> id2 -> ... -> END
    edge_order: Vec<String>,
}

impl<S> Default for StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edge_order: Vec::new(),
        }
    }

    /// Adds a node; id must be unique. Replaces if same id.
    ///
    /// Returns `&mut Self` for method chaining. The node is stored as
    /// `Box<dyn Node<S>>`; use `add_edge` to include it in the chain.
    pub fn add_node(&mut self, id: impl Into<String>, node: Box<dyn Node<S>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Appends an edge from the current chain end to this node.
    ///
    /// The given `to_id` must be registered via `add_node` before `compile()`.
    pub fn add_edge(&mut self, to_id: impl Into<String>) -> &mut Self {
        self.edge_order.push(to_id.into());
        self
    }

    /// Builds the executable graph: validates that the chain is non-empty and
    /// that all edge targets are registered nodes.
    ///
    /// Returns `CompilationError::NodeNotFound(id)` if any id in the edge order
    /// is not in the node map. On success, the graph is immutable and ready for
    /// `invoke`.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        self.compile_with_observer_opt(None)
    }

    /// Builds the executable graph with a step observer.
    ///
    /// The observer is called after every node with the node id and the state
    /// it produced; it is the only seam for side channels (tracing spans, run
    /// logging) so nodes themselves stay pure.
    pub fn compile_with_observer(
        self,
        observer: Arc<dyn StepObserver<S>>,
    ) -> Result<CompiledStateGraph<S>, CompilationError> {
        self.compile_with_observer_opt(Some(observer))
    }

    fn compile_with_observer_opt(
        self,
        observer: Option<Arc<dyn StepObserver<S>>>,
    ) -> Result<CompiledStateGraph<S>, CompilationError> {
        if self.edge_order.is_empty() {
            return Err(CompilationError::Empty);
        }
        for id in &self.edge_order {
            if !self.nodes.contains_key(id) {
                return Err(CompilationError::NodeNotFound(id.clone()));
            }
        }
        Ok(CompiledStateGraph {
            nodes: self.nodes,
            edge_order: self.edge_order,
            observer,
        })
    }
}
