//! Step observer: a narrow seam for tracing and run logging.
//!
//! The decision core stays pure and network-free; anything that wants to watch
//! a traversal (span recording, run upload, eval capture) implements this and
//! is attached at compile time. The hook returns nothing, so an observer
//! cannot fail the graph.

/// Called after each node completes with the node id and the state it produced.
///
/// **Interaction**: Attached via `StateGraph::compile_with_observer`; invoked
/// by `CompiledStateGraph::invoke` between nodes.
pub trait StepObserver<S>: Send + Sync {
    /// One node finished; `state` is the state it returned.
    fn on_step_complete(&self, node_id: &str, state: &S);
}
