//! Graph node trait: one step in a StateGraph.
//!
//! Receives state `S` plus the per-invoke config, returns the updated `S`.
//! The pipeline is linear, so a node does not choose its successor; an `Err`
//! aborts the traversal before any later node runs.

use async_trait::async_trait;

use crate::config::InvokeConfig;
use crate::error::AgentError;

/// One step in a graph: (state, config) in, state out.
///
/// Aligns with a LangGraph node `(state, config) -> partial`, except the full
/// state is returned. Nodes follow write-once discipline: each sets only its
/// own derived fields and copies the rest forward.
///
/// **Interaction**: Registered via `StateGraph::add_node`; driven by
/// `CompiledStateGraph::invoke` in edge order.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Clone + Send + Sync + 'static,
{
    /// Node id (e.g. `"classify"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// One step: state and config in, state out.
    async fn run(&self, state: S, config: &InvokeConfig) -> Result<S, AgentError>;
}
