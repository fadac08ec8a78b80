//! Compiled state graph: immutable, supports invoke only.
//!
//! Built by `StateGraph::compile`. Holds nodes and linear edge order. Runs the
//! chain start to end; a failing node aborts the traversal so no later node
//! (in particular generation) can run on partial state.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::config::InvokeConfig;
use crate::error::AgentError;

use super::Node;
use super::StepObserver;

/// Compiled graph: immutable structure, supports invoke only.
///
/// Created by `StateGraph::compile()`. Execution is strictly sequential: each
/// node runs after its predecessor completes, in edge order, exactly once.
/// Concurrent invokes share no mutable state and need no locking.
///
/// **Interaction**: Built from `StateGraph`; callers use
/// `invoke(state, config)` to execute.
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Box<dyn Node<S>>>,
    pub(super) edge_order: Vec<String>,
    pub(super) observer: Option<Arc<dyn StepObserver<S>>>,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Runs the graph with the given state and per-invoke config.
    ///
    /// Nodes run in edge order; the first `Err` is returned as-is and nothing
    /// after it executes. After each successful node the observer (if any) is
    /// notified with the node id and the produced state.
    pub async fn invoke(&self, state: S, config: &InvokeConfig) -> Result<S, AgentError> {
        let mut state = state;
        for id in &self.edge_order {
            let node = self.nodes.get(id).expect("compiled graph has all nodes");
            state = node.run(state, config).await?;
            debug!(node = %id, "node complete");
            if let Some(observer) = &self.observer {
                observer.on_step_complete(id, &state);
            }
        }
        Ok(state)
    }

    /// Node ids in execution order.
    pub fn node_order(&self) -> &[String] {
        &self.edge_order
    }
}
