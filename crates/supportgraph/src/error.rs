//! Agent and graph execution errors.
//!
//! - `AgentError`: error surface of a graph traversal (`Node::run`, `CompiledStateGraph::invoke`)
//! - The pure steps (classify, access check, doc lookup) never fail; errors come
//!   from malformed input at the boundary or from the LLM provider.

use thiserror::Error;

use crate::llm::LlmError;

/// Error produced while running the support graph.
///
/// `InvalidInput` aborts the traversal before any derived field is produced;
/// `Llm` wraps a provider failure from the generation step, propagated
/// unmodified and never retried here.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Malformed invocation input (e.g. empty message history).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Graph execution failed outside the LLM call.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// The external generation call failed.
    #[error(transparent)]
    Llm(#[from] LlmError),
}
