//! Retrieve node: gated lookup of the canned documentation.

use async_trait::async_trait;

use crate::config::InvokeConfig;
use crate::docs;
use crate::error::AgentError;
use crate::graph::Node;
use crate::state::SupportState;

/// Fourth node of the chain: sets `retrieved_doc`.
///
/// `retrieved_doc` ends up `Some` only when the access check granted and the
/// topic has a registered document; otherwise `None`, which the prompt
/// composer renders as a decline-and-upgrade instruction.
#[derive(Debug, Default)]
pub struct RetrieveNode;

impl RetrieveNode {
    /// Builds a Retrieve node.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Node<SupportState> for RetrieveNode {
    fn id(&self) -> &str {
        "retrieve"
    }

    async fn run(
        &self,
        state: SupportState,
        _config: &InvokeConfig,
    ) -> Result<SupportState, AgentError> {
        let topic = state
            .topic
            .ok_or_else(|| AgentError::ExecutionFailed("retrieve ran before classify".into()))?;
        let can_access = state
            .can_access
            .ok_or_else(|| AgentError::ExecutionFailed("retrieve ran before check_access".into()))?;
        let retrieved_doc = docs::lookup(topic, can_access).map(str::to_string);
        Ok(SupportState {
            retrieved_doc,
            ..state
        })
    }
}
