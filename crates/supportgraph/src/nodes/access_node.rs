//! CheckAccess node: decide documentation access from tier and topic.

use async_trait::async_trait;

use crate::config::InvokeConfig;
use crate::error::AgentError;
use crate::graph::Node;
use crate::state::SupportState;
use crate::tier;

/// Third node of the chain: sets `can_access`.
///
/// Pure step over the server-resolved tier and the classified topic; runs
/// exactly once, after classify and before retrieve. All unknowns deny.
#[derive(Debug, Default)]
pub struct CheckAccessNode;

impl CheckAccessNode {
    /// Builds a CheckAccess node.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Node<SupportState> for CheckAccessNode {
    fn id(&self) -> &str {
        "check_access"
    }

    async fn run(
        &self,
        state: SupportState,
        _config: &InvokeConfig,
    ) -> Result<SupportState, AgentError> {
        let topic = state
            .topic
            .ok_or_else(|| AgentError::ExecutionFailed("check_access ran before classify".into()))?;
        let can_access = tier::can_access(state.customer_tier, topic);
        Ok(SupportState {
            can_access: Some(can_access),
            ..state
        })
    }
}
