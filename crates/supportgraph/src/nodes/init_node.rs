//! Init node: derive the question, resolve the tier from trusted config.
//!
//! The tier is read from `InvokeConfig` only, never from caller-supplied
//! state, and defaults to `Free` when absent. An empty message history fails
//! the traversal here, before any decision is made.

use async_trait::async_trait;

use crate::config::InvokeConfig;
use crate::error::AgentError;
use crate::graph::Node;
use crate::state::SupportState;

/// First node of the chain: sets `question` and `customer_tier`.
///
/// **Interaction**: Implements `Node<SupportState>`; reads
/// `InvokeConfig::customer_tier`; every later node depends on its output.
#[derive(Debug, Default)]
pub struct InitNode;

impl InitNode {
    /// Builds an Init node.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Node<SupportState> for InitNode {
    fn id(&self) -> &str {
        "init"
    }

    /// Copies the last message content into `question` and resolves the tier.
    /// Fails with `InvalidInput` when the history is empty.
    async fn run(
        &self,
        state: SupportState,
        config: &InvokeConfig,
    ) -> Result<SupportState, AgentError> {
        let question = state
            .messages
            .last()
            .map(|m| m.content().to_string())
            .ok_or_else(|| AgentError::InvalidInput("message history is empty".into()))?;
        Ok(SupportState {
            question: Some(question),
            customer_tier: config.resolved_tier(),
            ..state
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;
    use crate::tier::Tier;

    #[tokio::test]
    async fn init_derives_question_and_tier_from_config() {
        let state = SupportState::from_messages(vec![Message::user("How do I enable tracing?")]);
        let config = InvokeConfig::new("Ada", Tier::Pro);
        let out = InitNode::new().run(state, &config).await.unwrap();
        assert_eq!(out.question.as_deref(), Some("How do I enable tracing?"));
        assert_eq!(out.customer_tier, Tier::Pro);
    }

    #[tokio::test]
    async fn init_defaults_missing_tier_to_free() {
        let state = SupportState::from_messages(vec![Message::user("hi")]);
        let out = InitNode::new()
            .run(state, &InvokeConfig::default())
            .await
            .unwrap();
        assert_eq!(out.customer_tier, Tier::Free);
    }

    #[tokio::test]
    async fn init_rejects_empty_history() {
        let err = InitNode::new()
            .run(SupportState::default(), &InvokeConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::InvalidInput(_)));
    }
}
