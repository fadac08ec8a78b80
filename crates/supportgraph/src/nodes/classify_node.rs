//! Classify node: map the question to a topic by keyword priority.

use async_trait::async_trait;

use crate::config::InvokeConfig;
use crate::error::AgentError;
use crate::graph::Node;
use crate::state::SupportState;
use crate::topic;

/// Second node of the chain: sets `topic` from `question`.
///
/// Pure step; an unmatched question yields `Topic::Unknown`, never an error.
/// Expects init to have run: a missing question means the chain was wired
/// wrong, which is an execution error, not a classification miss.
#[derive(Debug, Default)]
pub struct ClassifyNode;

impl ClassifyNode {
    /// Builds a Classify node.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Node<SupportState> for ClassifyNode {
    fn id(&self) -> &str {
        "classify"
    }

    async fn run(
        &self,
        state: SupportState,
        _config: &InvokeConfig,
    ) -> Result<SupportState, AgentError> {
        let question = state
            .question
            .as_deref()
            .ok_or_else(|| AgentError::ExecutionFailed("classify ran before init".into()))?;
        let topic = topic::classify(question);
        Ok(SupportState {
            topic: Some(topic),
            ..state
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;
    use crate::topic::Topic;

    #[tokio::test]
    async fn classify_sets_topic_from_question() {
        let state = SupportState {
            question: Some("How do I enable tracing?".into()),
            ..SupportState::from_messages(vec![Message::user("How do I enable tracing?")])
        };
        let out = ClassifyNode::new()
            .run(state, &InvokeConfig::default())
            .await
            .unwrap();
        assert_eq!(out.topic, Some(Topic::Tracing));
    }

    #[tokio::test]
    async fn classify_without_init_is_an_execution_error() {
        let err = ClassifyNode::new()
            .run(SupportState::default(), &InvokeConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::ExecutionFailed(_)));
    }
}
