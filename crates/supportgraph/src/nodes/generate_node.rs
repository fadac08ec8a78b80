//! Generate node: compose the system prompt and delegate to the LLM.
//!
//! The only node that touches the network. It renders the decisions already in
//! state (never re-deciding access), prepends the system message to the full
//! history, and appends the assistant reply. Provider errors propagate
//! unmodified; on error no reply is appended.

use async_trait::async_trait;

use crate::config::InvokeConfig;
use crate::error::AgentError;
use crate::graph::Node;
use crate::llm::LlmClient;
use crate::message::Message;
use crate::prompt::compose_system_prompt;
use crate::state::SupportState;

/// Terminal node of the chain: appends the assistant reply to `messages`.
///
/// **Interaction**: Implements `Node<SupportState>`; holds the `LlmClient`
/// collaborator (e.g. `MockLlm`, `ChatOpenAI`); reads `InvokeConfig::user_name`
/// for the prompt.
pub struct GenerateNode {
    /// Generation collaborator.
    llm: Box<dyn LlmClient>,
}

impl GenerateNode {
    /// Builds a Generate node with the given LLM client.
    pub fn new(llm: Box<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Node<SupportState> for GenerateNode {
    fn id(&self) -> &str {
        "generate"
    }

    /// Prepends the composed system message to the history, invokes the LLM,
    /// and appends the reply. The system message is not stored in state; only
    /// the reply is.
    async fn run(
        &self,
        state: SupportState,
        config: &InvokeConfig,
    ) -> Result<SupportState, AgentError> {
        if state.can_access.is_none() {
            return Err(AgentError::ExecutionFailed(
                "generate ran before check_access".into(),
            ));
        }
        let system = compose_system_prompt(config.user_name.as_deref(), &state);

        let mut request = Vec::with_capacity(state.messages.len() + 1);
        request.push(Message::system(system));
        request.extend(state.messages.iter().cloned());

        let response = self.llm.invoke(&request).await?;

        let mut messages = state.messages;
        messages.push(Message::assistant(response.content));
        Ok(SupportState { messages, ..state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{LlmError, MockLlm};
    use crate::tier::Tier;
    use crate::topic::Topic;

    fn decided_state() -> SupportState {
        SupportState {
            messages: vec![Message::user("How do I enable tracing?")],
            customer_tier: Tier::Pro,
            question: Some("How do I enable tracing?".into()),
            topic: Some(Topic::Tracing),
            can_access: Some(true),
            retrieved_doc: Some("tracing doc".into()),
        }
    }

    #[tokio::test]
    async fn generate_appends_assistant_reply() {
        let node = GenerateNode::new(Box::new(MockLlm::fixed("use the env var")));
        let out = node
            .run(decided_state(), &InvokeConfig::new("Ada", Tier::Pro))
            .await
            .unwrap();
        assert_eq!(out.reply(), Some("use the env var"));
        assert_eq!(out.messages.len(), 2);
    }

    #[tokio::test]
    async fn generate_prepends_system_prompt_with_doc() {
        // echo_system reflects the composed prompt back as the reply
        let node = GenerateNode::new(Box::new(MockLlm::echo_system()));
        let out = node
            .run(decided_state(), &InvokeConfig::new("Ada", Tier::Pro))
            .await
            .unwrap();
        let reply = out.reply().unwrap();
        assert!(reply.contains("Ada"));
        assert!(reply.contains("Pro plan"));
        assert!(reply.contains("Documentation excerpt [tracing]"));
        assert!(reply.contains("tracing doc"));
    }

    #[tokio::test]
    async fn generate_propagates_provider_error_without_reply() {
        let node = GenerateNode::new(Box::new(MockLlm::failing(LlmError::ApiError("boom".into()))));
        let err = node
            .run(decided_state(), &InvokeConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::Llm(LlmError::ApiError(_))));
    }

    #[tokio::test]
    async fn generate_before_access_check_is_an_execution_error() {
        let node = GenerateNode::new(Box::new(MockLlm::fixed("x")));
        let err = node
            .run(SupportState::default(), &InvokeConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::ExecutionFailed(_)));
    }
}
