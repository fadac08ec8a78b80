//! Support agent: the five-node pipeline behind a single `ask` call.
//!
//! Wires init → classify → check_access → retrieve → generate into a
//! `CompiledStateGraph<SupportState>` and exposes it as an agent. One linear
//! traversal per call; the returned state carries the full history and every
//! derived field for inspection.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::InvokeConfig;
use crate::error::AgentError;
use crate::graph::{CompilationError, CompiledStateGraph, StateGraph, StepObserver};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::nodes::{CheckAccessNode, ClassifyNode, GenerateNode, InitNode, RetrieveNode};
use crate::state::SupportState;
use crate::traits::AsyncAgent;

/// Builds the support pipeline graph around the given LLM client.
///
/// The chain and its order are fixed; compilation validates that every edge
/// target is registered, so a successfully built graph is total.
pub fn support_graph(
    llm: Box<dyn LlmClient>,
) -> Result<CompiledStateGraph<SupportState>, CompilationError> {
    build(llm, None)
}

/// Same as [`support_graph`], with a step observer attached.
pub fn support_graph_with_observer(
    llm: Box<dyn LlmClient>,
    observer: Arc<dyn StepObserver<SupportState>>,
) -> Result<CompiledStateGraph<SupportState>, CompilationError> {
    build(llm, Some(observer))
}

fn build(
    llm: Box<dyn LlmClient>,
    observer: Option<Arc<dyn StepObserver<SupportState>>>,
) -> Result<CompiledStateGraph<SupportState>, CompilationError> {
    let mut graph = StateGraph::<SupportState>::new();
    graph
        .add_node("init", Box::new(InitNode::new()))
        .add_node("classify", Box::new(ClassifyNode::new()))
        .add_node("check_access", Box::new(CheckAccessNode::new()))
        .add_node("retrieve", Box::new(RetrieveNode::new()))
        .add_node("generate", Box::new(GenerateNode::new(llm)))
        .add_edge("init")
        .add_edge("classify")
        .add_edge("check_access")
        .add_edge("retrieve")
        .add_edge("generate");
    match observer {
        Some(obs) => graph.compile_with_observer(obs),
        None => graph.compile(),
    }
}

/// One invocation request: the conversation plus the trusted config.
///
/// The config is the only channel for authorization-relevant fields; a tier
/// embedded anywhere in the messages is never read.
#[derive(Debug, Clone, Default)]
pub struct SupportRequest {
    /// Ordered conversation; must be non-empty, the last entry is the question.
    pub messages: Vec<Message>,
    /// Trusted per-invoke config (display name, tier).
    pub config: InvokeConfig,
}

/// Tier-gated support agent.
///
/// **Interaction**: Owns the compiled graph; `ask` seeds a fresh
/// `SupportState` from the caller's messages and runs one traversal. Also
/// implements `AsyncAgent` over `SupportRequest` for generic harnesses.
pub struct SupportAgent {
    graph: CompiledStateGraph<SupportState>,
}

impl SupportAgent {
    /// Builds an agent around the given LLM client.
    pub fn new(llm: Box<dyn LlmClient>) -> Result<Self, CompilationError> {
        Ok(Self {
            graph: support_graph(llm)?,
        })
    }

    /// Builds an agent with a step observer attached to the graph.
    pub fn with_observer(
        llm: Box<dyn LlmClient>,
        observer: Arc<dyn StepObserver<SupportState>>,
    ) -> Result<Self, CompilationError> {
        Ok(Self {
            graph: support_graph_with_observer(llm, observer)?,
        })
    }

    /// Runs one traversal: messages in, final state (with reply) out.
    pub async fn ask(
        &self,
        messages: Vec<Message>,
        config: &InvokeConfig,
    ) -> Result<SupportState, AgentError> {
        self.graph
            .invoke(SupportState::from_messages(messages), config)
            .await
    }
}

#[async_trait]
impl AsyncAgent for SupportAgent {
    type Input = SupportRequest;
    type Output = SupportState;
    type Error = AgentError;

    fn name(&self) -> &str {
        "SupportAgent"
    }

    async fn run(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.ask(input.messages, &input.config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlm;
    use crate::tier::Tier;

    #[tokio::test]
    async fn agent_graph_has_the_fixed_node_order() {
        let graph = support_graph(Box::new(MockLlm::fixed("ok"))).unwrap();
        assert_eq!(
            graph.node_order(),
            ["init", "classify", "check_access", "retrieve", "generate"]
        );
    }

    #[tokio::test]
    async fn agent_runs_via_async_agent_trait() {
        let agent = SupportAgent::new(Box::new(MockLlm::fixed("hello"))).unwrap();
        let request = SupportRequest {
            messages: vec![Message::user("How do I enable tracing?")],
            config: InvokeConfig::new("Ada", Tier::Pro),
        };
        let out = agent.run(request).await.unwrap();
        assert_eq!(out.reply(), Some("hello"));
        assert_eq!(agent.name(), "SupportAgent");
    }
}
