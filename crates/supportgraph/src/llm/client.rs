//! LLM client trait and response types.

use async_trait::async_trait;

use crate::llm::error::LlmError;
use crate::message::Message;

/// Token usage reported by a provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    /// Tokens consumed by the prompt.
    pub prompt_tokens: u32,
    /// Tokens consumed by the completion.
    pub completion_tokens: u32,
}

/// Reply from a single chat completion.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Assistant reply text.
    pub content: String,
    /// Token usage; zeroed when the provider reports none.
    pub usage: Usage,
}

/// Async chat interface over an ordered message list.
///
/// The system prompt, when present, is the first message. Implementations may
/// fail with `LlmError`; callers propagate, they do not swallow or retry.
///
/// **Interaction**: Implemented by `MockLlm` and the OpenAI-compatible
/// clients; consumed by `GenerateNode` and the eval judge.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Single chat completion over the given messages.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, LlmError>;
}
