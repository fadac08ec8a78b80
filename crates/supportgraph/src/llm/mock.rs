//! Mock LLM for tests and offline examples.
//!
//! Deterministic stand-in for the generation collaborator: fixed reply,
//! scripted reply sequence, an echo of the system prompt (to assert what the
//! composer produced actually reached the provider), or a forced failure.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::llm::{LlmClient, LlmError, LlmResponse, Usage};
use crate::message::Message;

enum Behavior {
    /// Always return the same content.
    Fixed(String),
    /// Return scripted contents in order; repeat the last when exhausted.
    Scripted(Vec<String>, AtomicUsize),
    /// Echo the first system message (empty string when there is none).
    EchoSystem,
    /// Always fail with this error.
    Failing(LlmError),
}

/// Mock LLM client.
///
/// **Interaction**: Implements `LlmClient`; used by `GenerateNode` in tests,
/// by the eval judge in harness tests, and by the offline example.
pub struct MockLlm {
    behavior: Behavior,
}

impl MockLlm {
    /// Always replies with the given content.
    pub fn fixed(content: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fixed(content.into()),
        }
    }

    /// Replies with the scripted contents in order; repeats the last one when
    /// the script is exhausted. Panics on an empty script.
    pub fn scripted(script: Vec<String>) -> Self {
        assert!(!script.is_empty(), "scripted mock needs at least one reply");
        Self {
            behavior: Behavior::Scripted(script, AtomicUsize::new(0)),
        }
    }

    /// Replies with the content of the first system message.
    pub fn echo_system() -> Self {
        Self {
            behavior: Behavior::EchoSystem,
        }
    }

    /// Always fails with the given error.
    pub fn failing(error: LlmError) -> Self {
        Self {
            behavior: Behavior::Failing(error),
        }
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, LlmError> {
        let content = match &self.behavior {
            Behavior::Fixed(c) => c.clone(),
            Behavior::Scripted(script, next) => {
                let n = next.fetch_add(1, Ordering::SeqCst);
                script[n.min(script.len() - 1)].clone()
            }
            Behavior::EchoSystem => messages
                .iter()
                .find_map(|m| match m {
                    Message::System(s) => Some(s.clone()),
                    _ => None,
                })
                .unwrap_or_default(),
            Behavior::Failing(e) => return Err(e.clone()),
        };
        Ok(LlmResponse {
            content,
            usage: Usage::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_mock_returns_content() {
        let llm = MockLlm::fixed("hello");
        let out = llm.invoke(&[Message::user("hi")]).await.unwrap();
        assert_eq!(out.content, "hello");
    }

    #[tokio::test]
    async fn scripted_mock_repeats_last_reply() {
        let llm = MockLlm::scripted(vec!["a".into(), "b".into()]);
        assert_eq!(llm.invoke(&[]).await.unwrap().content, "a");
        assert_eq!(llm.invoke(&[]).await.unwrap().content, "b");
        assert_eq!(llm.invoke(&[]).await.unwrap().content, "b");
    }

    #[tokio::test]
    async fn echo_system_returns_system_prompt() {
        let llm = MockLlm::echo_system();
        let messages = [Message::system("sys"), Message::user("q")];
        assert_eq!(llm.invoke(&messages).await.unwrap().content, "sys");
    }

    #[tokio::test]
    async fn failing_mock_propagates_error() {
        let llm = MockLlm::failing(LlmError::RateLimit("slow down".into()));
        let err = llm.invoke(&[]).await.unwrap_err();
        assert!(matches!(err, LlmError::RateLimit(_)));
    }
}
