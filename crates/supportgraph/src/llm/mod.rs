//! LLM clients: the external generation collaborator.
//!
//! - `LlmClient`: async chat interface over a message list
//! - `LlmResponse` / `Usage`: reply content and token usage
//! - `LlmError`: provider error enumeration
//! - `MockLlm`: deterministic client for tests and offline examples
//! - `ChatOpenAI` / `ChatGroq` (feature `openai`): OpenAI-compatible HTTP clients

mod client;
mod error;
mod mock;
#[cfg(feature = "openai")]
mod openai;

pub use client::{LlmClient, LlmResponse, Usage};
pub use error::LlmError;
pub use mock::MockLlm;
#[cfg(feature = "openai")]
pub use openai::{ChatGroq, ChatOpenAI, OpenAiConfig};
