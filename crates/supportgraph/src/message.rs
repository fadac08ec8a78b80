//! Minimal message types for agent state.
//!
//! Aligns with the usual chat layout: System (first in the list when present),
//! User, Assistant. Used by `SupportState::messages` and by the LLM clients.

/// A single message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// System prompt; placed first in the message list.
    System(String),
    /// User input.
    User(String),
    /// Model/agent reply.
    Assistant(String),
}

impl Message {
    /// Builds a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Builds a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    /// Builds an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant(content.into())
    }

    /// The text content, regardless of role.
    pub fn content(&self) -> &str {
        match self {
            Self::System(s) | Self::User(s) | Self::Assistant(s) => s,
        }
    }
}
