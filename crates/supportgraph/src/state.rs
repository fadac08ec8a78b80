//! Support conversation state threaded through the graph.
//!
//! `SupportState` holds the message history plus the derived fields each node
//! writes exactly once. Nodes never mutate in place: each one returns a new
//! state that is the previous state plus its own additions, so a reviewer can
//! tell from the node alone which field it owns.

use crate::message::Message;
use crate::tier::Tier;
use crate::topic::Topic;

/// State for the support pipeline: init → classify → check_access → retrieve → generate.
///
/// Write-once discipline per traversal: `question` is set by init, `topic` by
/// classify, `can_access` by check_access, `retrieved_doc` by retrieve;
/// generate only appends to `messages`. `customer_tier` comes from the trusted
/// invoke config at init and is immutable afterward; the graph never reads a
/// tier out of caller-supplied state.
///
/// Invariant: `retrieved_doc.is_some()` implies `can_access == Some(true)` and
/// a known topic.
///
/// **Interaction**: Consumed and produced by the pipeline nodes; passed through
/// `CompiledStateGraph::invoke`; returned in full so callers can inspect the
/// derived fields.
#[derive(Debug, Clone, Default)]
pub struct SupportState {
    /// Conversation history, append-only; the assistant reply is pushed last.
    pub messages: Vec<Message>,
    /// Tier resolved from `InvokeConfig` at init (default `Free`).
    pub customer_tier: Tier,
    /// Content of the last message at entry time; set once by init.
    pub question: Option<String>,
    /// Classification result; set once by classify.
    pub topic: Option<Topic>,
    /// Access decision; set once by check_access.
    pub can_access: Option<bool>,
    /// Documentation excerpt, present only when access was granted and the
    /// topic has a registered document; set once by retrieve.
    pub retrieved_doc: Option<String>,
}

impl SupportState {
    /// Seeds a state from the caller's messages. Derived fields start unset.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    /// The assistant's final reply, when generation has run.
    pub fn reply(&self) -> Option<&str> {
        match self.messages.last() {
            Some(Message::Assistant(s)) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_state_has_no_derived_fields() {
        let state = SupportState::from_messages(vec![Message::user("hi")]);
        assert_eq!(state.customer_tier, Tier::Free);
        assert!(state.question.is_none());
        assert!(state.topic.is_none());
        assert!(state.can_access.is_none());
        assert!(state.retrieved_doc.is_none());
        assert!(state.reply().is_none());
    }

    #[test]
    fn reply_is_last_assistant_message() {
        let mut state = SupportState::from_messages(vec![Message::user("hi")]);
        state.messages.push(Message::assistant("hello"));
        assert_eq!(state.reply(), Some("hello"));
    }
}
