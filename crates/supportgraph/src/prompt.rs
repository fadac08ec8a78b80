//! System prompt composition for the generation step.
//!
//! The composer only renders decisions made upstream (access check, doc
//! retrieval); it never decides access itself, so the generation model is
//! never the authority on gating.

use crate::state::SupportState;
use crate::topic::Topic;

/// Fallback display name when the config carries none.
const DEFAULT_USER_NAME: &str = "there";

/// Builds the system message for a finished decision pass.
///
/// Contains: the addressed user's display name, their tier label, a standing
/// instruction to politely redirect to an upgrade when access was denied, and
/// (only when the topic is known and a document was retrieved) the
/// documentation excerpt labeled with its topic.
pub fn compose_system_prompt(user_name: Option<&str>, state: &SupportState) -> String {
    let name = user_name.unwrap_or(DEFAULT_USER_NAME);
    let tier = state.customer_tier.label();
    let mut prompt = format!(
        "You are a customer-support assistant for LangSmith. Address the user as {name}. \
The user is on the {tier} plan."
    );

    if state.can_access == Some(true) {
        prompt.push_str(
            " Answer using the documentation excerpt below when one is provided; \
if none is provided, answer from general knowledge and say the docs do not cover it.",
        );
    } else {
        prompt.push_str(
            " This user's plan does not include access to the requested documentation. \
Politely decline to share gated details and suggest upgrading their plan for access. \
Do not reveal the gated content.",
        );
    }

    let known_topic = state.topic.filter(|t| *t != Topic::Unknown);
    if let (Some(topic), Some(doc)) = (known_topic, state.retrieved_doc.as_deref()) {
        prompt.push_str(&format!(
            "\n\nDocumentation excerpt [{}]:\n{}",
            topic.label(),
            doc
        ));
    }

    prompt
}
