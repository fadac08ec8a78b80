//! Static documentation store, gated by the access decision.
//!
//! One fixed paragraph per known topic; configuration data, immutable for the
//! process lifetime. `lookup` never returns a document without access.

use crate::topic::Topic;

const TRACING_DOC: &str = "To enable tracing, set the LANGSMITH_TRACING environment variable to \
\"true\" and provide your LANGSMITH_API_KEY. Every graph invocation is then recorded as a run \
with its full node-by-node trace, which you can inspect in the project view.";

const SELF_HOSTING_DOC: &str = "Self-hosted LangSmith ships as a Helm chart for Kubernetes. \
You will need a license key, a Postgres instance, and a Redis instance; point the chart's \
values file at both and at your object store, then install into a dedicated namespace.";

const LANGGRAPH_RAG_DOC: &str = "A retrieval-augmented graph adds a retrieval node before \
generation: embed the user question, query your vector store for the top-k chunks, and place \
them in state so the generation node can cite them in its answer.";

const LANGSMITH_EVAL_DOC: &str = "To evaluate an agent, create a dataset of input/reference \
pairs, then run your target function over the dataset with one or more evaluators attached. \
Each example is scored independently and results are aggregated per experiment.";

/// Fixed text for a known topic, or `None` for `Unknown`.
fn doc_for(topic: Topic) -> Option<&'static str> {
    match topic {
        Topic::Tracing => Some(TRACING_DOC),
        Topic::SelfHosting => Some(SELF_HOSTING_DOC),
        Topic::LanggraphRag => Some(LANGGRAPH_RAG_DOC),
        Topic::LangsmithEval => Some(LANGSMITH_EVAL_DOC),
        Topic::Unknown => None,
    }
}

/// Looks up the documentation for a topic, honoring the access decision.
///
/// Returns `None` when access was denied or the topic has no registered
/// document. Never mutates anything; safe to call from concurrent invokes.
pub fn lookup(topic: Topic, can_access: bool) -> Option<&'static str> {
    if !can_access {
        return None;
    }
    doc_for(topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denied_access_returns_none_for_every_topic() {
        for topic in [
            Topic::Tracing,
            Topic::SelfHosting,
            Topic::LanggraphRag,
            Topic::LangsmithEval,
            Topic::Unknown,
        ] {
            assert_eq!(lookup(topic, false), None);
        }
    }

    #[test]
    fn unknown_topic_has_no_doc_even_with_access() {
        assert_eq!(lookup(Topic::Unknown, true), None);
    }

    #[test]
    fn known_topics_return_their_doc_with_access() {
        assert!(lookup(Topic::Tracing, true).unwrap().contains("LANGSMITH_TRACING"));
        assert!(lookup(Topic::SelfHosting, true).unwrap().contains("Helm"));
        assert!(lookup(Topic::LanggraphRag, true).unwrap().contains("retrieval"));
        assert!(lookup(Topic::LangsmithEval, true).unwrap().contains("dataset"));
    }
}
