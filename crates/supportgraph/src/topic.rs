//! Topic classification by ordered keyword matching.
//!
//! No NLU here: a fixed, case-insensitive substring test against a priority
//! list. First match wins, so a question containing both "trace" and "rag"
//! classifies as `Tracing`. Unmatched input is `Unknown`, not an error.

/// Documentation topic a support question maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Run tracing / observability questions.
    Tracing,
    /// Self-hosted deployment questions.
    SelfHosting,
    /// Retrieval-augmented generation with LangGraph.
    LanggraphRag,
    /// Evaluation with LangSmith.
    LangsmithEval,
    /// No keyword matched.
    Unknown,
}

impl Topic {
    /// Label used in prompts (doc excerpt heading) and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tracing => "tracing",
            Self::SelfHosting => "self-hosting",
            Self::LanggraphRag => "langgraph-rag",
            Self::LangsmithEval => "langsmith-eval",
            Self::Unknown => "unknown",
        }
    }
}

/// Classifies a question into a `Topic`.
///
/// Priority order is significant and fixed: trace > self-host > rag > eval.
/// ("eval" also matches "evaluate" as a substring.) Pure and total.
pub fn classify(question: &str) -> Topic {
    let q = question.to_lowercase();
    if q.contains("trace") {
        Topic::Tracing
    } else if q.contains("self-host") {
        Topic::SelfHosting
    } else if q.contains("rag") {
        Topic::LanggraphRag
    } else if q.contains("eval") {
        Topic::LangsmithEval
    } else {
        Topic::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_map_to_topics() {
        assert_eq!(classify("How do I enable tracing?"), Topic::Tracing);
        assert_eq!(classify("How do I self-host LangSmith?"), Topic::SelfHosting);
        assert_eq!(classify("Building a RAG pipeline"), Topic::LanggraphRag);
        assert_eq!(classify("How to evaluate my agent"), Topic::LangsmithEval);
        assert_eq!(classify("eval datasets?"), Topic::LangsmithEval);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("ENABLE TRACES NOW"), Topic::Tracing);
        assert_eq!(classify("Self-Host?"), Topic::SelfHosting);
    }

    #[test]
    fn first_match_wins_by_priority() {
        // trace > self-host > rag > eval
        assert_eq!(classify("trace my rag eval"), Topic::Tracing);
        assert_eq!(classify("self-host a rag app"), Topic::SelfHosting);
        assert_eq!(classify("rag eval tips"), Topic::LanggraphRag);
    }

    #[test]
    fn unmatched_is_unknown() {
        assert_eq!(classify("What's the weather in SF?"), Topic::Unknown);
        assert_eq!(classify(""), Topic::Unknown);
    }
}
