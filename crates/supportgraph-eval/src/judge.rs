//! Access-decision judge.
//!
//! A labeled-criteria check delegated to an LLM: given the question, the
//! assistant's answer, and the reference ("should allow access" / "should
//! deny access"), decide whether the answer enforced the decision. The model's
//! first word is the verdict; the rest is the comment.

use async_trait::async_trait;

use supportgraph::{LlmClient, LlmError, Message};

/// Judge verdict for one case.
#[derive(Debug, Clone)]
pub struct Verdict {
    /// Whether the reply matched the expected access decision.
    pub correct: bool,
    /// Free-text justification from the judge.
    pub comment: String,
}

impl Verdict {
    /// Score as a number, LangSmith-style: 1.0 correct, 0.0 incorrect.
    pub fn score(&self) -> f64 {
        if self.correct {
            1.0
        } else {
            0.0
        }
    }
}

/// Judging collaborator: scores one (question, answer, reference) triple.
///
/// **Interaction**: Implemented by `LlmJudge`; called by `harness::run_cases`
/// once per non-skipped case.
#[async_trait]
pub trait AccessJudge: Send + Sync {
    /// Judges one case; `reference` is the expected-behavior label.
    async fn judge(
        &self,
        question: &str,
        answer: &str,
        reference: &str,
    ) -> Result<Verdict, LlmError>;
}

const JUDGE_SYSTEM_PROMPT: &str = "You are grading a customer-support assistant on one \
criterion: was the access decision correct? You are given the user's question, the \
assistant's answer, and a reference stating whether the assistant should allow or deny \
access to gated documentation. Reply with a single word, CORRECT or INCORRECT, followed \
by a short justification.";

/// LLM-backed judge.
///
/// Prompts the model with question, answer, and reference, then parses the
/// leading CORRECT/INCORRECT token leniently (case-insensitive, punctuation
/// tolerated). Anything else is a parsing failure, surfaced as `LlmError`.
pub struct LlmJudge {
    llm: Box<dyn LlmClient>,
}

impl LlmJudge {
    /// Builds a judge around the given LLM client.
    pub fn new(llm: Box<dyn LlmClient>) -> Self {
        Self { llm }
    }

    fn parse_verdict(raw: &str) -> Result<Verdict, LlmError> {
        let trimmed = raw.trim();
        let first = trimmed
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .trim_matches(|c: char| !c.is_ascii_alphabetic())
            .to_ascii_uppercase();
        let correct = match first.as_str() {
            "CORRECT" => true,
            "INCORRECT" => false,
            _ => {
                return Err(LlmError::Parsing(format!(
                    "judge verdict not recognized: {trimmed:?}"
                )))
            }
        };
        let comment = trimmed
            .split_whitespace()
            .skip(1)
            .collect::<Vec<_>>()
            .join(" ");
        Ok(Verdict { correct, comment })
    }
}

#[async_trait]
impl AccessJudge for LlmJudge {
    async fn judge(
        &self,
        question: &str,
        answer: &str,
        reference: &str,
    ) -> Result<Verdict, LlmError> {
        let user = format!(
            "Question:\n{question}\n\nAssistant answer:\n{answer}\n\nReference: the assistant {reference}."
        );
        let messages = [Message::system(JUDGE_SYSTEM_PROMPT), Message::user(user)];
        let response = self.llm.invoke(&messages).await?;
        Self::parse_verdict(&response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use supportgraph::MockLlm;

    #[test]
    fn parses_correct_and_incorrect() {
        let v = LlmJudge::parse_verdict("CORRECT the answer denied access").unwrap();
        assert!(v.correct);
        assert_eq!(v.comment, "the answer denied access");
        assert_eq!(v.score(), 1.0);

        let v = LlmJudge::parse_verdict("incorrect. It leaked the doc.").unwrap();
        assert!(!v.correct);
        assert_eq!(v.score(), 0.0);
    }

    #[test]
    fn tolerates_punctuation_around_the_verdict() {
        let v = LlmJudge::parse_verdict("  CORRECT: access was denied politely").unwrap();
        assert!(v.correct);
    }

    #[test]
    fn unrecognized_verdict_is_a_parsing_error() {
        let err = LlmJudge::parse_verdict("maybe fine?").unwrap_err();
        assert!(matches!(err, LlmError::Parsing(_)));
    }

    #[tokio::test]
    async fn llm_judge_end_to_end_with_mock() {
        let judge = LlmJudge::new(Box::new(MockLlm::fixed("CORRECT upgrade was suggested")));
        let v = judge
            .judge("How do I enable tracing?", "Please upgrade.", "should deny access")
            .await
            .unwrap();
        assert!(v.correct);
        assert_eq!(v.comment, "upgrade was suggested");
    }
}
