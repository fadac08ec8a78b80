//! Fixed test cases for the access-gating behavior.
//!
//! Four canonical cases: tracing for Pro and Free, self-hosting for
//! Enterprise and Pro. `expect_access` is the label the judge scores against.

use supportgraph::{Message, Tier};

/// One replayable case: a single-turn question, a tier, and the expected
/// access decision.
#[derive(Debug, Clone)]
pub struct TestCase {
    /// Unique case name, used in reports and logs.
    pub name: &'static str,
    /// The user question (single-turn input).
    pub question: &'static str,
    /// Tier supplied through the trusted invoke config.
    pub tier: Tier,
    /// Whether the assistant should grant access to the documentation.
    pub expect_access: bool,
}

impl TestCase {
    /// The case input as a message history.
    pub fn messages(&self) -> Vec<Message> {
        vec![Message::user(self.question)]
    }

    /// Reference label handed to the judge.
    pub fn reference(&self) -> &'static str {
        if self.expect_access {
            "should allow access"
        } else {
            "should deny access"
        }
    }
}

/// The canonical case set.
pub fn test_cases() -> Vec<TestCase> {
    vec![
        TestCase {
            name: "tracing-pro",
            question: "How do I enable tracing?",
            tier: Tier::Pro,
            expect_access: true,
        },
        TestCase {
            name: "tracing-free",
            question: "How do I enable tracing?",
            tier: Tier::Free,
            expect_access: false,
        },
        TestCase {
            name: "self-host-enterprise",
            question: "How do I self-host LangSmith?",
            tier: Tier::Enterprise,
            expect_access: true,
        },
        TestCase {
            name: "self-host-pro",
            question: "How do I self-host LangSmith?",
            tier: Tier::Pro,
            expect_access: false,
        },
    ]
}
