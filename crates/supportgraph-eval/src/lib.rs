//! Evaluation harness for the tier-gated support agent.
//!
//! Replays a fixed set of test cases through the agent, asks a judge whether
//! the emitted reply matches the expected access decision, and reports one
//! score and comment per case. A judge failure skips the offending case and
//! the run continues; agent and judge stay behind narrow interfaces so the
//! harness itself holds no provider logic.

pub mod dataset;
pub mod error;
pub mod harness;
pub mod judge;

pub use dataset::{test_cases, TestCase};
pub use error::EvalError;
pub use harness::{run_cases, CaseReport, CaseStatus, EvalSummary};
pub use judge::{AccessJudge, LlmJudge, Verdict};
