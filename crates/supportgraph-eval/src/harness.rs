//! Case runner: replay the dataset through the agent, judge each reply.
//!
//! Infra failures are per-case: if the agent or the judge fails on one case,
//! that case is reported as skipped and the remaining cases continue. The
//! dataset itself is validated up front; a broken dataset aborts the run.

use std::collections::HashSet;

use tracing::{info, warn};

use supportgraph::{InvokeConfig, SupportAgent};

use crate::dataset::TestCase;
use crate::error::EvalError;
use crate::judge::{AccessJudge, Verdict};

/// Display name used for every replayed case.
const EVAL_USER_NAME: &str = "LangSmith";

/// Terminal status of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseStatus {
    /// Judged and matched the expected decision.
    Passed,
    /// Judged and did not match.
    Failed,
    /// Agent or judge failed; the case did not get a verdict.
    Skipped(String),
}

/// Report for one replayed case.
#[derive(Debug, Clone)]
pub struct CaseReport {
    /// Case name from the dataset.
    pub name: &'static str,
    /// What happened.
    pub status: CaseStatus,
    /// Verdict, present unless the case was skipped.
    pub verdict: Option<Verdict>,
    /// The assistant reply that was judged, when the agent produced one.
    pub reply: Option<String>,
}

/// Aggregate result of an eval run.
#[derive(Debug, Clone, Default)]
pub struct EvalSummary {
    /// Per-case reports, in dataset order.
    pub reports: Vec<CaseReport>,
}

impl EvalSummary {
    /// Number of cases with a given status.
    fn count(&self, f: impl Fn(&CaseStatus) -> bool) -> usize {
        self.reports.iter().filter(|r| f(&r.status)).count()
    }

    /// Cases that passed.
    pub fn passed(&self) -> usize {
        self.count(|s| *s == CaseStatus::Passed)
    }

    /// Cases that failed.
    pub fn failed(&self) -> usize {
        self.count(|s| *s == CaseStatus::Failed)
    }

    /// Cases skipped for infra reasons.
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, CaseStatus::Skipped(_)))
    }
}

fn validate(cases: &[TestCase]) -> Result<(), EvalError> {
    let mut seen = HashSet::new();
    for case in cases {
        if case.question.trim().is_empty() {
            return Err(EvalError::Dataset(format!(
                "case {:?} has an empty question",
                case.name
            )));
        }
        if !seen.insert(case.name) {
            return Err(EvalError::Dataset(format!(
                "duplicate case name {:?}",
                case.name
            )));
        }
    }
    Ok(())
}

/// Replays every case through the agent and judges the replies.
///
/// Returns one report per case, in order. Only a malformed dataset is an
/// error; per-case failures are folded into the summary as `Skipped`.
pub async fn run_cases(
    agent: &SupportAgent,
    judge: &dyn AccessJudge,
    cases: &[TestCase],
) -> Result<EvalSummary, EvalError> {
    validate(cases)?;

    let mut summary = EvalSummary::default();
    for case in cases {
        let config = InvokeConfig::new(EVAL_USER_NAME, case.tier);
        let state = match agent.ask(case.messages(), &config).await {
            Ok(state) => state,
            Err(e) => {
                warn!(case = case.name, error = %e, "agent failed; skipping case");
                summary.reports.push(CaseReport {
                    name: case.name,
                    status: CaseStatus::Skipped(e.to_string()),
                    verdict: None,
                    reply: None,
                });
                continue;
            }
        };
        let reply = state.reply().unwrap_or_default().to_string();

        match judge.judge(case.question, &reply, case.reference()).await {
            Ok(verdict) => {
                info!(
                    case = case.name,
                    score = verdict.score(),
                    comment = %verdict.comment,
                    "case judged"
                );
                summary.reports.push(CaseReport {
                    name: case.name,
                    status: if verdict.correct {
                        CaseStatus::Passed
                    } else {
                        CaseStatus::Failed
                    },
                    verdict: Some(verdict),
                    reply: Some(reply),
                });
            }
            Err(e) => {
                warn!(case = case.name, error = %e, "judge failed; skipping case");
                summary.reports.push(CaseReport {
                    name: case.name,
                    status: CaseStatus::Skipped(e.to_string()),
                    verdict: None,
                    reply: Some(reply),
                });
            }
        }
    }
    Ok(summary)
}
