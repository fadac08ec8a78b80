//! Integration tests for the eval harness, fully offline via MockLlm.

use supportgraph::{LlmError, MockLlm, SupportAgent};
use supportgraph_eval::{run_cases, test_cases, CaseStatus, LlmJudge};

fn agent() -> SupportAgent {
    // echo_system: replies carry the composed system prompt, which states the
    // access decision, so a scripted judge has something plausible to grade
    SupportAgent::new(Box::new(MockLlm::echo_system())).expect("valid graph")
}

#[tokio::test]
async fn all_cases_judged_correct() {
    let judge = LlmJudge::new(Box::new(MockLlm::fixed("CORRECT decision enforced")));
    let summary = run_cases(&agent(), &judge, &test_cases()).await.unwrap();

    assert_eq!(summary.reports.len(), 4);
    assert_eq!(summary.passed(), 4);
    assert_eq!(summary.failed(), 0);
    assert_eq!(summary.skipped(), 0);
    for report in &summary.reports {
        assert_eq!(report.status, CaseStatus::Passed);
        assert!(report.verdict.as_ref().unwrap().correct);
        assert!(report.reply.is_some());
    }
}

#[tokio::test]
async fn incorrect_verdicts_are_counted_as_failures() {
    let judge = LlmJudge::new(Box::new(MockLlm::scripted(vec![
        "CORRECT fine".into(),
        "INCORRECT leaked the doc".into(),
        "CORRECT fine".into(),
        "CORRECT fine".into(),
    ])));
    let summary = run_cases(&agent(), &judge, &test_cases()).await.unwrap();

    assert_eq!(summary.passed(), 3);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.reports[1].status, CaseStatus::Failed);
    assert_eq!(
        summary.reports[1].verdict.as_ref().unwrap().comment,
        "leaked the doc"
    );
}

#[tokio::test]
async fn judge_failure_skips_only_that_case() {
    // first reply is unparseable, later replies are fine
    let judge = LlmJudge::new(Box::new(MockLlm::scripted(vec![
        "hmm, unclear".into(),
        "CORRECT fine".into(),
        "CORRECT fine".into(),
        "CORRECT fine".into(),
    ])));
    let summary = run_cases(&agent(), &judge, &test_cases()).await.unwrap();

    assert_eq!(summary.skipped(), 1);
    assert_eq!(summary.passed(), 3);
    assert!(matches!(summary.reports[0].status, CaseStatus::Skipped(_)));
}

#[tokio::test]
async fn agent_failure_skips_the_case_without_a_reply() {
    let failing_agent =
        SupportAgent::new(Box::new(MockLlm::failing(LlmError::Network("down".into()))))
            .expect("valid graph");
    let judge = LlmJudge::new(Box::new(MockLlm::fixed("CORRECT fine")));
    let summary = run_cases(&failing_agent, &judge, &test_cases())
        .await
        .unwrap();

    assert_eq!(summary.skipped(), 4);
    for report in &summary.reports {
        assert!(matches!(report.status, CaseStatus::Skipped(_)));
        assert!(report.reply.is_none());
    }
}
