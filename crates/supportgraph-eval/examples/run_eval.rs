//! Replays the canonical test cases and prints per-case scores.
//!
//! Offline by default: the agent uses the system-prompt-echoing mock and the
//! judge approves everything, which exercises the full harness path without a
//! provider. Build with `--features openai` and set `GROQ_API_KEY` to use a
//! real judge instead.
//!
//! Run: `cargo run -p supportgraph-eval --example run_eval`

use supportgraph::{MockLlm, SupportAgent};
use supportgraph_eval::{run_cases, test_cases, CaseStatus, LlmJudge};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "supportgraph_eval=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let agent = SupportAgent::new(Box::new(MockLlm::echo_system())).expect("valid graph");

    #[cfg(feature = "openai")]
    let judge = {
        let llm = supportgraph::ChatGroq::new("llama-3.3-70b-versatile").unwrap_or_else(|e| {
            eprintln!("error: {e}");
            std::process::exit(1);
        });
        LlmJudge::new(Box::new(llm))
    };
    #[cfg(not(feature = "openai"))]
    let judge = LlmJudge::new(Box::new(MockLlm::fixed("CORRECT offline judge")));

    match run_cases(&agent, &judge, &test_cases()).await {
        Ok(summary) => {
            for report in &summary.reports {
                match &report.status {
                    CaseStatus::Passed | CaseStatus::Failed => {
                        let v = report.verdict.as_ref().expect("judged case has verdict");
                        println!("{}: {} - {}", report.name, v.score(), v.comment);
                    }
                    CaseStatus::Skipped(reason) => {
                        println!("{}: skipped ({reason})", report.name);
                    }
                }
            }
            println!(
                "---\npassed {} / failed {} / skipped {}",
                summary.passed(),
                summary.failed(),
                summary.skipped()
            );
            if summary.failed() > 0 {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
