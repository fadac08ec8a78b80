//! Offline support pipeline demo with the mock LLM.
//!
//! Runs one question through init → classify → check_access → retrieve →
//! generate; the mock echoes the composed system prompt so you can see
//! exactly what the generation model would receive.
//!
//! Run: `cargo run -p supportgraph --example support_mock -- "How do I enable tracing?" Pro`

use supportgraph::{InvokeConfig, Message, MockLlm, SupportAgent, Tier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "supportgraph=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let question = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "How do I enable tracing?".to_string());
    let tier = Tier::from_label(&std::env::args().nth(2).unwrap_or_default());

    let agent = SupportAgent::new(Box::new(MockLlm::echo_system())).expect("valid graph");
    let config = InvokeConfig::new("John Smith", tier);

    match agent.ask(vec![Message::user(&question)], &config).await {
        Ok(state) => {
            println!("question: {question}");
            println!("tier:     {}", state.customer_tier.label());
            println!("topic:    {:?}", state.topic);
            println!("access:   {:?}", state.can_access);
            println!("doc:      {}", state.retrieved_doc.is_some());
            println!("---");
            println!("{}", state.reply().unwrap_or("(no reply)"));
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
