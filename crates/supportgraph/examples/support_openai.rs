//! Support pipeline against a real OpenAI-compatible endpoint.
//!
//! ## Prerequisites
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! # optional: OPENAI_BASE_URL, OPENAI_MODEL
//! ```
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p supportgraph --features openai --example support_openai -- \
//!     "How do I enable tracing?" Pro
//! ```

use supportgraph::{ChatOpenAI, InvokeConfig, Message, SupportAgent, Tier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "supportgraph=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let question = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "How do I enable tracing?".to_string());
    let tier = Tier::from_label(&std::env::args().nth(2).unwrap_or_default());

    let llm = match ChatOpenAI::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("\nMake sure OPENAI_API_KEY is set:");
            eprintln!("  export OPENAI_API_KEY=\"sk-...\"");
            std::process::exit(1);
        }
    };

    let agent = SupportAgent::new(Box::new(llm)).expect("valid graph");
    let config = InvokeConfig::new("John Smith", tier);

    println!("User: {question}  (tier: {})", tier.label());
    println!("---");

    match agent.ask(vec![Message::user(&question)], &config).await {
        Ok(state) => println!("Assistant: {}", state.reply().unwrap_or("(no reply)")),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
