//! Tier-gated customer-support agent: state-in, state-out.
//!
//! A five-node linear decision graph (init → classify → check_access →
//! retrieve → generate) over an immutable-by-replacement `SupportState`.
//! Classification is fixed keyword matching, access is decided from the
//! trusted invoke config (never from conversational state), and the only
//! external collaborator is the `LlmClient` used by the final node.

pub mod agent;
pub mod config;
pub mod docs;
pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod nodes;
pub mod prompt;
pub mod state;
pub mod tier;
pub mod topic;
pub mod traits;

pub use agent::{support_graph, support_graph_with_observer, SupportAgent, SupportRequest};
pub use config::InvokeConfig;
pub use error::AgentError;
pub use graph::{CompilationError, CompiledStateGraph, Node, StateGraph, StepObserver};
pub use llm::{LlmClient, LlmError, LlmResponse, MockLlm, Usage};
#[cfg(feature = "openai")]
pub use llm::{ChatGroq, ChatOpenAI, OpenAiConfig};
pub use message::Message;
pub use nodes::{CheckAccessNode, ClassifyNode, GenerateNode, InitNode, RetrieveNode};
pub use state::SupportState;
pub use tier::Tier;
pub use topic::Topic;
pub use traits::AsyncAgent;
