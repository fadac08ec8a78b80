//! State graph: nodes + linear edges, compile and invoke.
//!
//! Aligns with LangGraph `StateGraph`: add nodes and edges, compile, then
//! invoke with state and config. Strictly linear: every node has exactly one
//! successor by position, validated at compile time.

mod compile_error;
mod compiled;
mod node;
mod observer;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use node::Node;
pub use observer::StepObserver;
pub use state_graph::StateGraph;
