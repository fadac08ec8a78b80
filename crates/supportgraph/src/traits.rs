//! Core agent trait.

use async_trait::async_trait;

/// Async agent: one input, one output, one error type.
///
/// Implemented by `SupportAgent`; useful for harnesses that drive agents
/// generically without knowing their graph.
#[async_trait]
pub trait AsyncAgent {
    /// Input type.
    type Input;
    /// Output type.
    type Output;
    /// Error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Agent name.
    fn name(&self) -> &str;

    /// Executes the agent on one input.
    async fn run(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
