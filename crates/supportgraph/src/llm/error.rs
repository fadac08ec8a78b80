//! LLM call errors.

use thiserror::Error;

/// Error from an LLM provider call.
///
/// Propagated to the caller unmodified; the graph never retries internally.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    /// API returned an error (5xx or a business error).
    #[error("api error: {0}")]
    ApiError(String),

    /// Rate limited (429).
    #[error("rate limit: {0}")]
    RateLimit(String),

    /// Authentication failed (401/403).
    #[error("auth failed: {0}")]
    Auth(String),

    /// Request was rejected as invalid (other 4xx).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be parsed.
    #[error("parsing failed: {0}")]
    Parsing(String),
}
