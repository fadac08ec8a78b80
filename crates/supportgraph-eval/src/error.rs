//! Harness errors.

use thiserror::Error;

/// Error raised by the evaluation harness itself.
///
/// Per-case judge or agent failures are not errors of the run: they are
/// reported, the case is skipped, and remaining cases continue. Only a broken
/// dataset aborts before anything runs.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The dataset is malformed (empty question, duplicate case name).
    #[error("invalid dataset: {0}")]
    Dataset(String),
}
