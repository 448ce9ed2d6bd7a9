//! Centralized error types for askgraph.

use thiserror::Error;

/// Main error type for the question answering pipeline.
///
/// Each variant maps to one pipeline stage. Only [`AskError::Execution`]
/// is recovered by the pipeline itself; every other kind ends the request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AskError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Please enter a question.")]
    EmptyQuestion,

    #[error("Query generation failed: {0}")]
    Generation(String),

    #[error("Query execution failed: {0}")]
    Execution(String),

    #[error("Summarization failed: {0}")]
    Summarization(String),
}

/// Result type for askgraph operations.
pub type AskResult<T> = Result<T, AskError>;

impl AskError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Name of the stage that produced this error.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::EmptyQuestion => "input",
            Self::Generation(_) => "generation",
            Self::Execution(_) => "execution",
            Self::Summarization(_) => "summarization",
        }
    }

    /// The bare message without the stage prefix.
    pub fn detail(&self) -> String {
        match self {
            Self::Configuration(msg)
            | Self::Generation(msg)
            | Self::Execution(msg)
            | Self::Summarization(msg) => msg.clone(),
            Self::EmptyQuestion => self.to_string(),
        }
    }
}

/// Render an `anyhow` error with its full context chain.
pub(crate) fn chain(err: &anyhow::Error) -> String {
    format!("{:#}", err)
}
