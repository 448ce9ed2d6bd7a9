//! Pipeline state and report models.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::query::model::{GeneratedQuery, Question};
use crate::result::model::NormalizedValue;

/// Where a request currently is in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Idle,
    Generating,
    Executing,
    Summarizing,
    Done,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Generating => "generating",
            Self::Executing => "executing",
            Self::Summarizing => "summarizing",
            Self::Done => "done",
        }
    }

    /// Progress text shown while the stage runs.
    pub fn progress_message(&self) -> &'static str {
        match self {
            Self::Idle => "Waiting for a question",
            Self::Generating => "Generating Cypher...",
            Self::Executing => "Running query...",
            Self::Summarizing => "Summarizing results...",
            Self::Done => "Done",
        }
    }
}

/// Outcome of the execution stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExecutionOutcome {
    Success { value: NormalizedValue },
    Failed { error: String },
}

impl ExecutionOutcome {
    pub fn value(&self) -> Option<&NormalizedValue> {
        match self {
            Self::Success { value } => Some(value),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failed { error } => Some(error),
        }
    }
}

/// Everything one request produced. Serialized for adapters, never read back.
#[derive(Debug, Clone, Serialize)]
pub struct AskReport {
    pub request_id: String,
    pub question: Question,
    pub query: GeneratedQuery,
    pub execution: ExecutionOutcome,
    pub answer: String,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}
