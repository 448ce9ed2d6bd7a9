//! askgraph core library
//!
//! Turns a natural language question into a Cypher query with an LLM,
//! runs it against a graph database and has the LLM explain the result.
//! The LLM and the database sit behind the traits in [`backend`].

pub mod backend;
pub mod error;
pub mod pipeline;
pub mod query;
pub mod result;
pub mod summary;

#[cfg(test)]
pub(crate) mod fakes;

pub use backend::{GraphRunner, TextGenerator};
pub use error::{AskError, AskResult};
pub use pipeline::model::{AskReport, ExecutionOutcome, Stage};
pub use pipeline::observer::{PipelineObserver, Silent};
pub use pipeline::{Pipeline, PipelineOptions};
pub use query::model::{GeneratedQuery, Question};
pub use result::model::{NormalizedValue, Record, ResultSet};
