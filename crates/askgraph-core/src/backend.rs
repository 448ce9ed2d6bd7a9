//! Boundaries to the two external services the pipeline depends on.
//!
//! The LLM and graph database clients live in their own crates and
//! implement these traits, so the pipeline can be driven by fakes in tests.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::result::model::ResultSet;

/// A single-shot text generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Identifier of the model in use, for logging.
    fn model(&self) -> &str {
        "unknown"
    }
}

/// A graph database that can run one Cypher statement.
#[async_trait]
pub trait GraphRunner: Send + Sync {
    /// Run `cypher` verbatim and return every row.
    async fn run(&self, cypher: &str) -> Result<ResultSet>;
}

/// Await `fut`, failing once `limit` elapses.
pub async fn bounded<T, F>(limit: Duration, what: &str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => anyhow::bail!("{} timed out after {}s", what, limit.as_secs()),
    }
}
