//! Query execution and result shaping.

pub mod model;
pub mod normalize;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::backend::{bounded, GraphRunner};
use crate::error::{chain, AskError, AskResult};
use crate::query::guard;
use crate::query::model::GeneratedQuery;
use model::NormalizedValue;

/// Runs generated queries against the graph and normalizes the rows.
#[derive(Clone)]
pub struct QueryExecutor {
    graph: Arc<dyn GraphRunner>,
    read_only: bool,
    timeout: Duration,
}

impl QueryExecutor {
    pub fn new(graph: Arc<dyn GraphRunner>, read_only: bool, timeout: Duration) -> Self {
        Self {
            graph,
            read_only,
            timeout,
        }
    }

    /// Execute a query and normalize its rows.
    ///
    /// Errors are returned to the caller untouched; recovering from them is
    /// the pipeline's job.
    pub async fn execute(&self, query: &GeneratedQuery) -> AskResult<NormalizedValue> {
        if self.read_only {
            if let Some(violation) = guard::check(query.as_str()) {
                warn!(%violation, "Refusing to run a query that may write");
                return Err(AskError::Execution(format!(
                    "refusing to run a query containing {}",
                    violation
                )));
            }
        }

        let rows = bounded(self.timeout, "Graph query", self.graph.run(query.as_str()))
            .await
            .map_err(|e| AskError::Execution(chain(&e)))?;

        debug!(rows = rows.len(), "Query returned");
        Ok(normalize::normalize(rows))
    }
}
