//! `GraphRunner` implementation backed by Neo4j.

use anyhow::Result;
use askgraph_core::{GraphRunner, ResultSet};
use async_trait::async_trait;
use tracing::debug;

use crate::client::{GraphClient, GraphConfig};

/// Runs each query on its own connection.
///
/// No pool is kept between queries. The client is dropped when `run`
/// returns, on success and on error alike.
#[derive(Debug, Clone)]
pub struct Neo4jRunner {
    config: GraphConfig,
}

impl Neo4jRunner {
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Open a connection and close it again.
    pub async fn verify_connectivity(&self) -> Result<()> {
        GraphClient::connect(&self.config).await?;
        Ok(())
    }
}

#[async_trait]
impl GraphRunner for Neo4jRunner {
    async fn run(&self, cypher: &str) -> Result<ResultSet> {
        let client = GraphClient::connect(&self.config).await?;
        let rows = client.query(cypher).await?;
        debug!(rows = rows.len(), "Fetched rows");
        Ok(rows)
    }
}
