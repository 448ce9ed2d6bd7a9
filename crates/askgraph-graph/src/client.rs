//! Neo4j connection client.

use anyhow::{Context, Result};
use askgraph_core::{Record, ResultSet};
use neo4rs::{ConfigBuilder, Graph, Query, Row};
use serde::Deserialize;
use tracing::debug;

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: String::new(),
            database: "neo4j".to_string(),
        }
    }
}

/// A live Neo4j connection.
///
/// Dropping the client closes its connections, so holding one for the
/// duration of a single query scopes the connection to that query.
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect and verify the server answers.
    ///
    /// Note: neo4rs uses a lazy pool; `Graph::connect` does not open a bolt
    /// connection. The `RETURN 1` ping forces the handshake so connection
    /// and auth failures surface here rather than on the first real query.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db(config.database.as_str())
            .max_connections(1)
            .fetch_size(200)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(neo4j_config)
            .await
            .with_context(|| format!("Failed to connect to Neo4j at {}", config.uri))?;

        graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .context("Neo4j is not responding to queries")?;

        debug!(uri = %config.uri, db = %config.database, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Run a Cypher statement and collect every row.
    pub async fn query(&self, cypher: &str) -> Result<ResultSet> {
        let mut stream = self
            .graph
            .execute(Query::new(cypher.to_string()))
            .await
            .context("Neo4j query failed")?;

        let mut rows = Vec::new();
        while let Some(row) = stream.next().await.context("Failed to read Neo4j result")? {
            rows.push(row_to_record(&row)?);
        }
        Ok(rows)
    }
}

/// Decode one result row into a column-name keyed JSON record.
///
/// Scalars map to their JSON counterparts, nodes and maps to objects, and
/// `null` stays `null`.
pub fn row_to_record(row: &Row) -> Result<Record> {
    row.to::<Record>()
        .map_err(|e| anyhow::anyhow!("Failed to decode row: {:?}", e))
}
