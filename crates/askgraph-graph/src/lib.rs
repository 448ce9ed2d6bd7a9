//! # askgraph graph
//!
//! Neo4j boundary for askgraph.
//!
//! Opens a connection per query, runs the generated Cypher verbatim and
//! materializes every row as a JSON map.

pub mod client;
pub mod runner;

pub use client::{row_to_record, GraphClient, GraphConfig};
pub use runner::Neo4jRunner;
