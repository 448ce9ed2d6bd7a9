//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::settings::Settings;

pub mod ask;
pub mod check;
pub mod serve;

/// askgraph - ask a graph database questions in plain language
#[derive(Parser)]
#[command(name = "askgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask one question on the console
    Ask(ask::AskArgs),

    /// Start the web interface
    Serve(serve::ServeArgs),

    /// Check connectivity to Neo4j and the LLM service
    Check,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Ask(args) => ask::execute(args, &self.settings).await,
            Commands::Serve(args) => serve::execute(args, &self.settings).await,
            Commands::Check => check::execute(&self.settings).await,
        }
    }
}
