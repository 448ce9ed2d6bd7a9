//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::settings::Settings;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "8501")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to ./askgraph-serve.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, settings: &Settings) -> Result<()> {
    let services = settings.services()?;

    println!();
    println!(
        "  {} {}",
        "askgraph".cyan().bold(),
        "Web Server".bold()
    );
    println!();
    println!(
        "  {}  http://{}:{}",
        "Question page".green(),
        args.host,
        args.port
    );
    println!(
        "  {}            http://{}:{}/api/ask",
        "API".green(),
        args.host,
        args.port
    );
    println!(
        "  {}            {} / {}",
        "LLM".green(),
        services.llm.provider(),
        askgraph_core::TextGenerator::model(services.llm.as_ref())
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    askgraph_web::run_server(services.pipeline(), &args.host, args.port).await?;

    Ok(())
}
