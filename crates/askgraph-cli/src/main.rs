//! askgraph CLI
//!
//! Ask a Neo4j graph questions in plain language, on the console or
//! through a small web page.

use anyhow::Result;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;
mod settings;

use commands::{Cli, Commands};

/// Initialize tracing with optional file logging.
///
/// Console commands log to stderr so stdout carries only the answer.
/// The returned guard must live until exit or buffered file lines are lost.
fn init_tracing(log_file: Option<&std::path::Path>, console_mode: bool) -> Option<WorkerGuard> {
    let default_filter = if console_mode {
        "askgraph=warn,askgraph_core=warn"
    } else {
        "askgraph=info,askgraph_core=info,askgraph_web=debug"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if let Some(path) = log_file {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| std::path::Path::new("."));
        let _ = std::fs::create_dir_all(dir);
        let file_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "askgraph-serve.log".into());

        let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

        // Log to both stdout and file when --log is used
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .init();
        Some(guard)
    } else if console_mode {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .init();
        None
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
        None
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match &cli.command {
        Commands::Serve(args) if args.log => Some(
            args.log_file
                .clone()
                .unwrap_or_else(|| std::path::PathBuf::from("askgraph-serve.log")),
        ),
        _ => None,
    };

    let console_mode = !matches!(&cli.command, Commands::Serve(_));
    let _guard = init_tracing(log_file.as_deref(), console_mode);

    cli.execute().await
}
