//! Console question command.

use anyhow::{Context, Result};
use askgraph_core::{AskError, Silent};
use clap::Args;
use colored::Colorize;
use dialoguer::Input;

use crate::output::ConsoleObserver;
use crate::settings::Settings;

#[derive(Args)]
pub struct AskArgs {
    /// Question to ask (prompted for when omitted)
    pub question: Option<String>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AskArgs, settings: &Settings) -> Result<()> {
    let services = settings.services()?;
    let pipeline = services.pipeline();

    let question = match args.question {
        Some(question) => question,
        None => Input::new()
            .with_prompt("Ask anything")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read question")?,
    };

    if args.json {
        let report = match pipeline.ask(&question, &mut Silent).await {
            Ok(report) => report,
            Err(AskError::EmptyQuestion) => return warn_empty(),
            Err(e) => return Err(e.into()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut observer = ConsoleObserver::new();
    let result = pipeline.ask(&question, &mut observer).await;
    observer.finish();

    match result {
        Ok(_) => Ok(()),
        Err(AskError::EmptyQuestion) => warn_empty(),
        Err(e) => Err(e.into()),
    }
}

fn warn_empty() -> Result<()> {
    println!("{}", AskError::EmptyQuestion.to_string().yellow());
    Ok(())
}
