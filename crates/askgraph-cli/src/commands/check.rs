//! Connectivity check command.

use std::time::Duration;

use anyhow::Result;
use askgraph_llm::Provider;
use colored::Colorize;

use crate::settings::Settings;

/// Verify Neo4j and the LLM service answer.
pub async fn execute(settings: &Settings) -> Result<()> {
    let services = settings.services()?;
    let timeout = services.options.call_timeout;

    println!("{}", "askgraph Status".bold());
    println!("{}", "─".repeat(40));

    let graph_ok = match tokio::time::timeout(timeout, services.graph.verify_connectivity()).await {
        Ok(Ok(())) => {
            println!("  Neo4j:  {} ({})", "connected".green(), services.graph.config().uri);
            true
        }
        Ok(Err(e)) => {
            println!("  Neo4j:  {} {:#}", "unreachable".red(), e);
            false
        }
        Err(_) => {
            println!("  Neo4j:  {} after {}s", "timed out".red(), timeout.as_secs());
            false
        }
    };

    let outcome = tokio::time::timeout(timeout, services.llm.health_check()).await.ok();
    let (llm_ok, line) = llm_status(outcome, services.llm.provider(), timeout);
    println!("  LLM:    {}", line);

    println!("{}", "─".repeat(40));

    if graph_ok && llm_ok {
        Ok(())
    } else {
        anyhow::bail!("one or more services are unavailable")
    }
}

/// Status line for the LLM health check. `None` means the check timed out.
fn llm_status(outcome: Option<Result<bool>>, provider: Provider, timeout: Duration) -> (bool, String) {
    match outcome {
        Some(Ok(true)) => (true, format!("{} ({})", "available".green(), provider)),
        Some(Ok(false)) => (false, format!("{} ({})", "model not available".red(), provider)),
        Some(Err(e)) => (false, format!("{} ({}) {:#}", "unreachable".red(), provider, e)),
        None => (false, format!("{} after {}s", "timed out".red(), timeout.as_secs())),
    }
}
