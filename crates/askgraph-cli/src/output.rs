//! Terminal output formatting.

use std::time::Duration;

use askgraph_core::{GeneratedQuery, NormalizedValue, PipelineObserver, Stage};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Prints each pipeline stage as it completes, with a spinner in between.
pub struct ConsoleObserver {
    spinner: ProgressBar,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        Self { spinner }
    }

    /// Clear the spinner line.
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    fn print(&self, text: String) {
        self.spinner.suspend(|| println!("{}", text));
    }
}

impl PipelineObserver for ConsoleObserver {
    fn on_stage(&mut self, stage: Stage) {
        match stage {
            Stage::Done | Stage::Idle => self.spinner.finish_and_clear(),
            _ => {
                self.spinner.set_message(stage.progress_message());
                self.spinner.enable_steady_tick(Duration::from_millis(80));
            }
        }
    }

    fn on_query(&mut self, query: &GeneratedQuery) {
        self.print(format!("{}\n{}\n", "Generated Cypher:".bold(), query.as_str().cyan()));
    }

    fn on_result(&mut self, value: &NormalizedValue) {
        self.print(format!(
            "{}\n{} {}\n",
            "Query executed successfully!".green(),
            "Output:".bold(),
            format_value(value)
        ));
    }

    fn on_execution_failed(&mut self, error: &str) {
        self.print(format!("{} {}\n", "Query execution failed:".red().bold(), error.red()));
    }

    fn on_summary(&mut self, summary: &str) {
        self.print(format!("{} {}", "Answer:".bold(), summary));
    }
}

/// Render a result for the terminal: scalars inline, rows one per line.
pub fn format_value(value: &NormalizedValue) -> String {
    match value {
        NormalizedValue::Values(values) if values.is_empty() => "(no rows)".dimmed().to_string(),
        NormalizedValue::Rows(rows) if rows.is_empty() => "(no rows)".dimmed().to_string(),
        NormalizedValue::Values(_) => value.render(),
        NormalizedValue::Rows(rows) => {
            let lines: Vec<String> = rows
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    format!(
                        "  {}: {}",
                        (i + 1).to_string().dimmed(),
                        serde_json::Value::Object(row.clone())
                    )
                })
                .collect();
            format!("\n{}", lines.join("\n"))
        }
    }
}
