//! # One-Shot Analysis
//!
//! Analyze a single text without the interactive view and print the label.

use crate::config::Settings;
use crate::repl::models::treatment_for;
use crate::repl::services::SentimentService;
use anyhow::{Context, Result};
use crossterm::style::Stylize;
use std::io::{self, Read, Write};

/// Argument value that means "read the text from stdin"
pub const STDIN_MARKER: &str = "-";

/// Resolve the text argument, reading `input` when it is the stdin marker
pub fn resolve_text<R: Read>(arg: &str, mut input: R) -> Result<String> {
    if arg != STDIN_MARKER {
        return Ok(arg.to_string());
    }

    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    // Drop the newline a shell pipe appends
    Ok(text.trim_end_matches(['\n', '\r']).to_string())
}

/// Format the label line and the length line
pub fn format_result(label: &str, char_count: usize, colored: bool) -> String {
    let label_line = match treatment_for(label) {
        Some(treatment) if colored => format!(
            "{}",
            format!("{} {}", treatment.icon, label).with(treatment.color).bold()
        ),
        Some(treatment) => format!("{} {}", treatment.icon, label),
        None => label.to_string(),
    };
    format!("{label_line}\nText length: {char_count} characters")
}

/// Analyze `text` against the configured endpoint and print the outcome
pub async fn run<W: Write>(settings: &Settings, text: &str, colored: bool, out: &mut W) -> Result<()> {
    let service = SentimentService::new(settings.endpoint.clone())?;
    tracing::info!("One-shot analysis of {} characters", text.chars().count());

    let label = service.analyze(text).await?;
    writeln!(out, "{}", format_result(&label, text.chars().count(), colored))?;
    Ok(())
}

/// Entry point used by `main`: resolves stdin and terminal detection
pub async fn run_stdio(settings: &Settings, text_arg: &str) -> Result<()> {
    let text = resolve_text(text_arg, io::stdin())?;
    let colored = atty::is(atty::Stream::Stdout);
    let mut stdout = io::stdout();
    run(settings, &text, colored, &mut stdout).await
}
