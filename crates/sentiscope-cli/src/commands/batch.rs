//! Batch command - classify every row of a CSV file.

use std::path::PathBuf;

use colored::Colorize;
use sentiscope::{Analysis, CsvIngest, Session};

use super::analyze::colored_label;
use super::{build_client, ClientOptions};

/// Longest text preview printed per row.
const PREVIEW_CHARS: usize = 60;

pub fn run(
    file: PathBuf,
    json: bool,
    options: &ClientOptions,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let upload = CsvIngest::new().ingest_path(&file)?;

    if !json {
        println!(
            "{} {} ({} rows, {} skipped)",
            "Analyzing".cyan().bold(),
            file.display().to_string().white(),
            upload.total_rows,
            upload.skipped_rows
        );
    }

    let client = build_client(options)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let results = runtime.block_on(client.analyze_batch(&upload.texts))?;

    let mut session = Session::new();
    session.record_batch(Analysis::from_batch(&upload.texts, results));

    if json {
        println!("{}", serde_json::to_string_pretty(session.analyses())?);
        return Ok(());
    }

    if verbose {
        println!();
        for analysis in session.analyses() {
            println!(
                "  {:10} {:+.3}  {}",
                colored_label(analysis.result.label),
                analysis.result.score,
                preview(&analysis.text)
            );
        }
    }

    let summary = session.summary();
    println!();
    println!(
        "Analyzed {} texts ({} positive, {} negative, {} neutral)",
        summary.total.to_string().white().bold(),
        summary.positive.to_string().green(),
        summary.negative.to_string().red(),
        summary.neutral.to_string().bright_black()
    );
    println!("Mean confidence: {:.0}%", summary.mean_confidence * 100.0);

    let remaining = client.rate_limit();
    println!(
        "Rate window: {}/{} calls left",
        remaining.remaining, remaining.limit
    );

    Ok(())
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(PREVIEW_CHARS - 3).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_text() {
        assert_eq!(preview("short"), "short");
        let long = "x".repeat(100);
        let out = preview(&long);
        assert_eq!(out.len(), PREVIEW_CHARS);
        assert!(out.ends_with("..."));
    }
}
