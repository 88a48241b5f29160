//! Analyze command - classify a single text.

use colored::Colorize;
use sentiscope::{validate_manual_text, Analysis, SentimentLabel};

use super::{build_client, ClientOptions};

pub fn run(text: String, json: bool, options: &ClientOptions) -> Result<(), Box<dyn std::error::Error>> {
    let text = validate_manual_text(&text)?;

    let client = build_client(options)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(client.analyze_sentiment(&text))?;
    let analysis = Analysis::manual(text, result);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("{}", analysis.text.white());
    println!(
        "{} {}  score {:+.3}  confidence {:.0}%",
        "Sentiment:".cyan().bold(),
        colored_label(analysis.result.label),
        analysis.result.score,
        analysis.result.confidence * 100.0
    );

    Ok(())
}

/// Label text colored by polarity.
pub(crate) fn colored_label(label: SentimentLabel) -> colored::ColoredString {
    match label {
        SentimentLabel::Positive => label.as_str().green().bold(),
        SentimentLabel::Negative => label.as_str().red().bold(),
        SentimentLabel::Neutral => label.as_str().bright_black().bold(),
    }
}
