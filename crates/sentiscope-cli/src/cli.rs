//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sentiscope: sentiment analysis for text and CSV files
#[derive(Parser)]
#[command(name = "sentiscope")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Classifier backend
    #[arg(long, global = true, default_value = "huggingface")]
    pub classifier: ClassifierChoice,

    /// Model to use (overrides SENTISCOPE_MODEL)
    #[arg(long, global = true)]
    pub model: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single piece of text
    Analyze {
        /// Text to analyze
        #[arg(value_name = "TEXT")]
        text: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze every row of a CSV file with a `text` column
    Batch {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the dashboard API
    Serve {
        /// Port for web server
        #[arg(short, long, default_value = "3142")]
        port: u16,

        /// Don't automatically open browser
        #[arg(long)]
        no_open: bool,
    },
}

/// Classifier backend choice
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ClassifierChoice {
    /// Hugging Face inference API (reads HUGGINGFACE_API_KEY)
    #[default]
    HuggingFace,
    /// Offline keyword classifier
    Mock,
}

impl std::str::FromStr for ClassifierChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(ClassifierChoice::HuggingFace),
            "mock" | "offline" => Ok(ClassifierChoice::Mock),
            _ => Err(format!(
                "Unknown classifier: {}. Use: huggingface or mock.",
                s
            )),
        }
    }
}

impl std::fmt::Display for ClassifierChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifierChoice::HuggingFace => write!(f, "huggingface"),
            ClassifierChoice::Mock => write!(f, "mock"),
        }
    }
}
