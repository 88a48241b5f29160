//! Sentiscope CLI - sentiment analysis for text and CSV files.

mod cli;
mod commands;
mod logging;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = commands::ClientOptions {
        classifier: cli.classifier,
        model: cli.model,
    };

    let result = match cli.command {
        Commands::Analyze { text, json } => commands::analyze::run(text, json, &options),

        Commands::Batch { file, json } => commands::batch::run(file, json, &options, cli.verbose),

        Commands::Serve { port, no_open } => commands::serve::run(port, no_open, &options),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
