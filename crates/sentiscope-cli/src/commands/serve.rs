//! Serve command - run the dashboard API.

use colored::Colorize;

use crate::server::{app, state::AppState};

use super::{build_client, ClientOptions};

pub fn run(port: u16, no_open: bool, options: &ClientOptions) -> Result<(), Box<dyn std::error::Error>> {
    let client = build_client(options)?;
    let config = client.config().clone();
    let state = AppState::new(client);

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting dashboard API at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Classifier: {}", options.classifier);
    println!("  Model: {}", config.model);
    println!(
        "  Rate limit: {} calls / {}s",
        config.rate_limit,
        config.rate_window.as_secs()
    );
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if !no_open {
        if let Err(e) = open::that(format!("{}/api/summary", url)) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
            println!();
            println!("{}", "Shutting down...".yellow());
            std::process::exit(0);
        });

        app::run_server(state, port).await
    })?;

    Ok(())
}
