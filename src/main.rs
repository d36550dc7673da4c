mod cli;
mod error;
mod input;
mod models;

use clap::Parser;
use cli::{App, Cli};
use colored::*;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Load environment variables (RUST_LOG may live in .env)
    dotenv::dotenv().ok();

    // Initialize logging on stderr so prompts on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!("Starting BMI calculator with arguments: {:?}", cli);

    let app = App::new(cli).styled(io::stdout().is_terminal());

    let stdin = io::stdin();
    let stdout = io::stdout();
    match app.run(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(report) => {
            info!("Session finished with BMI {}", report.bmi);
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!("Session failed: {:?}", e);
            eprintln!("{}", format!("Error: {}", e).red());
            ExitCode::FAILURE
        },
    }
}
