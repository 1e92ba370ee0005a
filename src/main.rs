// Userflow - Validated user management over REST or mock fixtures
// Copyright (c) 2025 Userflow Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use userflow::cli::commands::{EXIT_CONFIG, EXIT_FATAL};
use userflow::cli::{Cli, Commands};
use userflow::config::load_logging_config;
use userflow::logging::init_logging;

#[tokio::main]
async fn main() {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let logging_config = match load_logging_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid logging configuration: {e}");
            process::exit(EXIT_CONFIG);
        }
    };

    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_FATAL);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Userflow - validated user management"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    };

    // process::exit skips destructors, so flush the file writer first
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::ValidateConfig(args) => args.execute().await,
        Commands::List(args) => args.execute().await,
        Commands::Get(args) => args.execute().await,
        Commands::Create(args) => args.execute().await,
        Commands::Update(args) => args.execute().await,
        Commands::Delete(args) => args.execute().await,
    }
}
