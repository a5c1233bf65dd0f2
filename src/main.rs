// Pricefan - product price export to JSON lines
// Copyright (c) 2025 Pricefan Contributors
// Licensed under the MIT License

use clap::Parser;
use pricefan::cli::{Cli, Commands};
use pricefan::config::LoggingConfig;
use pricefan::logging::init_logging;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let logging_config = LoggingConfig {
        level: cli.log_level.clone(),
        format: cli.log_format,
    };
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(e.exit_code());
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Pricefan - product price export"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        None => cli.export.execute().await,
        Some(Commands::ValidateConfig(args)) => args.execute().await,
    }
}
