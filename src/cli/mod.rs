//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Pricefan using clap.
//! Running without a subcommand performs the export.

pub mod commands;

use crate::config::LogFormat;
use clap::{Parser, Subcommand};

/// Pricefan - product price export to JSON lines
#[derive(Parser, Debug)]
#[command(name = "pricefan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info", env = "PRICEFAN_LOG_LEVEL")]
    pub log_level: String,

    /// Log format (text or json)
    #[arg(long, global = true, default_value = "text", env = "PRICEFAN_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Export options
    #[command(flatten)]
    pub export: commands::export::ExportArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate configuration and check the record store
    ValidateConfig(commands::validate::ValidateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_arguments_exports() {
        let cli = Cli::parse_from(["pricefan"]);
        assert!(cli.command.is_none());
        assert!(cli.export.table.is_none());
        assert!(cli.export.page_size.is_none());
        assert!(!cli.export.continue_on_error);
        assert!(!cli.export.dry_run);
    }

    #[test]
    fn test_cli_parse_export_overrides() {
        let cli = Cli::parse_from([
            "pricefan",
            "--table",
            "catalogo.produto",
            "--page-size",
            "200",
            "--continue-on-error",
            "--dry-run",
        ]);
        assert_eq!(cli.export.table.as_deref(), Some("catalogo.produto"));
        assert_eq!(cli.export.page_size, Some(200));
        assert!(cli.export.continue_on_error);
        assert!(cli.export.dry_run);
    }

    #[test]
    fn test_cli_parse_with_log_options() {
        let cli = Cli::parse_from(["pricefan", "--log-level", "debug", "--log-format", "json"]);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_cli_rejects_invalid_page_size() {
        assert!(Cli::try_parse_from(["pricefan", "--page-size", "many"]).is_err());
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["pricefan", "validate-config"]);
        assert!(matches!(cli.command, Some(Commands::ValidateConfig(_))));
    }
}
