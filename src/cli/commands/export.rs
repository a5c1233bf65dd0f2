//! Export command implementation
//!
//! Streams every product of the source table to stdout as JSON lines.

use crate::adapters::postgresql::{PostgreSQLClient, PostgreSQLStore};
use crate::config::{load_config, ErrorPolicy, PricefanConfig};
use crate::core::export::{ExportCoordinator, ExportSummary};
use crate::domain::Result;
use clap::Args;
use std::io::{self, BufWriter, Write};

/// Arguments for the export
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Override the source table
    #[arg(long)]
    pub table: Option<String>,

    /// Override the number of rows fetched per page
    #[arg(long)]
    pub page_size: Option<u64>,

    /// Skip products that fail to decode or emit instead of aborting
    #[arg(long)]
    pub continue_on_error: bool,

    /// Run the pipeline without writing events to stdout
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Execute the export
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("{e}");
                return Ok(e.exit_code());
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        match run_export(config).await {
            Ok(summary) => {
                summary.log_summary();
                Ok(0)
            }
            Err(e) => {
                crate::log_error_with_context!(
                    &e,
                    format!("export failed, exit code {}", e.exit_code())
                );
                eprintln!("Export failed: {e}");
                Ok(e.exit_code())
            }
        }
    }

    /// Apply command-line overrides on top of the environment settings
    pub fn apply_overrides(&self, config: &mut PricefanConfig) {
        if let Some(table) = &self.table {
            tracing::info!(table = %table, "Overriding table from CLI");
            config.database.table = table.clone();
        }

        if let Some(page_size) = self.page_size {
            tracing::info!(page_size, "Overriding page size from CLI");
            config.export.page_size = page_size;
        }

        if self.continue_on_error {
            tracing::info!("Skipping failed products from CLI");
            config.export.error_policy = ErrorPolicy::SkipRow;
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.export.dry_run = true;
        }
    }
}

async fn run_export(config: PricefanConfig) -> Result<ExportSummary> {
    let client = PostgreSQLClient::new(config.database)?;
    let store = PostgreSQLStore::connect(client).await?;

    if config.export.dry_run {
        tracing::info!("Dry run mode enabled - no events will be written");
        let mut coordinator = ExportCoordinator::new(store, io::sink(), config.export);
        return coordinator.execute_export().await;
    }

    let sink = BufWriter::new(io::stdout().lock());
    let mut coordinator = ExportCoordinator::new(store, sink, config.export);
    let summary = coordinator.execute_export().await?;
    coordinator
        .into_sink()
        .flush()
        .map_err(crate::domain::EmitError::from)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_with;
    use std::collections::HashMap;

    fn config() -> PricefanConfig {
        let vars = HashMap::from([
            ("DB_HOST", "localhost"),
            ("DB_PORT", "5432"),
            ("DB_DATABASE", "catalogo"),
            ("DB_USERNAME", "exporter"),
            ("DB_PASSWORD", "secret"),
        ]);
        load_config_with(|key| vars.get(key).map(|v| v.to_string())).unwrap()
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut config = config();
        ExportArgs::default().apply_overrides(&mut config);

        assert_eq!(config.database.table, "produto");
        assert_eq!(config.export.page_size, 1500);
        assert_eq!(config.export.error_policy, ErrorPolicy::FailFast);
        assert!(!config.export.dry_run);
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = config();
        let args = ExportArgs {
            table: Some("public.produto".to_string()),
            page_size: Some(10),
            continue_on_error: true,
            dry_run: true,
        };
        args.apply_overrides(&mut config);

        assert_eq!(config.database.table, "public.produto");
        assert_eq!(config.export.page_size, 10);
        assert_eq!(config.export.error_policy, ErrorPolicy::SkipRow);
        assert!(config.export.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let mut config = config();
        let args = ExportArgs {
            table: Some("produto; DROP TABLE produto".to_string()),
            ..ExportArgs::default()
        };
        args.apply_overrides(&mut config);
        assert!(config.validate().is_err());
    }
}
