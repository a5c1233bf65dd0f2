//! Validate config command implementation
//!
//! Loads the configuration, connects to the record store and counts the source
//! table without exporting anything.

use crate::adapters::postgresql::{PostgreSQLClient, PostgreSQLStore};
use crate::adapters::store::RecordStore;
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Only check the configuration, do not connect
    #[arg(long)]
    pub offline: bool,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!("Validating configuration");

        let config = match load_config() {
            Ok(c) => {
                println!("✅ Configuration loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(e.exit_code());
            }
        };

        if let Err(e) = config.validate() {
            println!("❌ Configuration validation failed");
            println!("   Error: {e}");
            return Ok(2);
        }

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Database: {}", config.database.connection_summary());
        println!("  Table: {}", config.database.table);
        println!("  Page Size: {}", config.export.page_size);
        println!("  Error Policy: {}", config.export.error_policy);
        println!("  Dry Run: {}", config.export.dry_run);

        if self.offline {
            return Ok(0);
        }

        println!();
        let client = PostgreSQLClient::new(config.database)?;
        if let Err(e) = client.test_connection().await {
            println!("❌ Failed to connect to {}", client.connection_string_safe());
            println!("   Error: {e}");
            return Ok(e.exit_code());
        }

        let store = match PostgreSQLStore::connect(client).await {
            Ok(store) => store,
            Err(e) => {
                println!("❌ Failed to connect to record store");
                println!("   Error: {e}");
                return Ok(e.exit_code());
            }
        };
        println!("✅ Connected to {}", store.describe());

        match store.count().await {
            Ok(total) => {
                println!("✅ Source table holds {total} rows");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to count source table");
                println!("   Error: {e}");
                Ok(e.exit_code())
            }
        }
    }
}
