//! Configuration management for Pricefan.
//!
//! Configuration is read once at startup from the process environment (a
//! `.env` file in the working directory is honored). Missing or invalid
//! required settings are a fatal startup error.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pricefan::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//!
//! println!("Store: {}", config.database.connection_summary());
//! println!("Table: {}", config.database.table);
//! println!("Page size: {}", config.export.page_size);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`DatabaseConfig`] - record store connection (`DB_*` variables)
//! - [`ExportConfig`] - page size, error policy, dry run (`PRICEFAN_*`)
//! - [`LoggingConfig`] - log level and format, taken from the CLI flags
//!   `--log-level` / `--log-format` (or `PRICEFAN_LOG_LEVEL` / `PRICEFAN_LOG_FORMAT`)
//!
//! # Example `.env`
//!
//! ```bash
//! DB_HOST=localhost
//! DB_PORT=5432
//! DB_DATABASE=catalogo
//! DB_USERNAME=exporter
//! DB_PASSWORD=secret
//! PRICEFAN_PAGE_SIZE=1500
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_with};
pub use schema::{
    DatabaseConfig, ErrorPolicy, ExportConfig, LogFormat, LoggingConfig, PricefanConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
