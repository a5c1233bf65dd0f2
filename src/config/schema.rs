//! Configuration schema types
//!
//! This module defines the configuration structure for Pricefan. Values come
//! from the environment (see [`crate::config::loader`]) and may be overridden
//! by command-line flags before validation.

use crate::config::SecretString;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Default source table
pub const DEFAULT_TABLE: &str = "produto";

/// Default number of rows fetched per page
pub const DEFAULT_PAGE_SIZE: u64 = 1500;

/// How the pipeline reacts to a row that fails to decode or emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort the run on the first failure
    #[default]
    FailFast,
    /// Log the failure, count the row as skipped and continue
    SkipRow,
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail-fast" | "fail_fast" | "failfast" => Ok(Self::FailFast),
            "skip-row" | "skip_row" | "skip" | "continue" => Ok(Self::SkipRow),
            _ => Err(format!(
                "Invalid error policy '{s}'. Expected 'fail-fast' or 'skip-row'"
            )),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::FailFast => write!(f, "fail-fast"),
            ErrorPolicy::SkipRow => write!(f, "skip-row"),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "Invalid log format '{s}'. Expected 'text' or 'json'"
            )),
        }
    }
}

/// Main Pricefan configuration
#[derive(Debug, Clone)]
pub struct PricefanConfig {
    /// Record store connection settings
    pub database: DatabaseConfig,

    /// Export pipeline settings
    pub export: ExportConfig,
}

impl PricefanConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<(), String> {
        self.database.validate()?;
        self.export.validate()?;
        Ok(())
    }
}

/// PostgreSQL record store configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Server host name or address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Database name
    pub database: String,

    /// User name
    pub username: String,

    /// Password, zeroized on drop
    pub password: SecretString,

    /// Source table holding `id` and `json_filial`
    pub table: String,

    /// Connection timeout in seconds
    pub connect_timeout_seconds: u64,
}

impl DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("database host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("database port must be > 0".to_string());
        }

        if self.database.trim().is_empty() {
            return Err("database name cannot be empty".to_string());
        }

        if self.username.trim().is_empty() {
            return Err("database username cannot be empty".to_string());
        }

        // The table name is interpolated into SQL, so only plain identifiers pass.
        let identifier = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)?$")
            .map_err(|e| e.to_string())?;
        if !identifier.is_match(&self.table) {
            return Err(format!(
                "Invalid table name '{}'. Expected an identifier such as 'produto' or 'public.produto'",
                self.table
            ));
        }

        if self.connect_timeout_seconds == 0 {
            return Err("connect timeout must be > 0".to_string());
        }

        Ok(())
    }

    /// Connection target without credentials, for logs
    pub fn connection_summary(&self) -> String {
        format!(
            "postgresql://{}:***@{}:{}/{}",
            self.username, self.host, self.port, self.database
        )
    }
}

/// Export pipeline configuration
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Rows fetched per page
    pub page_size: u64,

    /// Reaction to row-level decode or emit failures
    pub error_policy: ErrorPolicy,

    /// Run the pipeline without writing events to the sink
    pub dry_run: bool,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("page size must be > 0".to_string());
        }

        // LIMIT/OFFSET are bound as int8
        if self.page_size > i64::MAX as u64 {
            return Err(format!("page size {} is too large", self.page_size));
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            error_policy: ErrorPolicy::default(),
            dry_run: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}
