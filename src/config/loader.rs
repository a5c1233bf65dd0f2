//! Configuration loader reading the process environment
//!
//! Required variables:
//!
//! | Variable      | Meaning          |
//! |---------------|------------------|
//! | `DB_HOST`     | server host      |
//! | `DB_PORT`     | server port      |
//! | `DB_DATABASE` | database name    |
//! | `DB_USERNAME` | user name        |
//! | `DB_PASSWORD` | password (may be empty, must be set) |
//!
//! Optional `PRICEFAN_*` variables tune the export; see [`load_config_with`].
//! A `.env` file is loaded by the binary before this runs.

use super::schema::{
    DatabaseConfig, ErrorPolicy, ExportConfig, PricefanConfig, DEFAULT_TABLE,
};
use super::secret::secret_string;
use crate::domain::errors::PricefanError;
use crate::domain::result::Result;
use std::str::FromStr;

pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_DATABASE: &str = "DB_DATABASE";
pub const DB_USERNAME: &str = "DB_USERNAME";
pub const DB_PASSWORD: &str = "DB_PASSWORD";

pub const PRICEFAN_TABLE: &str = "PRICEFAN_TABLE";
pub const PRICEFAN_PAGE_SIZE: &str = "PRICEFAN_PAGE_SIZE";
pub const PRICEFAN_ERROR_POLICY: &str = "PRICEFAN_ERROR_POLICY";
pub const PRICEFAN_DRY_RUN: &str = "PRICEFAN_DRY_RUN";
pub const PRICEFAN_CONNECT_TIMEOUT_SECONDS: &str = "PRICEFAN_CONNECT_TIMEOUT_SECONDS";

const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 30;

/// Loads configuration from the process environment
///
/// # Errors
///
/// Returns [`PricefanError::Configuration`] if required variables are missing,
/// a value cannot be parsed, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use pricefan::config::load_config;
///
/// let config = load_config().expect("Failed to load config");
/// println!("page size: {}", config.export.page_size);
/// ```
pub fn load_config() -> Result<PricefanConfig> {
    load_config_with(|key| std::env::var(key).ok())
}

/// Loads configuration through an arbitrary variable lookup
///
/// Every missing required variable is reported at once.
///
/// # Examples
///
/// ```
/// use pricefan::config::load_config_with;
/// use std::collections::HashMap;
///
/// let vars = HashMap::from([
///     ("DB_HOST", "localhost"),
///     ("DB_PORT", "5432"),
///     ("DB_DATABASE", "catalogo"),
///     ("DB_USERNAME", "exporter"),
///     ("DB_PASSWORD", "secret"),
///     ("PRICEFAN_PAGE_SIZE", "500"),
/// ]);
///
/// let config = load_config_with(|key| vars.get(key).map(|v| v.to_string())).unwrap();
/// assert_eq!(config.export.page_size, 500);
/// assert_eq!(config.database.table, "produto");
/// ```
pub fn load_config_with<F>(lookup: F) -> Result<PricefanConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut missing_vars = Vec::new();
    let mut required = |key: &str| match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(value) => value,
        None => {
            missing_vars.push(key.to_string());
            String::new()
        }
    };

    let host = required(DB_HOST);
    let port = required(DB_PORT);
    let database = required(DB_DATABASE);
    let username = required(DB_USERNAME);

    // An empty password is legitimate for trust authentication
    let password = match lookup(DB_PASSWORD) {
        Some(value) => value,
        None => {
            missing_vars.push(DB_PASSWORD.to_string());
            String::new()
        }
    };

    if !missing_vars.is_empty() {
        return Err(PricefanError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    let port = parse_value::<u16>(DB_PORT, &port)?;

    let database = DatabaseConfig {
        host,
        port,
        database,
        username,
        password: secret_string(password),
        table: optional(&lookup, PRICEFAN_TABLE).unwrap_or_else(|| DEFAULT_TABLE.to_string()),
        connect_timeout_seconds: match optional(&lookup, PRICEFAN_CONNECT_TIMEOUT_SECONDS) {
            Some(val) => parse_value(PRICEFAN_CONNECT_TIMEOUT_SECONDS, &val)?,
            None => DEFAULT_CONNECT_TIMEOUT_SECONDS,
        },
    };

    let mut export = ExportConfig::default();
    if let Some(val) = optional(&lookup, PRICEFAN_PAGE_SIZE) {
        export.page_size = parse_value(PRICEFAN_PAGE_SIZE, &val)?;
    }
    if let Some(val) = optional(&lookup, PRICEFAN_ERROR_POLICY) {
        export.error_policy = ErrorPolicy::from_str(&val).map_err(PricefanError::Configuration)?;
    }
    if let Some(val) = optional(&lookup, PRICEFAN_DRY_RUN) {
        export.dry_run = parse_value(PRICEFAN_DRY_RUN, &val)?;
    }

    let config = PricefanConfig { database, export };

    config.validate().map_err(|e| {
        PricefanError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_value<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        PricefanError::Configuration(format!("Invalid value '{value}' for {key}: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (DB_HOST, "db.internal"),
            (DB_PORT, "5432"),
            (DB_DATABASE, "catalogo"),
            (DB_USERNAME, "exporter"),
            (DB_PASSWORD, "s3cr3t"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<PricefanConfig> {
        load_config_with(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_load_defaults() {
        let config = load(&base_vars()).unwrap();

        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.password.expose_secret().as_ref(), "s3cr3t");
        assert_eq!(config.database.table, "produto");
        assert_eq!(config.database.connect_timeout_seconds, 30);
        assert_eq!(config.export.page_size, 1500);
        assert_eq!(config.export.error_policy, ErrorPolicy::FailFast);
        assert!(!config.export.dry_run);
    }

    #[test]
    fn test_missing_vars_reported_together() {
        let mut vars = base_vars();
        vars.remove(DB_HOST);
        vars.remove(DB_PASSWORD);

        let err = load(&vars).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, PricefanError::Configuration(_)));
        assert!(message.contains("DB_HOST"));
        assert!(message.contains("DB_PASSWORD"));
    }

    #[test]
    fn test_blank_required_var_is_missing() {
        let mut vars = base_vars();
        vars.insert(DB_DATABASE, "  ");

        let err = load(&vars).unwrap_err();
        assert!(err.to_string().contains("DB_DATABASE"));
    }

    #[test]
    fn test_empty_password_allowed() {
        let mut vars = base_vars();
        vars.insert(DB_PASSWORD, "");

        let config = load(&vars).unwrap();
        assert!(config.database.password.expose_secret().is_empty());
    }

    #[test]
    fn test_invalid_port() {
        let mut vars = base_vars();
        vars.insert(DB_PORT, "postgres");

        let err = load(&vars).unwrap_err();
        assert!(err.to_string().contains("DB_PORT"));
    }

    #[test]
    fn test_optional_overrides() {
        let mut vars = base_vars();
        vars.insert(PRICEFAN_TABLE, "public.produto");
        vars.insert(PRICEFAN_PAGE_SIZE, "250");
        vars.insert(PRICEFAN_ERROR_POLICY, "skip-row");
        vars.insert(PRICEFAN_DRY_RUN, "true");

        let config = load(&vars).unwrap();
        assert_eq!(config.database.table, "public.produto");
        assert_eq!(config.export.page_size, 250);
        assert_eq!(config.export.error_policy, ErrorPolicy::SkipRow);
        assert!(config.export.dry_run);
    }

    #[test]
    fn test_log_variables_left_to_cli() {
        let mut vars = base_vars();
        vars.insert("PRICEFAN_LOG_LEVEL", "loud");
        vars.insert("PRICEFAN_LOG_FORMAT", "xml");

        assert!(load(&vars).is_ok());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut vars = base_vars();
        vars.insert(PRICEFAN_PAGE_SIZE, "0");

        let err = load(&vars).unwrap_err();
        assert!(err.to_string().contains("page size"));
    }
}
