//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Text or JSON-formatted logs on stderr
//! - Configurable log levels, overridable through `RUST_LOG`
//! - Progress macros used by the export pipeline
//!
//! # Example
//!
//! ```no_run
//! use pricefan::config::LoggingConfig;
//! use pricefan::logging::init_logging;
//!
//! init_logging(&LoggingConfig::default()).expect("Failed to initialize logging");
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::init_logging;

/// Log the completion of a page
///
/// # Example
///
/// ```no_run
/// use pricefan::log_page_complete;
///
/// log_page_complete!(0u64, 3u64, 1200u64, 1500u64);
/// ```
#[macro_export]
macro_rules! log_page_complete {
    ($page:expr, $page_count:expr, $events:expr, $products:expr) => {
        tracing::info!(
            page = $page,
            final_page = $page_count.saturating_sub(1),
            events = $events,
            products = $products,
            "Page processed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use pricefan::log_error_with_context;
/// use pricefan::domain::PricefanError;
///
/// let error = PricefanError::Configuration("DB_PORT is not a number".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = %$context,
            "Error occurred"
        );
    };
}
