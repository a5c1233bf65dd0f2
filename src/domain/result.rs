//! Result type alias for Pricefan

use super::errors::PricefanError;

/// Result type alias for Pricefan operations
///
/// # Examples
///
/// ```
/// use pricefan::domain::result::Result;
/// use pricefan::domain::errors::PricefanError;
///
/// fn example_function() -> Result<u64> {
///     Ok(1500)
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PricefanError::Configuration("DB_HOST is not set".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PricefanError>;
