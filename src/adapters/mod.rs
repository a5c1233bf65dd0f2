//! External system integrations for Pricefan.
//!
//! - [`store`] - record store abstraction (trait-based)
//! - [`postgresql`] - PostgreSQL implementation
//! - [`memory`] - in-memory implementation
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate the database driver from
//! the export pipeline, which only sees [`store::RecordStore`].
//!
//! ```rust,no_run
//! use pricefan::adapters::postgresql::{PostgreSQLClient, PostgreSQLStore};
//! use pricefan::adapters::store::RecordStore;
//! use pricefan::config::load_config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let client = PostgreSQLClient::new(config.database)?;
//! let store = PostgreSQLStore::connect(client).await?;
//! println!("{} rows", store.count().await?);
//! # Ok(())
//! # }
//! ```

pub mod memory;
pub mod postgresql;
pub mod store;
