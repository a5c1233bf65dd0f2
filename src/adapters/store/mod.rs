//! Record store abstraction layer
//!
//! Implementations: [`crate::adapters::postgresql::PostgreSQLStore`] for real
//! runs and [`crate::adapters::memory::MemoryStore`] for tests.

pub mod traits;

pub use traits::{RecordStore, RowStream};
