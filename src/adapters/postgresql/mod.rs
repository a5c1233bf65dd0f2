//! PostgreSQL record store integration
//!
//! This module reads product rows from the PostgreSQL source table.

pub mod adapter;
pub mod client;

pub use adapter::PostgreSQLStore;
pub use client::PostgreSQLClient;
