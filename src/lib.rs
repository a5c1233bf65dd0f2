// Pricefan - product price export to JSON lines
// Copyright (c) 2025 Pricefan Contributors
// Licensed under the MIT License

//! # Pricefan - product price export
//!
//! Pricefan reads the `produto` table of a PostgreSQL catalogue page by page,
//! decodes the per-branch pricing payload of every product and writes one JSON
//! event per (product, branch) pair to stdout.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (decode, flatten, export)
//! - [`adapters`] - Record stores (PostgreSQL, in-memory)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Environment-driven configuration
//! - [`logging`] - Structured logging on stderr
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pricefan::adapters::postgresql::{PostgreSQLClient, PostgreSQLStore};
//! use pricefan::config::load_config;
//! use pricefan::core::export::ExportCoordinator;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config()?;
//!
//!     let client = PostgreSQLClient::new(config.database)?;
//!     let store = PostgreSQLStore::connect(client).await?;
//!
//!     let mut coordinator = ExportCoordinator::new(store, std::io::stdout(), config.export);
//!     let summary = coordinator.execute_export().await?;
//!
//!     eprintln!("Exported {} events", summary.events_emitted);
//!     Ok(())
//! }
//! ```
//!
//! ## Output
//!
//! Each line is one event:
//!
//! ```text
//! {"filial":7,"produto":42,"campanhas":[{"preco":{"valor":19.9,"formaPagamento":1,"tipoPreco":2},"campanha":{"nome":"PROMO","inicioVigencia":"2024-01-01","fimVigencia":"2024-01-31"}}],"precoLivro":null}
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`], carrying a
//! [`domain::PricefanError`] that maps to the process exit code.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
