//! Core business logic for Pricefan.
//!
//! # Modules
//!
//! - [`decode`] - Branch payload decoding
//! - [`transform`] - Flattening products into output events
//! - [`export`] - Page planning, emission and coordination
//!
//! # Export Workflow
//!
//! 1. **Count**: Ask the store for the number of product rows
//! 2. **Page**: Fetch rows ordered by product id, one page at a time
//! 3. **Decode**: Parse the branch payload of each row
//! 4. **Flatten**: Produce one event per branch
//! 5. **Emit**: Write each event as a JSON line and flush after each page
//! 6. **Report**: Log the export summary
//!
//! # Example
//!
//! ```rust
//! use pricefan::adapters::memory::MemoryStore;
//! use pricefan::config::ExportConfig;
//! use pricefan::core::export::ExportCoordinator;
//! use pricefan::domain::RawProduct;
//!
//! # async fn example() -> pricefan::domain::Result<()> {
//! let store = MemoryStore::new(vec![RawProduct::new(1, r#"[{"idFilial":7}]"#)]);
//! let mut coordinator = ExportCoordinator::new(store, Vec::new(), ExportConfig::default());
//!
//! let summary = coordinator.execute_export().await?;
//! assert_eq!(summary.events_emitted, 1);
//! # Ok(())
//! # }
//! ```

pub mod decode;
pub mod export;
pub mod transform;
