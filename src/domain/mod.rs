//! Domain models and types for Pricefan.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ProductId`], [`BranchId`])
//! - **Pricing payload models** ([`Branch`], [`BestPrice`], [`Price`], [`Campaign`])
//! - **Rows and products** ([`RawProduct`], [`Product`])
//! - **Output events** ([`OutputEvent`], [`CampaignEntry`])
//! - **Error types** ([`PricefanError`], [`StoreError`], [`DecodeError`], [`EmitError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use pricefan::domain::{Branch, BranchId, Product, ProductId};
//!
//! let product = Product::new(
//!     ProductId::new(42),
//!     vec![Branch::new(BranchId::new(7)).with_book_price("25.00")],
//! );
//! assert_eq!(product.branches.len(), 1);
//! ```

pub mod errors;
pub mod event;
pub mod ids;
pub mod product;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{DecodeError, EmitError, PricefanError, StoreError};
pub use event::{CampaignEntry, OutputEvent};
pub use ids::{BranchId, ProductId};
pub use product::{BestPrice, Branch, Campaign, Price, Product, RawProduct};
pub use result::Result;
