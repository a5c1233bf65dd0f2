//! Record store abstraction
//!
//! The export pipeline reads products through [`RecordStore`]: a row count and
//! ordered `LIMIT`/`OFFSET` pages. Pages are exposed as lazy row streams so a
//! page never has to be materialized before processing starts.

use crate::domain::{RawProduct, Result};
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Lazy, finite stream of rows for one page
///
/// A stream is consumed once; fetching the same page again needs a new
/// [`RecordStore::fetch_page`] call. A failure while streaming is yielded as an
/// `Err` item.
pub type RowStream = BoxStream<'static, Result<RawProduct>>;

/// Source of product rows
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Total number of rows in the source table
    ///
    /// # Errors
    ///
    /// Returns a store error if the count query fails.
    async fn count(&self) -> Result<u64>;

    /// Fetch up to `page_size` rows starting at `offset`, ordered by product id
    ///
    /// # Errors
    ///
    /// Returns a store error if the page query cannot be started.
    async fn fetch_page(&self, page_size: u64, offset: u64) -> Result<RowStream>;

    /// Human-readable description of the store without credentials
    fn describe(&self) -> String;
}
