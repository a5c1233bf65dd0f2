//! In-memory record store
//!
//! Holds rows in product id order and records every page request, which makes
//! pagination behavior observable in tests.

use crate::adapters::store::{RecordStore, RowStream};
use crate::domain::{RawProduct, Result};
use async_trait::async_trait;
use futures::StreamExt;
use std::sync::{Mutex, PoisonError};

/// A `LIMIT`/`OFFSET` request received by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub offset: u64,
}

/// [`RecordStore`] backed by a vector
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<RawProduct>,
    requests: Mutex<Vec<PageRequest>>,
}

impl MemoryStore {
    /// Create a store; rows are sorted by product id
    pub fn new(rows: impl IntoIterator<Item = RawProduct>) -> Self {
        let mut rows: Vec<RawProduct> = rows.into_iter().collect();
        rows.sort_by_key(|row| row.id);
        Self {
            rows,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Page requests received so far, in order
    pub fn page_requests(&self) -> Vec<PageRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn count(&self) -> Result<u64> {
        Ok(self.rows.len() as u64)
    }

    async fn fetch_page(&self, page_size: u64, offset: u64) -> Result<RowStream> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(PageRequest {
                limit: page_size,
                offset,
            });

        let page: Vec<RawProduct> = self
            .rows
            .iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(page_size).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(futures::stream::iter(page.into_iter().map(Ok)).boxed())
    }

    fn describe(&self) -> String {
        format!("memory ({} rows)", self.rows.len())
    }
}
