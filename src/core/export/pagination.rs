//! Page planning
//!
//! The source table is read in fixed-size pages: `ceil(count / page_size)`
//! pages, page `n` starting at offset `n * page_size`. Given a table that does
//! not change during the run, the pages cover every row exactly once.

use crate::domain::{PricefanError, Result};

/// One page of the source table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Zero-based page index
    pub index: u64,
    /// First row of the page
    pub offset: u64,
    /// Maximum number of rows in the page
    pub limit: u64,
}

/// Fixed-size page layout over a known row count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    total_rows: u64,
    page_size: u64,
}

impl PagePlan {
    /// Create a plan
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `page_size` is zero.
    pub fn new(total_rows: u64, page_size: u64) -> Result<Self> {
        if page_size == 0 {
            return Err(PricefanError::Configuration(
                "page size must be > 0".to_string(),
            ));
        }
        Ok(Self {
            total_rows,
            page_size,
        })
    }

    /// Rows counted when the plan was made
    pub fn total_rows(&self) -> u64 {
        self.total_rows
    }

    /// Rows per page
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of pages
    pub fn page_count(&self) -> u64 {
        self.total_rows.div_ceil(self.page_size)
    }

    /// Iterate the pages in order
    pub fn pages(&self) -> impl Iterator<Item = Page> + '_ {
        (0..self.page_count()).map(move |index| Page {
            index,
            offset: index * self.page_size,
            limit: self.page_size,
        })
    }
}
