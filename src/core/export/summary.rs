//! Export summary and reporting
//!
//! This module defines the counters accumulated over a run and the record of
//! rows skipped under the row-skipping error policy.

use crate::domain::ProductId;
use std::time::Duration;

/// Summary of an export run
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Rows reported by the count query
    pub total_rows: u64,

    /// Rows per page
    pub page_size: u64,

    /// Pages fetched and fully processed
    pub pages_fetched: u64,

    /// Products decoded and emitted
    pub products_processed: u64,

    /// Products skipped after a decode or serialization failure
    pub products_skipped: u64,

    /// Events written to the sink
    pub events_emitted: u64,

    /// Wall-clock duration of the run
    pub duration: Duration,

    /// Rows skipped, with the reason
    pub errors: Vec<SkippedRow>,

    /// Events were not written to the sink
    pub dry_run: bool,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a skipped row
    pub fn add_skipped(&mut self, skipped: SkippedRow) {
        self.products_skipped += 1;
        self.errors.push(skipped);
    }

    /// Whether every fetched row was processed
    pub fn is_successful(&self) -> bool {
        self.products_skipped == 0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_rows = self.total_rows,
            page_size = self.page_size,
            pages = self.pages_fetched,
            products = self.products_processed,
            skipped = self.products_skipped,
            events = self.events_emitted,
            duration_secs = format!("{:.2}", self.duration.as_secs_f64()),
            dry_run = self.dry_run,
            "Export completed"
        );

        if !self.errors.is_empty() {
            tracing::warn!(
                skipped_count = self.errors.len(),
                "Export completed with skipped rows"
            );
            for skipped in &self.errors {
                tracing::warn!(
                    product_id = %skipped.product_id,
                    stage = ?skipped.stage,
                    message = %skipped.message,
                    "Skipped row"
                );
            }
        }
    }
}

/// Pipeline stage where a row failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// Payload decoding
    Decode,
    /// Event serialization
    Emit,
}

/// A row that was skipped
#[derive(Debug, Clone)]
pub struct SkippedRow {
    pub product_id: ProductId,
    pub stage: FailureStage,
    pub message: String,
}

impl SkippedRow {
    /// Create a skipped-row record
    pub fn new(product_id: ProductId, stage: FailureStage, message: impl Into<String>) -> Self {
        Self {
            product_id,
            stage,
            message: message.into(),
        }
    }
}
