//! Export coordinator - drives the paged export
//!
//! The coordinator counts the source table, walks the page plan in order and
//! pushes every row through decode, flatten and emit. Rows, pages and events are
//! handled strictly one at a time, so output order follows product id order and
//! branch order within a product.

use crate::adapters::store::RecordStore;
use crate::config::{ErrorPolicy, ExportConfig};
use crate::core::export::emitter::Emitter;
use crate::core::export::pagination::{Page, PagePlan};
use crate::core::export::summary::{ExportSummary, FailureStage, SkippedRow};
use crate::core::transform::flatten_product;
use crate::domain::{EmitError, PricefanError, RawProduct, Result};
use futures::TryStreamExt;
use std::io::Write;
use std::time::Instant;

/// Lifecycle of one export run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportPhase {
    /// Created, nothing fetched yet
    Init,
    /// Running the count query
    Counting,
    /// Processing the page with this zero-based index
    Paging { page: u64 },
    /// Every page has been processed
    Done,
}

/// Export coordinator
pub struct ExportCoordinator<S: RecordStore, W: Write> {
    store: S,
    emitter: Emitter<W>,
    config: ExportConfig,
    phase: ExportPhase,
}

impl<S: RecordStore, W: Write> ExportCoordinator<S, W> {
    /// Create a coordinator reading from `store` and writing to `sink`
    pub fn new(store: S, sink: W, config: ExportConfig) -> Self {
        Self {
            store,
            emitter: Emitter::new(sink),
            config,
            phase: ExportPhase::Init,
        }
    }

    /// Current phase
    pub fn phase(&self) -> ExportPhase {
        self.phase
    }

    /// The record store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the coordinator and return the sink
    pub fn into_sink(self) -> W {
        self.emitter.into_inner()
    }

    /// Execute the export
    ///
    /// 1. Counts the rows of the source table
    /// 2. Fetches each page in order
    /// 3. Decodes, flattens and emits every row of the page
    /// 4. Flushes the sink after each page
    ///
    /// # Errors
    ///
    /// Store failures and sink write failures always abort the run. Decode and
    /// serialization failures abort it under [`ErrorPolicy::FailFast`] and are
    /// recorded in the summary under [`ErrorPolicy::SkipRow`].
    pub async fn execute_export(&mut self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();
        summary.page_size = self.config.page_size;
        summary.dry_run = self.config.dry_run;

        tracing::info!(
            store = %self.store.describe(),
            page_size = self.config.page_size,
            error_policy = %self.config.error_policy,
            dry_run = self.config.dry_run,
            "Starting export"
        );

        self.phase = ExportPhase::Counting;
        let total_rows = self.store.count().await?;
        summary.total_rows = total_rows;

        let plan = PagePlan::new(total_rows, self.config.page_size)?;
        let page_count = plan.page_count();

        tracing::info!(
            total_rows = total_rows,
            page_size = plan.page_size(),
            pages = page_count,
            "Planned export"
        );

        for page in plan.pages() {
            self.phase = ExportPhase::Paging { page: page.index };
            self.process_page(page, &mut summary).await?;
            summary.pages_fetched += 1;

            crate::log_page_complete!(
                page.index,
                page_count,
                summary.events_emitted,
                summary.products_processed
            );
        }

        self.phase = ExportPhase::Done;
        Ok(summary.with_duration(start_time.elapsed()))
    }

    async fn process_page(&mut self, page: Page, summary: &mut ExportSummary) -> Result<()> {
        tracing::debug!(
            page = page.index,
            limit = page.limit,
            offset = page.offset,
            "Fetching page"
        );

        let mut rows = self.store.fetch_page(page.limit, page.offset).await?;

        while let Some(row) = rows.try_next().await? {
            let started = Instant::now();
            let product_id = row.id;

            let outcome = self.process_row(&row);
            summary.events_emitted = self.emitter.emitted();

            match outcome {
                Ok(events) => {
                    summary.products_processed += 1;
                    tracing::debug!(
                        product_id = %product_id,
                        events = events,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Processed product"
                    );
                }
                Err(error) => {
                    let stage = match skippable_stage(&error) {
                        Some(stage) if self.config.error_policy == ErrorPolicy::SkipRow => stage,
                        _ => {
                            crate::log_error_with_context!(
                                &error,
                                format!("product {product_id}, aborting export")
                            );
                            return Err(error);
                        }
                    };

                    tracing::warn!(
                        product_id = %product_id,
                        error = %error,
                        "Skipping product"
                    );
                    summary.add_skipped(SkippedRow::new(product_id, stage, error.to_string()));
                }
            }
        }

        self.emitter.flush()?;
        Ok(())
    }

    /// Decode, flatten and emit one row, returning the number of events written
    fn process_row(&mut self, row: &RawProduct) -> Result<u64> {
        let product = row.decode()?;

        let mut emitted = 0;
        for event in flatten_product(product) {
            self.emitter.emit(&event)?;
            emitted += 1;
        }
        Ok(emitted)
    }
}

/// Stage of a row failure that the row-skipping policy may skip
///
/// Sink write failures are excluded: a failing sink fails every later row too.
fn skippable_stage(error: &PricefanError) -> Option<FailureStage> {
    match error {
        PricefanError::Decode(_) => Some(FailureStage::Decode),
        PricefanError::Emit(EmitError::SerializationFailed(_)) => Some(FailureStage::Emit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{MemoryStore, PageRequest};
    use crate::adapters::store::RowStream;
    use crate::domain::StoreError;
    use async_trait::async_trait;
    use futures::StreamExt;

    fn config(page_size: u64) -> ExportConfig {
        ExportConfig {
            page_size,
            ..ExportConfig::default()
        }
    }

    fn branches(ids: &[i64]) -> String {
        let branches: Vec<String> = ids
            .iter()
            .map(|id| format!(r#"{{"idFilial":{id},"melhoresPrecos":[]}}"#))
            .collect();
        format!("[{}]", branches.join(","))
    }

    fn output_lines(sink: Vec<u8>) -> Vec<serde_json::Value> {
        String::from_utf8(sink)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_phases() {
        let store = MemoryStore::new(vec![RawProduct::new(1, branches(&[1]))]);
        let mut coordinator = ExportCoordinator::new(store, Vec::new(), config(10));
        assert_eq!(coordinator.phase(), ExportPhase::Init);

        coordinator.execute_export().await.unwrap();
        assert_eq!(coordinator.phase(), ExportPhase::Done);
    }

    #[tokio::test]
    async fn test_empty_table() {
        let store = MemoryStore::new(Vec::new());
        let mut coordinator = ExportCoordinator::new(store, Vec::new(), config(1500));

        let summary = coordinator.execute_export().await.unwrap();
        assert_eq!(summary.total_rows, 0);
        assert_eq!(summary.pages_fetched, 0);
        assert_eq!(summary.events_emitted, 0);
        assert!(coordinator.store().page_requests().is_empty());
        assert!(coordinator.into_sink().is_empty());
    }

    #[tokio::test]
    async fn test_counters_match_output() {
        let store = MemoryStore::new(vec![
            RawProduct::new(1, branches(&[10, 11])),
            RawProduct::new(2, "[]"),
            RawProduct::new(3, branches(&[12])),
        ]);
        let mut coordinator = ExportCoordinator::new(store, Vec::new(), config(2));

        let summary = coordinator.execute_export().await.unwrap();
        assert_eq!(summary.pages_fetched, 2);
        assert_eq!(summary.products_processed, 3);
        assert_eq!(summary.events_emitted, 3);
        assert_eq!(
            coordinator.store().page_requests(),
            vec![
                PageRequest { limit: 2, offset: 0 },
                PageRequest { limit: 2, offset: 2 },
            ]
        );

        let lines = output_lines(coordinator.into_sink());
        let pairs: Vec<(i64, i64)> = lines
            .iter()
            .map(|l| (l["produto"].as_i64().unwrap(), l["filial"].as_i64().unwrap()))
            .collect();
        assert_eq!(pairs, vec![(1, 10), (1, 11), (3, 12)]);
    }

    #[tokio::test]
    async fn test_fail_fast_stops_at_malformed_row() {
        let store = MemoryStore::new(vec![
            RawProduct::new(1, branches(&[1])),
            RawProduct::new(2, "{not json"),
            RawProduct::new(3, branches(&[3])),
        ]);
        let mut coordinator = ExportCoordinator::new(store, Vec::new(), config(10));

        let err = coordinator.execute_export().await.unwrap_err();
        assert!(matches!(err, PricefanError::Decode(_)));
        assert_eq!(coordinator.phase(), ExportPhase::Paging { page: 0 });

        let lines = output_lines(coordinator.into_sink());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["produto"], 1);
    }

    #[tokio::test]
    async fn test_skip_row_continues() {
        let store = MemoryStore::new(vec![
            RawProduct::new(1, branches(&[1])),
            RawProduct::new(2, r#"[{"idFilial":"x"}]"#),
            RawProduct::new(3, branches(&[3])),
        ]);
        let export_config = ExportConfig {
            page_size: 10,
            error_policy: ErrorPolicy::SkipRow,
            dry_run: false,
        };
        let mut coordinator = ExportCoordinator::new(store, Vec::new(), export_config);

        let summary = coordinator.execute_export().await.unwrap();
        assert_eq!(summary.products_processed, 2);
        assert_eq!(summary.products_skipped, 1);
        assert_eq!(summary.events_emitted, 2);
        assert_eq!(summary.errors[0].product_id.value(), 2);
        assert_eq!(summary.errors[0].stage, FailureStage::Decode);
        assert_eq!(output_lines(coordinator.into_sink()).len(), 2);
    }

    struct BrokenStore;

    #[async_trait]
    impl RecordStore for BrokenStore {
        async fn count(&self) -> Result<u64> {
            Ok(2)
        }

        async fn fetch_page(&self, _page_size: u64, _offset: u64) -> Result<RowStream> {
            let rows: Vec<Result<RawProduct>> = vec![
                Ok(RawProduct::new(1, "[]")),
                Err(StoreError::RowReadFailed("connection reset".to_string()).into()),
            ];
            Ok(futures::stream::iter(rows).boxed())
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    #[tokio::test]
    async fn test_store_error_is_fatal_under_skip_row() {
        let export_config = ExportConfig {
            page_size: 10,
            error_policy: ErrorPolicy::SkipRow,
            dry_run: false,
        };
        let mut coordinator = ExportCoordinator::new(BrokenStore, Vec::new(), export_config);

        let err = coordinator.execute_export().await.unwrap_err();
        assert!(matches!(err, PricefanError::Store(StoreError::RowReadFailed(_))));
    }

    #[test]
    fn test_skippable_stages() {
        let decode = PricefanError::from(crate::domain::DecodeError::MalformedPayload {
            product_id: crate::domain::ProductId::new(1),
            reason: "eof".to_string(),
        });
        let serialize = PricefanError::from(EmitError::SerializationFailed("nan".to_string()));
        let write = PricefanError::from(EmitError::WriteFailed("broken pipe".to_string()));
        let store = PricefanError::from(StoreError::RowReadFailed("reset".to_string()));

        assert_eq!(skippable_stage(&decode), Some(FailureStage::Decode));
        assert_eq!(skippable_stage(&serialize), Some(FailureStage::Emit));
        assert_eq!(skippable_stage(&write), None);
        assert_eq!(skippable_stage(&store), None);
    }

    #[tokio::test]
    async fn test_summary_counts_events_written_by_emitter() {
        let store = MemoryStore::new(vec![
            RawProduct::new(1, branches(&[1, 2, 3])),
            RawProduct::new(2, "oops"),
            RawProduct::new(3, branches(&[4])),
        ]);
        let export_config = ExportConfig {
            page_size: 2,
            error_policy: ErrorPolicy::SkipRow,
            dry_run: false,
        };
        let mut coordinator = ExportCoordinator::new(store, Vec::new(), export_config);

        let summary = coordinator.execute_export().await.unwrap();
        assert_eq!(summary.events_emitted, 4);
        assert_eq!(output_lines(coordinator.into_sink()).len(), 4);
    }
}
