//! Export orchestration
//!
//! This module provides the export pipeline driver, including:
//! - Page planning over the counted source table
//! - Event emission as JSON lines
//! - Export coordination and summary reporting

pub mod coordinator;
pub mod emitter;
pub mod pagination;
pub mod summary;

pub use coordinator::{ExportCoordinator, ExportPhase};
pub use emitter::Emitter;
pub use pagination::{Page, PagePlan};
pub use summary::{ExportSummary, FailureStage, SkippedRow};
