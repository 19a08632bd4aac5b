//! FactLens Core - In-memory content-moderation record service
//!
//! This crate provides the record-keeping core for the FactLens
//! misinformation-detection product. The implementation prioritizes:
//!
//! 1. **Ordering** - Insertion order is the canonical record ordering;
//!    queries and aggregates never re-sort
//! 2. **Logging** - Every mutation and query logged with full context
//! 3. **Isolation** - A failed report job never corrupts the store or
//!    other jobs
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `record` - Moderation record models and the in-memory store
//! - `query` - Composite filter evaluation over store snapshots
//! - `report` - Summary aggregation, report job lifecycle, dashboard metrics
//! - `logging` - Structured logging with store/record/job context
//! - `error` - Crate-wide error taxonomy
//!
//! ## Concurrency
//!
//! Stores and registries are instance-scoped, each guarding its mutable
//! state with one RwLock. Mutations serialize on the write lock; reads
//! copy a snapshot under the read lock and release it before returning,
//! so a query or aggregation is unaffected by mutations that begin after
//! it does. Nothing here blocks on I/O.

pub mod error;
pub mod logging;
pub mod query;
pub mod record;
pub mod report;

pub use error::{Error, Result};
pub use logging::LogContext;
pub use query::{run_query, FilterRequest, RecordFilter, SourceFilter, VerdictFilter};
pub use record::{ConfidenceBand, ModerationRecord, RecordDraft, RecordStore, Verdict};
pub use report::{
    overview, source_breakdown, summarize, verdict_distribution, OverviewMetrics, RecordSource,
    ReportJob, ReportKind, ReportRegistry, ReportStatus, ReportSummary, SourceBreakdown,
    VerdictCounts, VerdictShare,
};

/// Initialize the process-wide logger.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .try_init();
}
