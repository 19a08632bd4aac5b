//! Report aggregation module.
//!
//! Derives summary statistics from record snapshots and tracks report
//! jobs through their lifecycle:
//! - Verdict counts, accuracy, false-positive rate
//! - Pending -> Generating -> {Completed, Failed} job state machine
//! - Dashboard and analytics aggregates

pub mod job;
pub mod overview;
pub mod summary;

pub use job::*;
pub use overview::*;
pub use summary::*;
