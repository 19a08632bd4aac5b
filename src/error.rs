//! Crate-wide error taxonomy.
//!
//! Every error is recoverable by the caller; none is fatal to the process.
//! Queries never error, and aggregation failures isolate to the single
//! report job they belong to.

use thiserror::Error;

/// Errors returned by the record store, filter boundary, and report registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A record or request failed validation at the boundary.
    #[error("validation failed for {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// No record with the given id exists in the store.
    #[error("record {0} not found")]
    NotFound(u64),

    /// No report job with the given id exists in the registry.
    #[error("report job {0} not found")]
    JobNotFound(String),

    /// A report job transition was attempted from a state that does not
    /// permit it. The job is left unmodified.
    #[error("report job {job_id} cannot transition from {status}")]
    InvalidState { job_id: String, status: String },
}

pub type Result<T> = std::result::Result<T, Error>;
