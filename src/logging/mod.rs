//! Structured logging with store/record/job context.
//!
//! Provides logging macros and utilities that include store, record, and
//! job identifiers in every log message for easy correlation.

pub mod structured;

pub use structured::*;
