//! Query evaluation over the record store.
//!
//! Composite filters (free-text, verdict, source) evaluated against a
//! point-in-time snapshot:
//! - Boundary parsing of the wire filter shape
//! - Stable, order-preserving evaluation

pub mod engine;
pub mod filter;

pub use engine::*;
pub use filter::*;
