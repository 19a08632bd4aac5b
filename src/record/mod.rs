//! Moderation record storage.
//!
//! Record models and the in-memory store:
//! - Closed verdict taxonomy with boundary parsing
//! - Insert/get/delete with monotonic, never-reused ids
//! - Snapshot reads in insertion order

pub mod model;
pub mod store;

pub use model::*;
pub use store::*;
