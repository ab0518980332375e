//! hg-results: reporting tables and run storage.
//!
//! A pure consumer of the flowsheet's output: flattens streams and
//! equipment duties into four summary tables, renders them as CSV,
//! and archives runs under a content-hashed run ID.

pub mod csv;
pub mod error;
pub mod hash;
pub mod store;
pub mod types;

pub use error::{ResultsError, ResultsResult};
pub use hash::compute_run_id;
pub use store::RunStore;
pub use types::{ReportTables, RunManifest, build_tables};
