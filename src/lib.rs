//! Parallel aggregation of web-server access logs.
//!
//! A directory of Combined Log Format files is split across a fixed pool of
//! worker threads. Every matching line feeds one shared, bounded aggregation
//! table; the finished table is rendered as a text or JSON report.

pub mod config;
pub mod discover;
pub mod error;
pub mod log;
pub mod logging;
pub mod model;
pub mod render;
pub mod scan;

pub use config::ScanConfig;
pub use error::ScanError;
pub use model::{AggregationTable, Snapshot};
pub use scan::{ScanOutcome, run};

pub type Result<T> = std::result::Result<T, ScanError>;
