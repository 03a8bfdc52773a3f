use std::io;
use std::path::PathBuf;

/// Fatal failures of a scan run. Per-file and per-line problems never surface
/// here; they are logged or skipped by the workers.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("thread count must be at least 1, got {0}")]
    InvalidThreadCount(usize),

    #[error("cannot open log directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no log files found in {}", path.display())]
    NoLogFiles { path: PathBuf },

    #[error("failed to start worker for partition {partition}")]
    Spawn {
        partition: usize,
        #[source]
        source: io::Error,
    },

    #[error("worker for partition {partition} panicked")]
    WorkerPanicked { partition: usize },

    #[error("invalid log line pattern")]
    Pattern(#[from] regex::Error),
}
