//! Validated run configuration.

use crate::Result;
use crate::error::ScanError;
use std::path::{Path, PathBuf};

/// Everything a scan run needs, checked before any file is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    log_dir: PathBuf,
    threads: usize,
}

impl ScanConfig {
    /// Reject a zero thread count up front so partitioning never divides by zero.
    pub fn new(log_dir: impl Into<PathBuf>, threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(ScanError::InvalidThreadCount(threads));
        }
        Ok(Self {
            log_dir: log_dir.into(),
            threads,
        })
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn threads(&self) -> usize {
        self.threads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threads_is_rejected() {
        let err = ScanConfig::new("/var/log/nginx", 0).unwrap_err();
        assert!(matches!(err, ScanError::InvalidThreadCount(0)));
    }

    #[test]
    fn keeps_directory_and_thread_count() {
        let cfg = ScanConfig::new("/var/log/nginx", 4).unwrap();
        assert_eq!(cfg.log_dir(), Path::new("/var/log/nginx"));
        assert_eq!(cfg.threads(), 4);
    }
}
