use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Diagnostic counters for a scan. They never affect the aggregate.
#[derive(Debug, Default)]
pub struct ScanStats {
    files_read: AtomicU64,
    files_failed: AtomicU64,
    lines_matched: AtomicU64,
    lines_rejected: AtomicU64,
}

impl ScanStats {
    pub fn file_read(&self) {
        self.files_read.fetch_add(1, Ordering::Relaxed);
    }

    pub fn file_failed(&self) {
        self.files_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Workers batch line counts per file to keep the hot loop free of atomics.
    pub fn add_lines(&self, matched: u64, rejected: u64) {
        self.lines_matched.fetch_add(matched, Ordering::Relaxed);
        self.lines_rejected.fetch_add(rejected, Ordering::Relaxed);
    }

    pub fn view(&self) -> StatsView {
        StatsView {
            files_read: self.files_read.load(Ordering::Relaxed),
            files_failed: self.files_failed.load(Ordering::Relaxed),
            lines_matched: self.lines_matched.load(Ordering::Relaxed),
            lines_rejected: self.lines_rejected.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub files_read: u64,
    pub files_failed: u64,
    pub lines_matched: u64,
    pub lines_rejected: u64,
}
