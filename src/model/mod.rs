//! Aggregation model: one shared table fed by every worker.
//!
//! Locking discipline: all mutation goes through [`AggregationTable::record`],
//! which holds the mutex for the whole update (total, URL slot, referrer slot).
//! The table is only read after every worker has been joined, by consuming it
//! with [`AggregationTable::into_snapshot`].

pub mod stats;
pub mod table;

pub use stats::{ScanStats, StatsView};
pub use table::{BoundedTable, Slot};

use serde::Serialize;
use std::sync::{Mutex, PoisonError};

/// Slots per table in the report.
pub const TABLE_CAPACITY: usize = 10;

/// Referrer value meaning "no referrer"; never counted.
pub const NO_REFERRER: &str = "-";

#[derive(Debug)]
struct Tables {
    total_bytes: u64,
    urls: BoundedTable,
    referrers: BoundedTable,
}

/// Total bytes plus the bounded URL and referrer tables, behind one lock.
#[derive(Debug)]
pub struct AggregationTable {
    inner: Mutex<Tables>,
}

impl Default for AggregationTable {
    fn default() -> Self {
        Self::with_capacity(TABLE_CAPACITY)
    }
}

impl AggregationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Tables {
                total_bytes: 0,
                urls: BoundedTable::with_capacity(capacity),
                referrers: BoundedTable::with_capacity(capacity),
            }),
        }
    }

    /// Apply one parsed request.
    ///
    /// `bytes` always reaches the total, even when the URL table is full and
    /// the URL itself is dropped. A `-` referrer leaves the referrer table
    /// untouched.
    pub fn record(&self, url: &str, bytes: u64, referrer: &str) {
        // Every update leaves the tables consistent, so a panic elsewhere while
        // holding the lock does not invalidate them.
        let mut t = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        t.total_bytes = t.total_bytes.saturating_add(bytes);
        t.urls.add(url, bytes);
        if referrer != NO_REFERRER {
            t.referrers.add(referrer, 1);
        }
    }

    /// Consume the table once all writers are gone.
    pub fn into_snapshot(self) -> Snapshot {
        let t = self.inner.into_inner().unwrap_or_else(PoisonError::into_inner);
        Snapshot {
            total_bytes: t.total_bytes,
            urls: t
                .urls
                .into_slots()
                .into_iter()
                .map(|s| UrlEntry {
                    url: s.key,
                    bytes: s.value,
                })
                .collect(),
            referrers: t
                .referrers
                .into_slots()
                .into_iter()
                .map(|s| ReferrerEntry {
                    referrer: s.key,
                    count: s.value,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlEntry {
    pub url: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferrerEntry {
    pub referrer: String,
    pub count: u64,
}

/// Final, read-only aggregate. Entries are in slot (first-seen) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub total_bytes: u64,
    pub urls: Vec<UrlEntry>,
    pub referrers: Vec<ReferrerEntry>,
}

impl Snapshot {
    pub fn url_bytes(&self, url: &str) -> Option<u64> {
        self.urls.iter().find(|e| e.url == url).map(|e| e.bytes)
    }

    pub fn referrer_count(&self, referrer: &str) -> Option<u64> {
        self.referrers
            .iter()
            .find(|e| e.referrer == referrer)
            .map(|e| e.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::thread;

    #[test]
    fn total_counts_dropped_urls() {
        let table = AggregationTable::new();
        for i in 0..15u64 {
            table.record(&format!("/u{i}"), 10, NO_REFERRER);
        }
        let snap = table.into_snapshot();
        assert_eq!(snap.total_bytes, 150);
        assert_eq!(snap.urls.len(), TABLE_CAPACITY);
        let kept: Vec<String> = snap.urls.iter().map(|e| e.url.clone()).collect();
        let expected: Vec<String> = (0..10).map(|i| format!("/u{i}")).collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn dash_referrer_is_never_counted() {
        let table = AggregationTable::new();
        table.record("/", 1, "-");
        table.record("/", 1, "http://a/");
        table.record("/", 1, "-");
        let snap = table.into_snapshot();
        assert_eq!(
            snap.referrers,
            vec![ReferrerEntry {
                referrer: "http://a/".to_string(),
                count: 1
            }]
        );
        assert_eq!(snap.referrer_count("-"), None);
    }

    #[test]
    fn referrer_counts_requests_not_bytes() {
        let table = AggregationTable::new();
        table.record("/a", 500, "http://r/");
        table.record("/b", 700, "http://r/");
        let snap = table.into_snapshot();
        assert_eq!(snap.referrer_count("http://r/"), Some(2));
        assert_eq!(snap.url_bytes("/b"), Some(700));
    }

    #[test]
    fn concurrent_records_keep_exact_sums() {
        let table = AggregationTable::new();
        thread::scope(|s| {
            for w in 0..8u64 {
                let table = &table;
                s.spawn(move || {
                    for i in 0..1000u64 {
                        table.record(&format!("/p{}", i % 4), w + 1, "http://ref/");
                    }
                });
            }
        });
        let snap = table.into_snapshot();
        // sum over w of 1000 * (w + 1)
        assert_eq!(snap.total_bytes, 36_000);
        assert_eq!(snap.urls.len(), 4);
        let per_url: u64 = snap.urls.iter().map(|e| e.bytes).sum();
        assert_eq!(per_url, 36_000);
        assert_eq!(snap.referrer_count("http://ref/"), Some(8000));
    }
}
