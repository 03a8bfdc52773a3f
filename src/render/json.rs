use crate::model::{ReferrerEntry, Snapshot, StatsView, UrlEntry};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    total_bytes: u64,
    urls: &'a [UrlEntry],
    referrers: &'a [ReferrerEntry],
    stats: &'a StatsView,
}

/// Render the aggregate and scan counters as a single pretty-printed JSON
/// document.
pub fn render_json_report(snap: &Snapshot, stats: &StatsView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        total_bytes: snap.total_bytes,
        urls: &snap.urls,
        referrers: &snap.referrers,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn json_shape() {
        let snap = Snapshot {
            total_bytes: 7,
            urls: vec![UrlEntry {
                url: "/x".into(),
                bytes: 7,
            }],
            referrers: vec![],
        };
        let stats = StatsView {
            files_read: 1,
            lines_matched: 1,
            ..StatsView::default()
        };

        let out = render_json_report(&snap, &stats).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            json!({
                "total_bytes": 7,
                "urls": [{ "url": "/x", "bytes": 7 }],
                "referrers": [],
                "stats": {
                    "files_read": 1,
                    "files_failed": 0,
                    "lines_matched": 1,
                    "lines_rejected": 0
                }
            })
        );
    }
}
