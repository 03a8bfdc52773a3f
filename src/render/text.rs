use crate::model::Snapshot;
use std::io::{self, Write};

/// Write the text report. Only occupied slots appear, in slot order; the
/// tables are first-seen order, not sorted by value.
pub fn write_text_report<W: Write>(out: &mut W, snap: &Snapshot) -> io::Result<()> {
    writeln!(out, "Total bytes: {}", snap.total_bytes)?;

    writeln!(out, "Top URLs by traffic:")?;
    for e in &snap.urls {
        writeln!(out, "URL: {}, Bytes: {}", e.url, e.bytes)?;
    }

    writeln!(out, "Top referrers by count:")?;
    for e in &snap.referrers {
        writeln!(out, "Referrer: {}, Count: {}", e.referrer, e.count)?;
    }
    Ok(())
}
