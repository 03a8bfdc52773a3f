use crate::log::{LineParser, MAX_LINE_BYTES};
use crate::model::{AggregationTable, ScanStats};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Shared, read-only context every worker runs against.
#[derive(Clone, Copy)]
pub struct WorkerContext<'a> {
    pub parser: &'a LineParser,
    pub table: &'a AggregationTable,
    pub stats: &'a ScanStats,
}

/// Process the assigned files in order. A file that cannot be opened or read
/// is logged and skipped; it never stops the worker.
pub fn process_files(files: &[PathBuf], ctx: WorkerContext<'_>) {
    for path in files {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot open log file, skipping");
                ctx.stats.file_failed();
                continue;
            }
        };
        ctx.stats.file_read();

        match process_reader(BufReader::new(file), ctx) {
            Ok((matched, rejected)) => {
                debug!(path = %path.display(), matched, rejected, "log file done");
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "read error, keeping lines read so far");
            }
        }
    }
}

/// Feed every line of `reader` to the parser and record the matches.
/// Returns (matched, rejected) line counts.
pub fn process_reader<R: BufRead>(mut reader: R, ctx: WorkerContext<'_>) -> io::Result<(u64, u64)> {
    let mut buf = Vec::with_capacity(512);
    let mut matched = 0u64;
    let mut rejected = 0u64;

    let result = loop {
        match read_line_bounded(&mut reader, &mut buf, MAX_LINE_BYTES) {
            Ok(Line::Eof) => break Ok(()),
            Ok(Line::Oversized) => rejected += 1,
            Ok(Line::Complete) => {
                let line = String::from_utf8_lossy(trim_eol(&buf));
                match ctx.parser.parse(&line) {
                    Some(rec) => {
                        ctx.table.record(rec.url, rec.bytes, rec.referrer);
                        matched += 1;
                    }
                    None => rejected += 1,
                }
            }
            Err(e) => break Err(e),
        }
    };

    ctx.stats.add_lines(matched, rejected);
    result.map(|()| (matched, rejected))
}

#[derive(Debug, PartialEq, Eq)]
enum Line {
    Complete,
    Oversized,
    Eof,
}

/// Read one line into `buf` without buffering more than `limit + 2` bytes.
/// A line longer than `limit` (`\n` or `\r\n` terminator excluded) is drained
/// and reported as oversized.
fn read_line_bounded<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>, limit: usize) -> io::Result<Line> {
    buf.clear();
    let n = reader.by_ref().take(limit as u64 + 1).read_until(b'\n', buf)?;
    if n == 0 {
        return Ok(Line::Eof);
    }
    if buf.last() == Some(&b'\n') || n <= limit {
        return Ok(Line::Complete);
    }
    // A full-length line whose CRLF terminator straddles the read ceiling.
    if buf.last() == Some(&b'\r') && reader.fill_buf()?.first() == Some(&b'\n') {
        reader.consume(1);
        buf.push(b'\n');
        return Ok(Line::Complete);
    }
    reader.skip_until(b'\n')?;
    Ok(Line::Oversized)
}

fn trim_eol(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b'\n' | b'\r'] = line {
        line = rest;
    }
    line
}
