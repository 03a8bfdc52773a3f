//! Fork-join scan: partition the files, run one worker thread per partition
//! against a shared table, join them all, hand back the finished aggregate.

pub mod partition;
pub mod worker;

pub use partition::{partition, split};
pub use worker::{WorkerContext, process_files};

use crate::Result;
use crate::config::ScanConfig;
use crate::discover;
use crate::error::ScanError;
use crate::log::LineParser;
use crate::model::{AggregationTable, ScanStats, Snapshot, StatsView};
use std::path::PathBuf;
use std::thread;
use tracing::{debug, info};

/// Result of a complete run: the aggregate plus diagnostic counters.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub snapshot: Snapshot,
    pub stats: StatsView,
}

/// Enumerate the configured directory and scan every log file in it.
pub fn run(config: &ScanConfig) -> Result<ScanOutcome> {
    let files = discover::list_log_files(config.log_dir())?;
    info!(
        dir = %config.log_dir().display(),
        files = files.len(),
        threads = config.threads(),
        "scanning log directory"
    );
    scan_files(&files, config.threads())
}

/// Scan an explicit file list with `threads` workers.
///
/// The table is only read after the thread scope has joined every worker.
/// Failing to start a worker, or a worker panicking, fails the whole run so
/// no partition is silently lost.
pub fn scan_files(files: &[PathBuf], threads: usize) -> Result<ScanOutcome> {
    let parts = split(files, threads)?;
    let parser = LineParser::new()?;
    let table = AggregationTable::new();
    let stats = ScanStats::default();

    let ctx = WorkerContext {
        parser: &parser,
        table: &table,
        stats: &stats,
    };

    run_workers(parts, |files| process_files(files, ctx))?;

    let stats = stats.view();
    info!(
        files_read = stats.files_read,
        files_failed = stats.files_failed,
        lines_matched = stats.lines_matched,
        lines_rejected = stats.lines_rejected,
        "scan complete"
    );

    Ok(ScanOutcome {
        snapshot: table.into_snapshot(),
        stats,
    })
}

/// Fork-join: one named thread per partition, all joined before returning.
///
/// Failing to start a thread, or a thread panicking, fails the call and names
/// the first partition affected.
fn run_workers<T, F>(parts: Vec<&[T]>, work: F) -> Result<()>
where
    T: Sync,
    F: Fn(&[T]) + Sync,
{
    let work = &work;
    thread::scope(|s| -> Result<()> {
        let mut handles = Vec::with_capacity(parts.len());
        let mut spawn_err = None;
        for (partition, files) in parts.into_iter().enumerate() {
            debug!(partition, files = files.len(), "starting worker");
            let spawned = thread::Builder::new()
                .name(format!("log-worker-{partition}"))
                .spawn_scoped(s, move || work(files));
            match spawned {
                Ok(handle) => handles.push((partition, handle)),
                Err(source) => {
                    spawn_err = Some(ScanError::Spawn { partition, source });
                    break;
                }
            }
        }

        // Join every started worker before reporting anything; a handle left
        // unjoined would make the scope re-panic on exit.
        let mut panicked = None;
        for (partition, handle) in handles {
            if handle.join().is_err() {
                panicked.get_or_insert(partition);
            }
        }

        if let Some(err) = spawn_err {
            return Err(err);
        }
        match panicked {
            Some(partition) => Err(ScanError::WorkerPanicked { partition }),
            None => Ok(()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn every_partition_runs_once() {
        let items: Vec<usize> = (0..10).collect();
        let seen = AtomicUsize::new(0);
        run_workers(split(&items, 4).unwrap(), |part| {
            seen.fetch_add(part.iter().sum::<usize>(), Ordering::Relaxed);
        })
        .unwrap();
        assert_eq!(seen.into_inner(), 45);
    }

    #[test]
    fn panicking_workers_are_all_joined_and_reported() {
        let items: Vec<usize> = (0..4).collect();
        let finished = AtomicUsize::new(0);
        let err = run_workers(split(&items, 4).unwrap(), |part| {
            if part[0] == 1 || part[0] == 3 {
                panic!("worker {} failed", part[0]);
            }
            finished.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap_err();

        assert!(matches!(err, ScanError::WorkerPanicked { partition: 1 }));
        assert_eq!(finished.into_inner(), 2);
    }
}
