use access_log_stats::render;
use access_log_stats::{ScanConfig, logging};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "access-log-stats")]
#[command(about = "Aggregate traffic from a directory of access logs", long_about = None)]
struct Cli {
    /// Directory whose regular files are Combined Log Format access logs.
    log_dir: PathBuf,

    /// Number of worker threads (at least 1).
    thread_count: usize,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log scan progress and counters to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    // 1) Validate before touching the filesystem.
    let config = ScanConfig::new(&cli.log_dir, cli.thread_count)?;

    // 2) Enumerate, partition, scan, join.
    let outcome = access_log_stats::run(&config)
        .with_context(|| format!("scan of {} failed", cli.log_dir.display()))?;

    // 3) Report.
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Text => render::write_text_report(&mut out, &outcome.snapshot)?,
        Format::Json => {
            let json = render::render_json_report(&outcome.snapshot, &outcome.stats)?;
            writeln!(out, "{}", json)?;
        }
    }
    out.flush()?;

    Ok(())
}
