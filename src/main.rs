//! Banking System CLI
//!
//! Runs the savings/checking demonstration and prints the result of each
//! operation.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- [journal.csv]
//! ```
//!
//! When a path is given, every account event is also written there as CSV.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` or `debug` to see account events

use banking_system::demo::run_demonstration;
use banking_system::{CsvJournal, LogSink, MetricsSink, Result, Teller};
use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let journal = match env::args().nth(1) {
        Some(path) => Some(CsvJournal::new(BufWriter::new(File::create(path)?))),
        None => None,
    };

    let mut teller = Teller::new((LogSink, (MetricsSink::new(), journal)));

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_demonstration(&mut teller, &mut handle)?;

    let (_, (metrics, journal)) = teller.into_sink();
    metrics.log_summary();
    if let Some(journal) = journal {
        journal.finish()?;
    }

    Ok(())
}
