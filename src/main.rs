// src/main.rs
use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fix_report::{
    parser::{Parser, DEFAULT_TAG_DELIM, SOH},
    report,
    stats::ParseStats,
};

#[derive(ClapParser, Debug)]
#[command(name = "fix-report", version, about = "Validate FIX messages")]
struct Cli {
    /// File containing FIX messages (one per line)
    file: PathBuf,
    /// Fields are separated by SOH (0x01) instead of '|'
    #[arg(long, default_value_t = false)]
    soh: bool,
    /// Log per-status message counts
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.stats { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let parser = if cli.soh {
        Parser::new(SOH, DEFAULT_TAG_DELIM)
    } else {
        Parser::default()
    };

    let f = File::open(&cli.file).with_context(|| format!("open {:?}", cli.file))?;
    let msgs = parser
        .parse_reader(f)
        .with_context(|| format!("parse {:?}", cli.file))?;

    if cli.stats {
        info!("{}", ParseStats::from_messages(&msgs));
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in report::render_reports(&msgs) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
