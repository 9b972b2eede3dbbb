use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use serde_json::json;

use fix_report::{
    parser::{Parser, DEFAULT_TAG_DELIM, SOH},
    stats::ParseStats,
};

/// Dump every parsed line as one NDJSON object.
#[derive(ClapParser, Debug)]
#[command(name = "fix-inspect", version)]
struct Cli {
    file: PathBuf,
    #[arg(long, default_value_t = false)]
    soh: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let parser = if cli.soh {
        Parser::new(SOH, DEFAULT_TAG_DELIM)
    } else {
        Parser::default()
    };

    let f = File::open(&cli.file).with_context(|| format!("open {:?}", cli.file))?;
    let msgs = parser.parse_reader(f)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (i, m) in msgs.iter().enumerate() {
        let row = json!({
            "line": i + 1,
            "code": m.status().code(),
            "msg": m,
        });
        writeln!(out, "{row}")?;
    }

    let s = ParseStats::from_messages(&msgs);
    writeln!(out, "{}", json!({ "type": "final", "stats": s }))?;
    out.flush()?;
    Ok(())
}
