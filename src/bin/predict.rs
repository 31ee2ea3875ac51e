//! Millguard CLI
//!
//! Feeds readings through the health engine from the command line:
//!
//! ```bash
//! # Single ad-hoc reading (JSON object) from stdin
//! echo '{"airTemperature":300,"processTemperature":310.5,"rotationalSpeed":1500,"torque":40,"toolWear":100}' | millguard
//!
//! # Batch of stored readings (JSON array) -> enriched records + fleet summary
//! millguard --batch --file fleet_snapshot.json
//! ```
//!
//! Logging is controlled via `RUST_LOG` (default: info).

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use millguard::{enrich_reading, predict, summarize_fleet, PredictRequest, StoredReading};

#[derive(Parser, Debug)]
#[command(name = "millguard")]
#[command(about = "Machine health scoring and anomaly detection engine")]
#[command(version)]
struct CliArgs {
    /// Read input JSON from this file instead of stdin
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Treat input as a JSON array of stored readings and emit
    /// enriched records plus a fleet summary
    #[arg(long)]
    batch: bool,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = CliArgs::parse();
    let input = read_input(args.file.as_ref())?;

    let output = if args.batch {
        let records: Vec<StoredReading> =
            serde_json::from_str(&input).context("input is not a JSON array of stored readings")?;
        tracing::info!(count = records.len(), "enriching stored readings");
        let enriched: Vec<_> = records.iter().map(enrich_reading).collect();
        let summary = summarize_fleet(&enriched);
        json!({ "records": enriched, "summary": summary })
    } else {
        let request: PredictRequest =
            serde_json::from_str(&input).context("input is not a JSON reading object")?;
        let prediction = predict(&request).context("reading failed validation")?;
        serde_json::to_value(prediction)?
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}
