//! tx-inspect
//!
//! Reads encoded `GetTxResponse` payloads and prints, as JSON, who signed
//! each message and what fee the transaction actually paid.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use log::{error, info};

use prov_tx_core::batch::TxProcessor;
use prov_tx_core::config::ExplorerConfig;
use prov_tx_core::fees::{MemoizedSchedule, MsgFeeScheduleLookup, StaticFeeSchedule};
use prov_tx_core::tx::TxOutcome;

const LOG_ENV: &str = "TX_INSPECT_LOG";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Network {
    Mainnet,
    Testnet,
}

#[derive(Debug, Parser)]
#[command(name = "tx-inspect", version, about = "Inspect transaction signers and fees")]
struct Opts {
    /// Network preset; ignored when --config is given
    #[arg(short, long, value_enum, default_value = "mainnet")]
    network: Network,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON message fee schedule, a list of height epochs
    #[arg(short, long)]
    schedule: Option<PathBuf>,

    /// Inputs are hex text rather than raw protobuf
    #[arg(long)]
    hex: bool,

    /// Encoded GetTxResponse files
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn read_outcome(path: &Path, hex_input: bool) -> Result<TxOutcome, Box<dyn std::error::Error>> {
    let bytes = fs::read(path)?;
    let bytes = if hex_input {
        hex::decode(String::from_utf8(bytes)?.trim())?
    } else {
        bytes
    };
    Ok(TxOutcome::from_bytes(&bytes)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var(LOG_ENV).is_err() {
        std::env::set_var(LOG_ENV, "info");
    }
    pretty_env_logger::init_custom_env(LOG_ENV);

    let opts = Opts::parse();

    let config = match &opts.config {
        Some(path) => ExplorerConfig::load(path)?,
        None => match opts.network {
            Network::Mainnet => ExplorerConfig::mainnet(),
            Network::Testnet => ExplorerConfig::testnet(),
        },
    };
    let schedule = match &opts.schedule {
        Some(path) => StaticFeeSchedule::load(path)?,
        None => StaticFeeSchedule::empty(),
    };
    let lookup: Arc<dyn MsgFeeScheduleLookup> = Arc::new(MemoizedSchedule::new(schedule));
    let processor = TxProcessor::standard(config, lookup);

    let mut outcomes = Vec::with_capacity(opts.files.len());
    for path in &opts.files {
        match read_outcome(path, opts.hex) {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => error!("Skipping {}: {}", path.display(), e),
        }
    }
    info!("Loaded {} of {} transactions", outcomes.len(), opts.files.len());

    let mut summaries = Vec::new();
    for result in processor.process_batch(outcomes).await {
        match result {
            Ok(summary) => summaries.push(summary),
            Err(e) => error!("Failed to process transaction: {}", e),
        }
    }

    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}
