use clap::Args;
use serde_json::Value;

use lcbft_core::interop::envelope::{build_compact_export, build_full_envelope};
use lcbft_core::scoring::RiskEngine;

use super::{load_registry, load_request, to_value};

/// Arguments for envelope export
#[derive(Args)]
pub struct ExportArgs {
    /// Path to JSON request file
    #[arg(long)]
    pub input: Option<String>,

    /// Path to a replacement risk registry (JSON)
    #[arg(long)]
    pub registry: Option<String>,

    /// Emit the compact flat format instead of the full envelope
    #[arg(long)]
    pub compact: bool,
}

pub fn run_export(args: ExportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = load_request(&args.input)?;
    let engine = RiskEngine::new(load_registry(&args.registry)?);
    let result = engine.evaluate(&request);

    if args.compact {
        to_value(build_compact_export(&result))
    } else {
        to_value(build_full_envelope(Some(&request), &result))
    }
}
