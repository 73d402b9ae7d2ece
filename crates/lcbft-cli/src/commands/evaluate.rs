use clap::Args;
use serde_json::Value;

use lcbft_core::scoring::RiskEngine;

use super::{load_registry, load_request, to_value};

/// Arguments for risk evaluation
#[derive(Args)]
pub struct EvaluateArgs {
    /// Path to JSON request file
    #[arg(long)]
    pub input: Option<String>,

    /// Path to a replacement risk registry (JSON)
    #[arg(long)]
    pub registry: Option<String>,
}

pub fn run_evaluate(args: EvaluateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = load_request(&args.input)?;
    let engine = RiskEngine::new(load_registry(&args.registry)?);
    to_value(engine.evaluate(&request))
}
