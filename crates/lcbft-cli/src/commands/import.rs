use clap::Args;
use serde_json::Value;

use lcbft_core::interop::import_payload;

use crate::input;

use super::to_value;

/// Arguments for export-file import
#[derive(Args)]
pub struct ImportArgs {
    /// Path to the exported JSON file
    #[arg(long)]
    pub file: String,
}

pub fn run_import(args: ImportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let bytes = input::file::read_import_bytes(&args.file)?;
    let outcome = import_payload(&bytes)?;
    to_value(outcome)
}
