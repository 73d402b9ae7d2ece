mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::evaluate::EvaluateArgs;
use commands::export::ExportArgs;
use commands::import::ImportArgs;

/// Rule-based AML/CTF risk assessment
#[derive(Parser)]
#[command(
    name = "lcbft",
    version,
    about = "Rule-based AML/CTF risk assessment",
    long_about = "Scores anti-money-laundering risk for a client relationship and \
                  transaction pattern from a JSON request, produces exportable \
                  assessment envelopes, and safely re-imports previously exported \
                  files."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an assessment request (geographic, product/service, client)
    Evaluate(EvaluateArgs),
    /// Score a request and wrap the result in an export envelope
    Export(ExportArgs),
    /// Validate and reconcile a previously exported JSON file
    Import(ImportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Evaluate(args) => commands::evaluate::run_evaluate(args),
        Commands::Export(args) => commands::export::run_export(args),
        Commands::Import(args) => commands::import::run_import(args),
        Commands::Version => {
            println!("lcbft {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
