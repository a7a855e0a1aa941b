mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::analyze::AnalyzeArgs;
use commands::benchmark::BenchmarkArgs;
use commands::fees::FeesArgs;
use commands::services::{CoverageArgs, ServiceScoreArgs};

/// Retirement-plan fee and service benchmarking
#[derive(Parser)]
#[command(
    name = "pbench",
    version,
    about = "Retirement-plan fee and service benchmarking",
    long_about = "Benchmark a retirement plan's fee structures against industry \
                  percentile data and score the adequacy of its bundled services. \
                  Plan records are read as JSON from --input or stdin; benchmark \
                  datasets load from JSON or CSV files."
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
    /// Convert a plan's fee structures into dollar and percent figures
    Fees(FeesArgs),
    /// Resolve percentile benchmarks for a plan's buckets
    Benchmark(BenchmarkArgs),
    /// Score the plan's service selections (0-100 with gap insights)
    ServiceScore(ServiceScoreArgs),
    /// Tier-by-tier service coverage for one provider
    Coverage(CoverageArgs),
    /// Full pass: fees, benchmarks, and service scoring in one envelope
    Analyze(AnalyzeArgs),
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
        Commands::Fees(args) => commands::fees::run_fees(args),
        Commands::Benchmark(args) => commands::benchmark::run_benchmark(args),
        Commands::ServiceScore(args) => commands::services::run_service_score(args),
        Commands::Coverage(args) => commands::services::run_coverage(args),
        Commands::Analyze(args) => commands::analyze::run_analyze(args),
        Commands::Version => {
            println!("pbench {}", env!("CARGO_PKG_VERSION"));
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
