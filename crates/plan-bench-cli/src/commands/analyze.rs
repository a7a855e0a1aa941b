use clap::Args;
use serde_json::Value;

use plan_bench_core::analysis::analyze_plan;

use crate::input;
use crate::input::dataset::load_dataset;

/// Arguments for the full benchmarking pass
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to JSON plan record
    #[arg(long)]
    pub input: Option<String>,

    /// Path to the benchmark dataset (JSON array or CSV)
    #[arg(long)]
    pub dataset: String,

    /// Designate a dataset vintage instead of the most recent one
    #[arg(long)]
    pub source: Option<String>,
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let plan = input::read_plan(&args.input)?;
    let dataset = load_dataset(&args.dataset, &args.source)?;
    let result = analyze_plan(&plan, &dataset)?;
    Ok(serde_json::to_value(result)?)
}
