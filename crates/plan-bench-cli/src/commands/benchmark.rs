use clap::Args;
use serde_json::Value;

use plan_bench_core::benchmark::get_benchmark_comparison;

use crate::input;
use crate::input::dataset::load_dataset;

/// Arguments for benchmark resolution
#[derive(Args)]
pub struct BenchmarkArgs {
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

pub fn run_benchmark(args: BenchmarkArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let plan = input::read_plan(&args.input)?;
    let dataset = load_dataset(&args.dataset, &args.source)?;
    let result = get_benchmark_comparison(
        &dataset,
        plan.benchmark_category,
        plan.balance_benchmark_category,
        plan.fee_type,
    );
    Ok(serde_json::to_value(result)?)
}
