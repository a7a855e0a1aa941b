use clap::Args;
use serde_json::Value;

use plan_bench_core::fees::calculate_all_fees;

use crate::input;

/// Arguments for fee calculation
#[derive(Args)]
pub struct FeesArgs {
    /// Path to JSON plan record
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_fees(args: FeesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let plan = input::read_plan(&args.input)?;
    let result = calculate_all_fees(&plan);
    Ok(serde_json::to_value(result)?)
}
