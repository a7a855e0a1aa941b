use clap::{Args, ValueEnum};
use serde_json::Value;

use plan_bench_core::services::{
    baseline_for, calculate_service_coverage, calculate_service_value_score, ProviderKind,
};

use crate::input;

/// Arguments for service value scoring
#[derive(Args)]
pub struct ServiceScoreArgs {
    /// Path to JSON plan record
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for per-provider coverage
#[derive(Args)]
pub struct CoverageArgs {
    /// Path to JSON plan record
    #[arg(long)]
    pub input: Option<String>,

    /// Provider whose coverage to report
    #[arg(long)]
    pub provider: ProviderArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProviderArg {
    Advisor,
    RecordKeeper,
    Tpa,
    Audit,
}

impl From<ProviderArg> for ProviderKind {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Advisor => ProviderKind::Advisor,
            ProviderArg::RecordKeeper => ProviderKind::RecordKeeper,
            ProviderArg::Tpa => ProviderKind::Tpa,
            ProviderArg::Audit => ProviderKind::Audit,
        }
    }
}

pub fn run_service_score(args: ServiceScoreArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let plan = input::read_plan(&args.input)?;
    let result = calculate_service_value_score(&plan.services, plan.assets_under_management);
    Ok(serde_json::to_value(result)?)
}

pub fn run_coverage(args: CoverageArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let plan = input::read_plan(&args.input)?;
    let provider: ProviderKind = args.provider.into();
    let selections = match provider {
        ProviderKind::Advisor => &plan.services.advisor,
        ProviderKind::RecordKeeper => &plan.services.record_keeper,
        ProviderKind::Tpa => &plan.services.tpa,
        ProviderKind::Audit => &plan.services.audit,
    };
    let result = calculate_service_coverage(selections, baseline_for(provider));
    Ok(serde_json::to_value(result)?)
}
