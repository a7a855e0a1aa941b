use napi::Result as NapiResult;
use napi_derive::napi;

use plan_bench_core::benchmark::BenchmarkDataset;
use plan_bench_core::plan::PlanData;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_plan(plan_json: &str) -> NapiResult<PlanData> {
    serde_json::from_str(plan_json).map_err(to_napi_error)
}

fn parse_dataset(dataset_json: &str) -> NapiResult<BenchmarkDataset> {
    serde_json::from_str(dataset_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Fees
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_fees(plan_json: String) -> NapiResult<String> {
    let plan = parse_plan(&plan_json)?;
    let output = plan_bench_core::fees::calculate_all_fees(&plan);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

#[napi]
pub fn benchmark_comparison(plan_json: String, dataset_json: String) -> NapiResult<String> {
    let plan = parse_plan(&plan_json)?;
    let dataset = parse_dataset(&dataset_json)?;
    let output = plan_bench_core::benchmark::get_benchmark_comparison(
        &dataset,
        plan.benchmark_category,
        plan.balance_benchmark_category,
        plan.fee_type,
    );
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[napi]
pub fn service_value_score(plan_json: String) -> NapiResult<String> {
    let plan = parse_plan(&plan_json)?;
    let output = plan_bench_core::services::calculate_service_value_score(
        &plan.services,
        plan.assets_under_management,
    );
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Full pass
// ---------------------------------------------------------------------------

#[napi]
pub fn analyze_plan(plan_json: String, dataset_json: String) -> NapiResult<String> {
    let plan = parse_plan(&plan_json)?;
    let dataset = parse_dataset(&dataset_json)?;
    let output =
        plan_bench_core::analysis::analyze_plan(&plan, &dataset).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
