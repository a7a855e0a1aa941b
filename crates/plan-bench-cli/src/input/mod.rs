pub mod dataset;
pub mod file;
pub mod stdin;

use plan_bench_core::plan::PlanData;

/// Read a plan record from `--input <file>` or piped stdin.
pub fn read_plan(input: &Option<String>) -> Result<PlanData, Box<dyn std::error::Error>> {
    if let Some(path) = input {
        return file::read_json(path);
    }
    if let Some(value) = stdin::read_stdin()? {
        return Ok(serde_json::from_value(value)?);
    }
    Err("--input <plan.json> or piped stdin required".into())
}
