//! Benchmark dataset loading.
//!
//! The engine is source-agnostic: it only ever sees an already-built
//! [`BenchmarkDataset`]. This loader feeds it from a local JSON or CSV file
//! carrying the same row schema the remote dataset API serves.

use std::fs::File;
use std::path::Path;

use plan_bench_core::benchmark::{BenchmarkDataset, BenchmarkRow};

use crate::input::file;

/// Load rows from `path` (by extension: .csv, else JSON array) and build a
/// dataset handle. `source_override`, when given, designates the current
/// vintage instead of the greatest tag found in the rows.
pub fn load_dataset(
    path: &str,
    source_override: &Option<String>,
) -> Result<BenchmarkDataset, Box<dyn std::error::Error>> {
    let rows = if is_csv(path) {
        read_csv_rows(path)?
    } else {
        file::read_json::<Vec<BenchmarkRow>>(path)?
    };

    let dataset = match source_override {
        Some(source) => BenchmarkDataset::new(rows, source.clone()),
        None => BenchmarkDataset::from_rows(rows)?,
    };
    Ok(dataset)
}

fn is_csv(path: &str) -> bool {
    Path::new(path)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

fn read_csv_rows(path: &str) -> Result<Vec<BenchmarkRow>, Box<dyn std::error::Error>> {
    let file = File::open(path).map_err(|e| format!("Failed to open '{}': {}", path, e))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: BenchmarkRow = record?;
        rows.push(row);
    }
    Ok(rows)
}
