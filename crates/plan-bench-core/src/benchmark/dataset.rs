//! The benchmark dataset handle.
//!
//! The backing data is denormalized and inconsistently populated, so rows
//! keep their bucket labels as free text; the resolver decides what matches.
//! The handle is built once by a loading collaborator (file, API response)
//! and passed in explicitly wherever a lookup is needed, read-only for the
//! process lifetime. No module-level cache.

use serde::{Deserialize, Serialize};

use crate::error::PlanBenchError;
use crate::types::Rate;
use crate::PlanBenchResult;

/// One denormalized record from the backing dataset.
///
/// `p25 <= p50 <= p75` is assumed of the source data, not enforced here.
/// Percentile values are percent-of-assets figures, the same unit as
/// [`CalculatedFee::percentage`](crate::fees::CalculatedFee).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    /// Data vintage tag, e.g. "2024".
    pub source: String,
    /// Free-text category name, e.g. "Advisor Fee", "Total Plan Fee - Bundled".
    pub fee_type_label: String,
    pub aum_bucket: String,
    pub balance_bucket: String,
    pub p25: Rate,
    pub p50: Rate,
    pub p75: Rate,
}

/// An immutable, explicitly injected sequence of benchmark rows together
/// with the vintage designated as current.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkDataset {
    rows: Vec<BenchmarkRow>,
    current_source: String,
}

impl BenchmarkDataset {
    /// Build a dataset with an explicitly designated current vintage.
    pub fn new(rows: Vec<BenchmarkRow>, current_source: impl Into<String>) -> Self {
        BenchmarkDataset {
            rows,
            current_source: current_source.into(),
        }
    }

    /// Build a dataset and designate the greatest source tag as current.
    /// Vintage tags sort lexicographically ("2023" < "2024" < "2024-q3").
    pub fn from_rows(rows: Vec<BenchmarkRow>) -> PlanBenchResult<Self> {
        let current_source = rows
            .iter()
            .map(|r| r.source.as_str())
            .max()
            .ok_or_else(|| {
                PlanBenchError::InsufficientData("benchmark dataset has no rows".into())
            })?
            .to_string();
        Ok(BenchmarkDataset {
            rows,
            current_source,
        })
    }

    pub fn rows(&self) -> &[BenchmarkRow] {
        &self.rows
    }

    pub fn current_source(&self) -> &str {
        &self.current_source
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(source: &str) -> BenchmarkRow {
        BenchmarkRow {
            source: source.to_string(),
            fee_type_label: "Advisor Fee".to_string(),
            aum_bucket: "$3-5m".to_string(),
            balance_bucket: "All".to_string(),
            p25: dec!(0.25),
            p50: dec!(0.50),
            p75: dec!(0.75),
        }
    }

    #[test]
    fn from_rows_designates_latest_vintage() {
        let dataset =
            BenchmarkDataset::from_rows(vec![row("2022"), row("2024"), row("2023")]).unwrap();
        assert_eq!(dataset.current_source(), "2024");
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        let err = BenchmarkDataset::from_rows(Vec::new()).unwrap_err();
        assert!(matches!(err, PlanBenchError::InsufficientData(_)));
    }

    #[test]
    fn explicit_designation_wins() {
        let dataset = BenchmarkDataset::new(vec![row("2022"), row("2024")], "2022");
        assert_eq!(dataset.current_source(), "2022");
    }
}
