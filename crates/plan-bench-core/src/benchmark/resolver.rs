//! Benchmark resolver: maps a fee category and bucket pair to a percentile
//! triple, with a defined fallback order over the denormalized dataset.
//!
//! The resolver itself answers found/not-found; only
//! [`get_benchmark_comparison`] substitutes the zero triple, and it warns
//! when it does. Consumers must read that sentinel as "benchmark unknown",
//! never as a literally-zero benchmark.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::benchmark::dataset::{BenchmarkDataset, BenchmarkRow};
use crate::plan::{AumBucket, BalanceBucket, FeeType};
use crate::types::{with_metadata, ComputationOutput, Rate};

// ---------------------------------------------------------------------------
// Dataset category labels
// ---------------------------------------------------------------------------

pub const ADVISOR_FEE_LABEL: &str = "Advisor Fee";
pub const RECORD_KEEPER_FEE_LABEL: &str = "Record Keeper Fee";
pub const TPA_FEE_LABEL: &str = "TPA Fee";
pub const INVESTMENT_MENU_FEE_LABEL: &str = "Investment Menu Fee";
pub const TOTAL_FEE_BUNDLED_LABEL: &str = "Total Plan Fee - Bundled";
pub const TOTAL_FEE_UNBUNDLED_LABEL: &str = "Total Plan Fee - Unbundled";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The 25th/50th/75th percentile fee figures for one category, in percent
/// of plan assets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkPercentiles {
    pub p25: Rate,
    pub p50: Rate,
    pub p75: Rate,
}

impl BenchmarkPercentiles {
    /// The sentinel substituted for a missed lookup. Indistinguishable from
    /// a legitimately-zero benchmark by value; the comparison's warnings are
    /// the disambiguator.
    pub const ZERO: BenchmarkPercentiles = BenchmarkPercentiles {
        p25: Decimal::ZERO,
        p50: Decimal::ZERO,
        p75: Decimal::ZERO,
    };

    fn from_row(row: &BenchmarkRow) -> Self {
        BenchmarkPercentiles {
            p25: row.p25,
            p50: row.p50,
            p75: row.p75,
        }
    }
}

/// Percentile triples for all five benchmarked categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub advisor: BenchmarkPercentiles,
    pub record_keeper: BenchmarkPercentiles,
    pub tpa: BenchmarkPercentiles,
    pub investment_menu: BenchmarkPercentiles,
    pub total: BenchmarkPercentiles,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Look up the percentile triple for one fee category.
///
/// Search order:
/// 1. Exact match on current source + label + AUM bucket + balance bucket.
/// 2. Only when the request was `All`: any balance bucket under the same
///    source + label + AUM bucket, preferring the designated middle bucket,
///    then the nearest bucket to the middle (lower ordinal on ties), with
///    rows carrying unrecognised balance labels last in dataset order.
/// 3. `None`.
pub fn find_benchmark_percentiles(
    dataset: &BenchmarkDataset,
    fee_type_label: &str,
    aum_bucket: AumBucket,
    balance_bucket: BalanceBucket,
) -> Option<BenchmarkPercentiles> {
    let aum_label = aum_bucket.label();
    let in_scope = |row: &BenchmarkRow| {
        row.source == dataset.current_source()
            && row.fee_type_label == fee_type_label
            && row.aum_bucket == aum_label
    };

    if let Some(row) = dataset
        .rows()
        .iter()
        .find(|row| in_scope(row) && row.balance_bucket == balance_bucket.label())
    {
        return Some(BenchmarkPercentiles::from_row(row));
    }

    if balance_bucket != BalanceBucket::All {
        return None;
    }

    dataset
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| in_scope(row))
        .min_by_key(|(position, row)| fallback_rank(row, *position))
        .map(|(_, row)| BenchmarkPercentiles::from_row(row))
}

/// Ranking key for the balance-bucket fallback. Smaller sorts first.
/// Distance is measured from the designated middle bucket, so a middle-bucket
/// row always wins with distance zero.
fn fallback_rank(row: &BenchmarkRow, position: usize) -> (u8, u8, usize) {
    let middle = BalanceBucket::MIDDLE
        .ordinal()
        .expect("middle bucket is a specific bucket");
    match BalanceBucket::from_label(&row.balance_bucket).and_then(|b| b.ordinal()) {
        Some(ordinal) => (0, ordinal.abs_diff(middle), ordinal as usize),
        None => (1, u8::MAX, position),
    }
}

/// Resolve all five categories for one plan, with the per-category
/// bucketing rules the benchmark population is published under:
/// advisor and investment-menu figures exist only at the `All` aggregate,
/// record-keeper and TPA figures are balance-segmented, and the total-plan
/// figure is a different population per bundling arrangement.
pub fn get_benchmark_comparison(
    dataset: &BenchmarkDataset,
    aum_bucket: AumBucket,
    balance_bucket: BalanceBucket,
    fee_type: FeeType,
) -> ComputationOutput<BenchmarkComparison> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let mut resolve = |label: &str, balance: BalanceBucket| -> BenchmarkPercentiles {
        match find_benchmark_percentiles(dataset, label, aum_bucket, balance) {
            Some(percentiles) => percentiles,
            None => {
                warnings.push(format!(
                    "No '{}' benchmark row for {} / {} in source '{}'; \
                     zero placeholder substituted (benchmark unknown, not zero)",
                    label,
                    aum_bucket.label(),
                    balance.label(),
                    dataset.current_source()
                ));
                BenchmarkPercentiles::ZERO
            }
        }
    };

    let advisor = resolve(ADVISOR_FEE_LABEL, BalanceBucket::All);
    let record_keeper = resolve(RECORD_KEEPER_FEE_LABEL, balance_bucket);
    let tpa = resolve(TPA_FEE_LABEL, balance_bucket);
    let investment_menu = resolve(INVESTMENT_MENU_FEE_LABEL, BalanceBucket::All);
    let total_label = match fee_type {
        FeeType::Bundled => TOTAL_FEE_BUNDLED_LABEL,
        FeeType::Unbundled => TOTAL_FEE_UNBUNDLED_LABEL,
    };
    let total = resolve(total_label, balance_bucket);

    let comparison = BenchmarkComparison {
        advisor,
        record_keeper,
        tpa,
        investment_menu,
        total,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Benchmark Resolver: Percentile Lookup with Balance-Bucket Fallback",
        &serde_json::json!({
            "source": dataset.current_source(),
            "aum_bucket": aum_bucket.label(),
            "balance_bucket": balance_bucket.label(),
            "fee_type": fee_type,
        }),
        warnings,
        elapsed,
        comparison,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
