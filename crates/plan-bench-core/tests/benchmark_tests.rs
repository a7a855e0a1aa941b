use plan_bench_core::benchmark::resolver::{
    ADVISOR_FEE_LABEL, INVESTMENT_MENU_FEE_LABEL, RECORD_KEEPER_FEE_LABEL,
    TOTAL_FEE_BUNDLED_LABEL, TOTAL_FEE_UNBUNDLED_LABEL, TPA_FEE_LABEL,
};
use plan_bench_core::benchmark::{
    find_benchmark_percentiles, get_benchmark_comparison, BenchmarkDataset, BenchmarkPercentiles,
    BenchmarkRow,
};
use plan_bench_core::plan::{AumBucket, BalanceBucket, FeeType};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn row(
    source: &str,
    label: &str,
    aum_bucket: &str,
    balance_bucket: &str,
    p25: Decimal,
    p50: Decimal,
    p75: Decimal,
) -> BenchmarkRow {
    BenchmarkRow {
        source: source.to_string(),
        fee_type_label: label.to_string(),
        aum_bucket: aum_bucket.to_string(),
        balance_bucket: balance_bucket.to_string(),
        p25,
        p50,
        p75,
    }
}

/// A small but realistic slice of the denormalized dataset: two vintages,
/// mixed balance segmentation, some categories only published at "All".
fn fixture_dataset() -> BenchmarkDataset {
    BenchmarkDataset::from_rows(vec![
        // Stale vintage rows that must never be matched.
        row("2023", ADVISOR_FEE_LABEL, "$3-5m", "All", dec!(0.50), dec!(0.65), dec!(0.85)),
        row("2023", TPA_FEE_LABEL, "$3-5m", "$50-75k", dec!(0.20), dec!(0.30), dec!(0.45)),
        // Current vintage.
        row("2024", ADVISOR_FEE_LABEL, "$3-5m", "All", dec!(0.35), dec!(0.45), dec!(0.60)),
        row("2024", ADVISOR_FEE_LABEL, "$5-10m", "All", dec!(0.25), dec!(0.35), dec!(0.50)),
        row("2024", INVESTMENT_MENU_FEE_LABEL, "$3-5m", "All", dec!(0.28), dec!(0.38), dec!(0.52)),
        row("2024", RECORD_KEEPER_FEE_LABEL, "$3-5m", "$25-50k", dec!(0.42), dec!(0.55), dec!(0.72)),
        row("2024", RECORD_KEEPER_FEE_LABEL, "$3-5m", "$50-75k", dec!(0.38), dec!(0.48), dec!(0.64)),
        row("2024", RECORD_KEEPER_FEE_LABEL, "$3-5m", "$75-100k", dec!(0.33), dec!(0.43), dec!(0.58)),
        row("2024", TPA_FEE_LABEL, "$3-5m", "$25-50k", dec!(0.15), dec!(0.22), dec!(0.33)),
        row("2024", TPA_FEE_LABEL, "$3-5m", "$75-100k", dec!(0.12), dec!(0.19), dec!(0.29)),
        row("2024", TOTAL_FEE_BUNDLED_LABEL, "$3-5m", "All", dec!(0.95), dec!(1.15), dec!(1.45)),
        row("2024", TOTAL_FEE_UNBUNDLED_LABEL, "$3-5m", "All", dec!(1.10), dec!(1.35), dec!(1.70)),
    ])
    .unwrap()
}

// ===========================================================================
// Resolver search order
// ===========================================================================

#[test]
fn test_exact_match_is_returned_among_noise() {
    let found = find_benchmark_percentiles(
        &fixture_dataset(),
        ADVISOR_FEE_LABEL,
        AumBucket::From3To5m,
        BalanceBucket::All,
    )
    .unwrap();
    assert_eq!(
        found,
        BenchmarkPercentiles {
            p25: dec!(0.35),
            p50: dec!(0.45),
            p75: dec!(0.60),
        }
    );
}

#[test]
fn test_most_recent_source_is_designated_and_enforced() {
    let dataset = fixture_dataset();
    assert_eq!(dataset.current_source(), "2024");

    // The 2023-only TPA row under $50-75k is invisible to an exact request.
    assert_eq!(
        find_benchmark_percentiles(
            &dataset,
            TPA_FEE_LABEL,
            AumBucket::From3To5m,
            BalanceBucket::From50To75k,
        ),
        None
    );
}

#[test]
fn test_all_request_falls_back_to_designated_middle_bucket() {
    // No "All" row for Record Keeper Fee under $3-5m, but balance-specific
    // rows exist; the $50-75k row must win.
    let found = find_benchmark_percentiles(
        &fixture_dataset(),
        RECORD_KEEPER_FEE_LABEL,
        AumBucket::From3To5m,
        BalanceBucket::All,
    )
    .unwrap();
    assert_eq!(found.p50, dec!(0.48));
}

#[test]
fn test_unbundled_record_keeper_middle_bucket_scenario() {
    // $3-5m / "All" with only $50-75k and $75-100k rows published for the
    // unbundled record-keeper population.
    let dataset = BenchmarkDataset::from_rows(vec![
        row(
            "2024",
            "Record Keeper Fee - Unbundled",
            "$3-5m",
            "$50-75k",
            dec!(0.40),
            dec!(0.52),
            dec!(0.70),
        ),
        row(
            "2024",
            "Record Keeper Fee - Unbundled",
            "$3-5m",
            "$75-100k",
            dec!(0.35),
            dec!(0.46),
            dec!(0.61),
        ),
    ])
    .unwrap();

    let found = find_benchmark_percentiles(
        &dataset,
        "Record Keeper Fee - Unbundled",
        AumBucket::From3To5m,
        BalanceBucket::All,
    )
    .unwrap();
    assert_eq!(
        found,
        BenchmarkPercentiles {
            p25: dec!(0.40),
            p50: dec!(0.52),
            p75: dec!(0.70),
        }
    );
}

#[test]
fn test_fallback_without_middle_row_is_deterministic() {
    // Candidates sit at ordinal distance 1 ($25-50k) and 2 (>$100k) from
    // the middle; the nearer bucket wins regardless of dataset order.
    let found = find_benchmark_percentiles(
        &fixture_dataset(),
        TPA_FEE_LABEL,
        AumBucket::From3To5m,
        BalanceBucket::All,
    )
    .unwrap();
    assert_eq!(found.p50, dec!(0.22));

    let reversed = BenchmarkDataset::from_rows(vec![
        row("2024", TPA_FEE_LABEL, "$3-5m", "$75-100k", dec!(0.12), dec!(0.19), dec!(0.29)),
        row("2024", TPA_FEE_LABEL, "$3-5m", "$25-50k", dec!(0.15), dec!(0.22), dec!(0.33)),
    ])
    .unwrap();
    let found = find_benchmark_percentiles(
        &reversed,
        TPA_FEE_LABEL,
        AumBucket::From3To5m,
        BalanceBucket::All,
    )
    .unwrap();
    // Equal distance either side of the middle: the lower bucket wins.
    assert_eq!(found.p50, dec!(0.22));
}

#[test]
fn test_specific_bucket_requests_never_fall_back() {
    assert_eq!(
        find_benchmark_percentiles(
            &fixture_dataset(),
            RECORD_KEEPER_FEE_LABEL,
            AumBucket::From3To5m,
            BalanceBucket::Over100k,
        ),
        None
    );
}

#[test]
fn test_unknown_aum_bucket_finds_nothing() {
    assert_eq!(
        find_benchmark_percentiles(
            &fixture_dataset(),
            ADVISOR_FEE_LABEL,
            AumBucket::Over500m,
            BalanceBucket::All,
        ),
        None
    );
}

// ===========================================================================
// Comparison composition
// ===========================================================================

#[test]
fn test_comparison_applies_per_category_bucketing() {
    let out = get_benchmark_comparison(
        &fixture_dataset(),
        AumBucket::From3To5m,
        BalanceBucket::From75To100k,
        FeeType::Unbundled,
    );
    let cmp = &out.result;

    // Advisor and investment menu pinned to All.
    assert_eq!(cmp.advisor.p50, dec!(0.45));
    assert_eq!(cmp.investment_menu.p50, dec!(0.38));
    // Record keeper and TPA segmented by the caller's balance bucket.
    assert_eq!(cmp.record_keeper.p50, dec!(0.43));
    assert_eq!(cmp.tpa.p50, dec!(0.19));
    // Total is requested at the caller's bucket, and the fixture only
    // publishes totals at "All": a miss, zeroed with a warning. Specific
    // bucket requests never broaden.
    assert_eq!(out.warnings.len(), 1);
    assert_eq!(cmp.total, BenchmarkPercentiles::ZERO);
}

#[test]
fn test_comparison_total_population_tracks_fee_type() {
    let bundled = get_benchmark_comparison(
        &fixture_dataset(),
        AumBucket::From3To5m,
        BalanceBucket::All,
        FeeType::Bundled,
    );
    assert_eq!(bundled.result.total.p50, dec!(1.15));

    let unbundled = get_benchmark_comparison(
        &fixture_dataset(),
        AumBucket::From3To5m,
        BalanceBucket::All,
        FeeType::Unbundled,
    );
    assert_eq!(unbundled.result.total.p50, dec!(1.35));
}

#[test]
fn test_comparison_zero_sentinel_is_always_accompanied_by_warning() {
    let sparse = BenchmarkDataset::from_rows(vec![row(
        "2024",
        ADVISOR_FEE_LABEL,
        "$3-5m",
        "All",
        dec!(0.35),
        dec!(0.45),
        dec!(0.60),
    )])
    .unwrap();

    let out = get_benchmark_comparison(
        &sparse,
        AumBucket::From3To5m,
        BalanceBucket::All,
        FeeType::Bundled,
    );
    let zeroed = [
        out.result.record_keeper,
        out.result.tpa,
        out.result.investment_menu,
        out.result.total,
    ];
    assert!(zeroed.iter().all(|p| *p == BenchmarkPercentiles::ZERO));
    assert_eq!(out.warnings.len(), zeroed.len());
}
