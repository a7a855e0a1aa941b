use plan_bench_core::analysis::analyze_plan;
use plan_bench_core::benchmark::{BenchmarkDataset, BenchmarkRow};
use plan_bench_core::plan::{
    AumBucket, BalanceBucket, FeeSchedule, FeeStructure, FeeType, PlanData, ServiceOptions,
    ServiceSelections,
};
use plan_bench_core::PlanBenchError;
use rust_decimal_macros::dec;

fn row(label: &str, balance_bucket: &str, p50: rust_decimal::Decimal) -> BenchmarkRow {
    BenchmarkRow {
        source: "2024".to_string(),
        fee_type_label: label.to_string(),
        aum_bucket: "$3-5m".to_string(),
        balance_bucket: balance_bucket.to_string(),
        p25: p50 - dec!(0.10),
        p50,
        p75: p50 + dec!(0.15),
    }
}

fn consultant_plan() -> PlanData {
    PlanData {
        assets_under_management: dec!(4_200_000),
        participant_count: Some(96),
        benchmark_category: AumBucket::From3To5m,
        balance_benchmark_category: BalanceBucket::All,
        fee_type: FeeType::Unbundled,
        fees: FeeSchedule {
            advisor: FeeStructure::BasisPoints {
                basis_points: dec!(55),
            },
            record_keeper: FeeStructure::FlatPlusPerHead {
                flat_fee: dec!(1_800),
                per_head_fee: dec!(42),
            },
            tpa: FeeStructure::FlatFee {
                flat_fee: dec!(3_100),
            },
            investment_menu: FeeStructure::BasisPoints {
                basis_points: dec!(32),
            },
        },
        services: ServiceOptions {
            advisor: ServiceSelections::from_keys([
                "investment_monitoring",
                "employee_education",
                "fiduciary_guidance",
            ]),
            record_keeper: ServiceSelections::from_keys([
                "participant_website",
                "daily_valuation",
                "call_center",
            ]),
            tpa: ServiceSelections::from_keys(["form_5500", "compliance_testing"]),
            audit: ServiceSelections::default(),
        },
    }
}

fn dataset() -> BenchmarkDataset {
    BenchmarkDataset::from_rows(vec![
        row("Advisor Fee", "All", dec!(0.45)),
        row("Investment Menu Fee", "All", dec!(0.38)),
        row("Record Keeper Fee", "$50-75k", dec!(0.48)),
        row("TPA Fee", "$50-75k", dec!(0.21)),
        row("Total Plan Fee - Unbundled", "All", dec!(1.35)),
    ])
    .unwrap()
}

#[test]
fn test_full_analysis_assembles_all_three_components() {
    let out = analyze_plan(&consultant_plan(), &dataset()).unwrap();
    let analysis = &out.result;

    // Fees: 55 bp on $4.2m = $23,100; rk = 1,800 + 42 * 96 = $5,832.
    assert_eq!(analysis.fees.advisor.dollar_amount, dec!(23_100));
    assert_eq!(analysis.fees.record_keeper.dollar_amount, dec!(5_832));
    assert_eq!(
        analysis.fees.total.dollar_amount,
        analysis.fees.advisor.dollar_amount
            + analysis.fees.record_keeper.dollar_amount
            + analysis.fees.tpa.dollar_amount
            + analysis.fees.investment_menu.dollar_amount
    );

    // Benchmarks: record keeper "All" request falls back to the middle bucket.
    assert_eq!(analysis.benchmarks.advisor.p50, dec!(0.45));
    assert_eq!(analysis.benchmarks.record_keeper.p50, dec!(0.48));
    assert_eq!(analysis.benchmarks.total.p50, dec!(1.35));

    // Services: full essentials for advisor and record keeper.
    assert_eq!(analysis.service_coverage.advisor.essential.provided, 3);
    assert_eq!(analysis.service_coverage.audit.overall.provided, 0);
    assert!(analysis.service_score.overall_score > 0);
    assert!(analysis
        .service_score
        .insights
        .iter()
        .any(|i| i.contains("audit")));

    // No structural warnings: bucket matches assets, no unknown structures.
    assert!(out.warnings.is_empty());
}

#[test]
fn test_analysis_surfaces_component_warnings() {
    let mut plan = consultant_plan();
    plan.fees.tpa = serde_json::from_str(r#"{"type":"retainer","monthly":"500"}"#).unwrap();
    plan.benchmark_category = AumBucket::From5To10m; // disagrees with $4.2m assets

    let out = analyze_plan(&plan, &dataset()).unwrap();

    assert!(out.warnings.iter().any(|w| w.contains("TPA")));
    assert!(out.warnings.iter().any(|w| w.contains("$3-5m")));
    // The $5-10m bucket has no rows at all, so every category warns too.
    assert!(out.warnings.len() >= 7);
}

#[test]
fn test_analysis_rejects_invalid_plans() {
    let mut plan = consultant_plan();
    plan.fees.advisor = FeeStructure::BasisPoints {
        basis_points: dec!(-10),
    };
    let err = analyze_plan(&plan, &dataset()).unwrap_err();
    assert!(matches!(
        err,
        PlanBenchError::InvalidInput { field, .. } if field == "fees.advisor.basis_points"
    ));
}
