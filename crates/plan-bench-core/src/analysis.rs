//! Thin orchestration over the three engine components: validate a plan at
//! the boundary, then run fees, benchmarks, and service scoring against one
//! dataset handle and merge the results into a single envelope.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::benchmark::{get_benchmark_comparison, BenchmarkComparison, BenchmarkDataset};
use crate::error::PlanBenchError;
use crate::fees::{calculate_all_fees, CalculatedFees};
use crate::plan::{AumBucket, FeeCategory, FeeStructure, PlanData};
use crate::services::{
    baseline_for, calculate_service_coverage, calculate_service_value_score, ProviderKind,
    ServiceCoverage, ServiceValueScore,
};
use crate::types::{with_metadata, ComputationOutput};
use crate::PlanBenchResult;

/// Coverage for each provider on the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderCoverage {
    pub advisor: ServiceCoverage,
    pub record_keeper: ServiceCoverage,
    pub tpa: ServiceCoverage,
    pub audit: ServiceCoverage,
}

/// Everything the presentation layer needs for one plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanAnalysis {
    pub fees: CalculatedFees,
    pub benchmarks: BenchmarkComparison,
    pub service_score: ServiceValueScore,
    pub service_coverage: ProviderCoverage,
}

/// The input-layer validation the pure components assume has already run.
/// Rejects structurally unusable plans; everything else is the components'
/// defined-degenerate territory.
pub fn validate_plan_data(plan: &PlanData) -> PlanBenchResult<()> {
    if plan.assets_under_management < Decimal::ZERO {
        return Err(PlanBenchError::InvalidInput {
            field: "assets_under_management".into(),
            reason: "Plan assets must be non-negative".into(),
        });
    }

    for category in FeeCategory::ALL {
        let field = |name: &str| format!("fees.{}.{}", category.field_name(), name);
        match plan.fees.get(category) {
            FeeStructure::BasisPoints { basis_points } if *basis_points < Decimal::ZERO => {
                return Err(PlanBenchError::InvalidInput {
                    field: field("basis_points"),
                    reason: "Basis points must be non-negative".into(),
                });
            }
            FeeStructure::FlatFee { flat_fee } if *flat_fee < Decimal::ZERO => {
                return Err(PlanBenchError::InvalidInput {
                    field: field("flat_fee"),
                    reason: "Flat fee must be non-negative".into(),
                });
            }
            FeeStructure::FlatPlusPerHead {
                flat_fee,
                per_head_fee,
            } if *flat_fee < Decimal::ZERO || *per_head_fee < Decimal::ZERO => {
                return Err(PlanBenchError::InvalidInput {
                    field: field("flat_fee"),
                    reason: "Flat and per-head fees must be non-negative".into(),
                });
            }
            FeeStructure::PerParticipant { per_head_fee } if *per_head_fee < Decimal::ZERO => {
                return Err(PlanBenchError::InvalidInput {
                    field: field("per_head_fee"),
                    reason: "Per-head fee must be non-negative".into(),
                });
            }
            _ => {}
        }
    }

    Ok(())
}

/// Run the full benchmarking pass for one plan against one dataset.
pub fn analyze_plan(
    plan: &PlanData,
    dataset: &BenchmarkDataset,
) -> PlanBenchResult<ComputationOutput<PlanAnalysis>> {
    let start = Instant::now();
    validate_plan_data(plan)?;

    let mut warnings: Vec<String> = Vec::new();

    let derived = AumBucket::for_aum(plan.assets_under_management);
    if derived != plan.benchmark_category {
        warnings.push(format!(
            "Plan assets place the plan in the {} bucket but it is benchmarked in {}",
            derived.label(),
            plan.benchmark_category.label()
        ));
    }

    let fees_out = calculate_all_fees(plan);
    warnings.extend(fees_out.warnings);

    let benchmarks_out = get_benchmark_comparison(
        dataset,
        plan.benchmark_category,
        plan.balance_benchmark_category,
        plan.fee_type,
    );
    warnings.extend(benchmarks_out.warnings);

    let service_score =
        calculate_service_value_score(&plan.services, plan.assets_under_management);

    let service_coverage = ProviderCoverage {
        advisor: calculate_service_coverage(
            &plan.services.advisor,
            baseline_for(ProviderKind::Advisor),
        ),
        record_keeper: calculate_service_coverage(
            &plan.services.record_keeper,
            baseline_for(ProviderKind::RecordKeeper),
        ),
        tpa: calculate_service_coverage(&plan.services.tpa, baseline_for(ProviderKind::Tpa)),
        audit: calculate_service_coverage(&plan.services.audit, baseline_for(ProviderKind::Audit)),
    };

    let analysis = PlanAnalysis {
        fees: fees_out.result,
        benchmarks: benchmarks_out.result,
        service_score,
        service_coverage,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Plan Benchmarking: Fees, Percentile Benchmarks, Service Value",
        &serde_json::json!({
            "assets_under_management": plan.assets_under_management.to_string(),
            "participant_count": plan.participant_count,
            "aum_bucket": plan.benchmark_category.label(),
            "balance_bucket": plan.balance_benchmark_category.label(),
            "fee_type": plan.fee_type,
            "benchmark_source": dataset.current_source(),
        }),
        warnings,
        elapsed,
        analysis,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{BalanceBucket, FeeSchedule, FeeType, ServiceOptions};
    use rust_decimal_macros::dec;

    fn sample_plan() -> PlanData {
        PlanData {
            assets_under_management: dec!(5_000_000),
            participant_count: Some(100),
            benchmark_category: AumBucket::From5To10m,
            balance_benchmark_category: BalanceBucket::All,
            fee_type: FeeType::Unbundled,
            fees: FeeSchedule {
                advisor: FeeStructure::BasisPoints {
                    basis_points: dec!(50),
                },
                record_keeper: FeeStructure::FlatPlusPerHead {
                    flat_fee: dec!(2_000),
                    per_head_fee: dec!(40),
                },
                tpa: FeeStructure::FlatFee {
                    flat_fee: dec!(3_500),
                },
                investment_menu: FeeStructure::BasisPoints {
                    basis_points: dec!(30),
                },
            },
            services: ServiceOptions::default(),
        }
    }

    #[test]
    fn negative_assets_are_rejected() {
        let mut plan = sample_plan();
        plan.assets_under_management = dec!(-1);
        let err = analyze_plan(&plan, &BenchmarkDataset::new(Vec::new(), "2024")).unwrap_err();
        assert!(matches!(err, PlanBenchError::InvalidInput { field, .. } if field == "assets_under_management"));
    }

    #[test]
    fn negative_fee_parameters_are_rejected() {
        let mut plan = sample_plan();
        plan.fees.advisor = FeeStructure::BasisPoints {
            basis_points: dec!(-5),
        };
        assert!(validate_plan_data(&plan).is_err());
    }

    #[test]
    fn bucket_mismatch_warns_but_proceeds() {
        let plan = sample_plan(); // $5m assets pinned to the $5-10m bucket
        let mut mismatched = plan.clone();
        mismatched.benchmark_category = AumBucket::Under1m;

        let dataset = BenchmarkDataset::new(Vec::new(), "2024");
        let out = analyze_plan(&mismatched, &dataset).unwrap();
        assert!(out
            .warnings
            .iter()
            .any(|w| w.contains("benchmarked in <$1m")));
    }
}
