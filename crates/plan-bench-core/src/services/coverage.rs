//! Service coverage: how much of a provider's baseline the plan actually
//! receives, per tier and overall.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::plan::ServiceSelections;
use crate::services::baseline::{ServiceBaseline, ServiceFlag};
use crate::types::Rate;

/// Coverage of one tier (or of the whole baseline for `overall`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierCoverage {
    pub provided: u32,
    pub total: u32,
    pub percentage: Rate,
}

impl TierCoverage {
    /// Empty tiers read as 0% rather than dividing by zero.
    pub fn of(provided: u32, total: u32) -> Self {
        let percentage = if total == 0 {
            Decimal::ZERO
        } else {
            Decimal::from(provided) / Decimal::from(total) * dec!(100)
        };
        TierCoverage {
            provided,
            total,
            percentage,
        }
    }
}

/// Per-tier coverage plus the aggregate across all of a provider's flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCoverage {
    pub essential: TierCoverage,
    pub standard: TierCoverage,
    pub premium: TierCoverage,
    pub overall: TierCoverage,
}

fn provided_in(selections: &ServiceSelections, tier: &[ServiceFlag]) -> u32 {
    tier.iter()
        .filter(|flag| selections.is_selected(flag.key))
        .count() as u32
}

/// Count selected flags per tier against the baseline partition.
pub fn calculate_service_coverage(
    selections: &ServiceSelections,
    baseline: &ServiceBaseline,
) -> ServiceCoverage {
    let essential = TierCoverage::of(
        provided_in(selections, baseline.essential),
        baseline.essential.len() as u32,
    );
    let standard = TierCoverage::of(
        provided_in(selections, baseline.standard),
        baseline.standard.len() as u32,
    );
    let premium = TierCoverage::of(
        provided_in(selections, baseline.premium),
        baseline.premium.len() as u32,
    );
    let overall = TierCoverage::of(
        essential.provided + standard.provided + premium.provided,
        baseline.flag_count() as u32,
    );

    ServiceCoverage {
        essential,
        standard,
        premium,
        overall,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::baseline::{ProviderKind, ADVISOR_BASELINE};
    use pretty_assertions::assert_eq;

    #[test]
    fn coverage_counts_selected_flags_per_tier() {
        let selections = ServiceSelections::from_keys([
            "investment_monitoring",
            "employee_education",
            "provider_benchmarking",
        ]);
        let coverage = calculate_service_coverage(&selections, &ADVISOR_BASELINE);

        assert_eq!(coverage.essential.provided, 2);
        assert_eq!(coverage.essential.total, 3);
        assert_eq!(
            coverage.essential.percentage,
            Decimal::from(2) / Decimal::from(3) * dec!(100)
        );
        assert_eq!(coverage.standard.provided, 1);
        assert_eq!(coverage.premium.provided, 0);
        assert_eq!(coverage.overall.provided, 3);
        assert_eq!(coverage.overall.total, 8);
    }

    #[test]
    fn flags_set_false_do_not_count() {
        let mut selections = ServiceSelections::from_keys(["investment_monitoring"]);
        selections.set("employee_education", false);
        let coverage = calculate_service_coverage(&selections, &ADVISOR_BASELINE);
        assert_eq!(coverage.essential.provided, 1);
    }

    #[test]
    fn keys_outside_the_baseline_are_ignored() {
        let selections = ServiceSelections::from_keys(["concierge_travel"]);
        let coverage = calculate_service_coverage(&selections, &ADVISOR_BASELINE);
        assert_eq!(coverage.overall.provided, 0);
    }

    #[test]
    fn empty_selections_are_all_zero() {
        let coverage = calculate_service_coverage(&ServiceSelections::default(), &ADVISOR_BASELINE);
        assert_eq!(coverage.essential.percentage, Decimal::ZERO);
        assert_eq!(coverage.overall.percentage, Decimal::ZERO);
    }

    #[test]
    fn empty_tier_reads_as_zero_percent() {
        assert_eq!(TierCoverage::of(0, 0).percentage, Decimal::ZERO);

        // A baseline with no premium tier at all.
        static BARE: ServiceBaseline = ServiceBaseline {
            provider: ProviderKind::Audit,
            essential: &[ServiceFlag {
                key: "annual_audit",
                label: "Annual plan audit",
            }],
            standard: &[],
            premium: &[],
        };
        let selections = ServiceSelections::from_keys(["annual_audit"]);
        let coverage = calculate_service_coverage(&selections, &BARE);
        assert_eq!(coverage.essential.percentage, dec!(100));
        assert_eq!(coverage.standard.percentage, Decimal::ZERO);
        assert_eq!(coverage.premium.percentage, Decimal::ZERO);
        assert_eq!(coverage.overall.percentage, dec!(100));
    }
}
