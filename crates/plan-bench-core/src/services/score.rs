//! Service value scoring: tiered, weighted rules that reduce a plan's
//! service selections to a single 0-100 value with plain-language gaps.
//!
//! Tier weights are a fixed 3/2/1 regardless of plan size. Plan size only
//! drives the minimum-coverage insights; the scoring arithmetic itself never
//! branches on it.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::plan::{ServiceOptions, ServiceSelections};
use crate::services::baseline::{baseline_for, ProviderKind, ServiceBaseline};
use crate::services::coverage::{calculate_service_coverage, ServiceCoverage};
use crate::types::Money;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Plan size classification used for threshold checks and insight copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSizeBracket {
    Small,
    Mid,
    Large,
}

impl PlanSizeBracket {
    pub fn classify(aum: Money) -> Self {
        if aum < dec!(5_000_000) {
            PlanSizeBracket::Small
        } else if aum < dec!(50_000_000) {
            PlanSizeBracket::Mid
        } else {
            PlanSizeBracket::Large
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PlanSizeBracket::Small => "small",
            PlanSizeBracket::Mid => "mid-size",
            PlanSizeBracket::Large => "large",
        }
    }

    /// Minimum selected-flag count a plan of this size is expected to carry
    /// per provider. Falling below produces an insight, never a penalty to
    /// the score itself.
    pub fn minimum_selected(&self, provider: ProviderKind) -> usize {
        use PlanSizeBracket::*;
        use ProviderKind::*;
        match (self, provider) {
            (Small, Advisor) => 2,
            (Mid, Advisor) => 4,
            (Large, Advisor) => 6,
            (Small, RecordKeeper) => 3,
            (Mid, RecordKeeper) => 5,
            (Large, RecordKeeper) => 7,
            (Small, Tpa) => 2,
            (Mid, Tpa) => 4,
            (Large, Tpa) => 6,
            (Small, Audit) => 0,
            (Mid, Audit) => 2,
            (Large, Audit) => 3,
        }
    }
}

/// Rounded per-provider scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderScores {
    pub advisor: u8,
    pub record_keeper: u8,
    pub tpa: u8,
    pub audit: u8,
}

/// The scorer's full answer for one plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceValueScore {
    /// 0-100, weighted across providers.
    pub overall_score: u8,
    pub breakdown: ProviderScores,
    /// Plain-language gaps, ordered by provider.
    pub insights: Vec<String>,
}

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

// Tier weights and their denominator (3*100 + 2*100 + 1*100).
const ESSENTIAL_WEIGHT: Decimal = dec!(3);
const STANDARD_WEIGHT: Decimal = dec!(2);
const PREMIUM_WEIGHT: Decimal = dec!(1);
const WEIGHT_DENOMINATOR: Decimal = dec!(600);

const ADVISOR_SHARE: Decimal = dec!(0.35);
const RECORD_KEEPER_SHARE: Decimal = dec!(0.35);
const TPA_SHARE: Decimal = dec!(0.25);
const AUDIT_SHARE: Decimal = dec!(0.05);

fn weighted_provider_score(coverage: &ServiceCoverage) -> Decimal {
    (coverage.essential.percentage * ESSENTIAL_WEIGHT
        + coverage.standard.percentage * STANDARD_WEIGHT
        + coverage.premium.percentage * PREMIUM_WEIGHT)
        / WEIGHT_DENOMINATOR
        * dec!(100)
}

fn round_score(score: Decimal) -> u8 {
    score
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(0)
        .min(100)
}

fn selections_for(services: &ServiceOptions, provider: ProviderKind) -> &ServiceSelections {
    match provider {
        ProviderKind::Advisor => &services.advisor,
        ProviderKind::RecordKeeper => &services.record_keeper,
        ProviderKind::Tpa => &services.tpa,
        ProviderKind::Audit => &services.audit,
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Human-readable labels for every essential flag not ticked, in the
/// baseline's declared essential order.
pub fn missing_essential_services(
    selections: &ServiceSelections,
    baseline: &ServiceBaseline,
) -> Vec<String> {
    baseline
        .essential
        .iter()
        .filter(|flag| !selections.is_selected(flag.key))
        .map(|flag| flag.label.to_string())
        .collect()
}

/// Score a plan's service selections.
///
/// Per provider: tier coverage weighted 3/2/1. Overall: advisor 0.35,
/// record keeper 0.35, TPA 0.25, audit 0.05, rounded half-away-from-zero.
/// Absent or partial selections score low, never error.
pub fn calculate_service_value_score(services: &ServiceOptions, aum: Money) -> ServiceValueScore {
    let bracket = PlanSizeBracket::classify(aum);

    let mut raw_scores = [Decimal::ZERO; 4];
    let mut insights: Vec<String> = Vec::new();

    for (slot, provider) in ProviderKind::ALL.into_iter().enumerate() {
        let selections = selections_for(services, provider);
        let baseline = baseline_for(provider);
        let coverage = calculate_service_coverage(selections, baseline);
        raw_scores[slot] = weighted_provider_score(&coverage);

        let missing = missing_essential_services(selections, baseline);
        if !missing.is_empty() {
            insights.push(format!(
                "Missing {} essential {} service(s)",
                missing.len(),
                provider.display_name()
            ));
        }

        let minimum = bracket.minimum_selected(provider);
        let selected = selections.selected_count();
        if selected < minimum {
            insights.push(format!(
                "Only {} {} service(s) selected; {} plans typically include at least {}",
                selected,
                provider.display_name(),
                bracket.display_name(),
                minimum
            ));
        }
    }

    let [advisor_raw, record_keeper_raw, tpa_raw, audit_raw] = raw_scores;
    let overall = advisor_raw * ADVISOR_SHARE
        + record_keeper_raw * RECORD_KEEPER_SHARE
        + tpa_raw * TPA_SHARE
        + audit_raw * AUDIT_SHARE;

    ServiceValueScore {
        overall_score: round_score(overall),
        breakdown: ProviderScores {
            advisor: round_score(advisor_raw),
            record_keeper: round_score(record_keeper_raw),
            tpa: round_score(tpa_raw),
            audit: round_score(audit_raw),
        },
        insights,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
