//! Fee calculator: converts heterogeneous fee structures into annual dollar
//! amounts and percent-of-assets figures.
//!
//! Every operation here is total. Unknown structures price at zero and
//! missing participant counts read as zero heads; bad input is the input
//! layer's problem, availability is ours.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::plan::{FeeCategory, FeeStructure, PlanData};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One category's fee expressed both ways.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedFee {
    pub dollar_amount: Money,
    /// Percent of plan assets (0.5 = 0.5%).
    pub percentage: Rate,
}

impl CalculatedFee {
    pub const ZERO: CalculatedFee = CalculatedFee {
        dollar_amount: Decimal::ZERO,
        percentage: Decimal::ZERO,
    };
}

/// All four categories plus their field-wise total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatedFees {
    pub advisor: CalculatedFee,
    pub record_keeper: CalculatedFee,
    pub tpa: CalculatedFee,
    pub investment_menu: CalculatedFee,
    pub total: CalculatedFee,
}

// ---------------------------------------------------------------------------
// Core operations
// ---------------------------------------------------------------------------

/// Annual dollar amount of one fee structure at the given plan size.
///
/// Basis points convert at 1 bp = 0.01% of assets. Per-head pricing treats a
/// missing participant count as zero heads. Unrecognised structures return
/// zero; [`calculate_all_fees`] surfaces that arm through a warning.
pub fn calculate_fee_amount(
    structure: &FeeStructure,
    aum: Money,
    participant_count: Option<u32>,
) -> Money {
    let heads = Decimal::from(participant_count.unwrap_or(0));
    match structure {
        FeeStructure::BasisPoints { basis_points } => aum * basis_points / dec!(10_000),
        FeeStructure::FlatFee { flat_fee } => *flat_fee,
        FeeStructure::FlatPlusPerHead {
            flat_fee,
            per_head_fee,
        } => flat_fee + per_head_fee * heads,
        FeeStructure::PerParticipant { per_head_fee } => per_head_fee * heads,
        FeeStructure::Unknown => Decimal::ZERO,
    }
}

/// Dollar amount as a percent of plan assets. Zero-asset plans read as 0%
/// rather than dividing by zero.
pub fn calculate_fee_percentage(amount: Money, aum: Money) -> Rate {
    if aum.is_zero() {
        return Decimal::ZERO;
    }
    amount / aum * dec!(100)
}

/// Calculate all four category fees and their total for one plan.
///
/// Pure and infallible: every degenerate input resolves to a defined figure.
/// Categories priced through the unknown-structure arm are named in the
/// envelope's warnings so silent mis-tagging stays observable.
pub fn calculate_all_fees(plan: &PlanData) -> ComputationOutput<CalculatedFees> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let mut category_fee = |category: FeeCategory| -> CalculatedFee {
        let structure = plan.fees.get(category);
        if matches!(structure, FeeStructure::Unknown) {
            warnings.push(format!(
                "Unrecognised {} fee structure; amount treated as zero",
                category.as_str()
            ));
        }
        let dollar_amount = calculate_fee_amount(
            structure,
            plan.assets_under_management,
            plan.participant_count,
        );
        CalculatedFee {
            dollar_amount,
            percentage: calculate_fee_percentage(dollar_amount, plan.assets_under_management),
        }
    };

    let advisor = category_fee(FeeCategory::Advisor);
    let record_keeper = category_fee(FeeCategory::RecordKeeper);
    let tpa = category_fee(FeeCategory::Tpa);
    let investment_menu = category_fee(FeeCategory::InvestmentMenu);

    let total = CalculatedFee {
        dollar_amount: advisor.dollar_amount
            + record_keeper.dollar_amount
            + tpa.dollar_amount
            + investment_menu.dollar_amount,
        percentage: advisor.percentage
            + record_keeper.percentage
            + tpa.percentage
            + investment_menu.percentage,
    };

    let fees = CalculatedFees {
        advisor,
        record_keeper,
        tpa,
        investment_menu,
        total,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Fee Calculator: Dollar and Percent-of-Assets Conversion",
        &serde_json::json!({
            "assets_under_management": plan.assets_under_management.to_string(),
            "participant_count": plan.participant_count,
            "fee_type": plan.fee_type,
        }),
        warnings,
        elapsed,
        fees,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
