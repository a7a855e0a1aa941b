//! Plan-level data model shared by every engine component.
//!
//! A [`PlanData`] record describes one retirement plan as entered by a
//! consultant: plan size, the fee arrangement of each provider, and the
//! services each provider bundles in. The record is owned by the caller for
//! the duration of one computation and is never mutated by the engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::Money;

// ---------------------------------------------------------------------------
// Fee structures
// ---------------------------------------------------------------------------

/// Bundled vs unbundled service arrangement. Drives which total-plan-fee
/// benchmark population the plan is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeType {
    Bundled,
    Unbundled,
}

/// One provider's fee arrangement. Exactly one variant is active at a time;
/// JSON fields not belonging to the active variant are ignored, not rejected.
///
/// Structures this engine does not recognise deserialise to [`Unknown`] and
/// price at zero rather than failing (validation belongs to the input layer).
///
/// [`Unknown`]: FeeStructure::Unknown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeeStructure {
    /// Asset-based pricing: 1 bp = 0.01% of assets per year.
    BasisPoints {
        #[serde(default)]
        basis_points: Decimal,
    },
    /// A fixed annual dollar amount.
    FlatFee {
        #[serde(default)]
        flat_fee: Money,
    },
    /// A fixed base plus a per-participant charge.
    FlatPlusPerHead {
        #[serde(default)]
        flat_fee: Money,
        #[serde(default)]
        per_head_fee: Money,
    },
    /// Pure per-participant pricing.
    PerParticipant {
        #[serde(default)]
        per_head_fee: Money,
    },
    #[serde(other)]
    Unknown,
}

/// The four fee categories benchmarked for every plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeCategory {
    Advisor,
    RecordKeeper,
    Tpa,
    InvestmentMenu,
}

impl FeeCategory {
    pub const ALL: [FeeCategory; 4] = [
        FeeCategory::Advisor,
        FeeCategory::RecordKeeper,
        FeeCategory::Tpa,
        FeeCategory::InvestmentMenu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeeCategory::Advisor => "advisor",
            FeeCategory::RecordKeeper => "record keeper",
            FeeCategory::Tpa => "TPA",
            FeeCategory::InvestmentMenu => "investment menu",
        }
    }

    /// Field name as it appears in serialized plan records.
    pub fn field_name(&self) -> &'static str {
        match self {
            FeeCategory::Advisor => "advisor",
            FeeCategory::RecordKeeper => "record_keeper",
            FeeCategory::Tpa => "tpa",
            FeeCategory::InvestmentMenu => "investment_menu",
        }
    }
}

/// The fee arrangement of each provider on the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub advisor: FeeStructure,
    pub record_keeper: FeeStructure,
    pub tpa: FeeStructure,
    pub investment_menu: FeeStructure,
}

impl FeeSchedule {
    pub fn get(&self, category: FeeCategory) -> &FeeStructure {
        match category {
            FeeCategory::Advisor => &self.advisor,
            FeeCategory::RecordKeeper => &self.record_keeper,
            FeeCategory::Tpa => &self.tpa,
            FeeCategory::InvestmentMenu => &self.investment_menu,
        }
    }
}

// ---------------------------------------------------------------------------
// Benchmark buckets
// ---------------------------------------------------------------------------

/// The twelve AUM buckets the benchmark population is segmented by.
/// Labels match the backing dataset byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AumBucket {
    #[serde(rename = "<$1m")]
    Under1m,
    #[serde(rename = "$1-3m")]
    From1To3m,
    #[serde(rename = "$3-5m")]
    From3To5m,
    #[serde(rename = "$5-10m")]
    From5To10m,
    #[serde(rename = "$10-20m")]
    From10To20m,
    #[serde(rename = "$20-30m")]
    From20To30m,
    #[serde(rename = "$30-50m")]
    From30To50m,
    #[serde(rename = "$50-75m")]
    From50To75m,
    #[serde(rename = "$75-100m")]
    From75To100m,
    #[serde(rename = "$100-250m")]
    From100To250m,
    #[serde(rename = "$250-500m")]
    From250To500m,
    #[serde(rename = ">$500m")]
    Over500m,
}

impl AumBucket {
    pub const ALL: [AumBucket; 12] = [
        AumBucket::Under1m,
        AumBucket::From1To3m,
        AumBucket::From3To5m,
        AumBucket::From5To10m,
        AumBucket::From10To20m,
        AumBucket::From20To30m,
        AumBucket::From30To50m,
        AumBucket::From50To75m,
        AumBucket::From75To100m,
        AumBucket::From100To250m,
        AumBucket::From250To500m,
        AumBucket::Over500m,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AumBucket::Under1m => "<$1m",
            AumBucket::From1To3m => "$1-3m",
            AumBucket::From3To5m => "$3-5m",
            AumBucket::From5To10m => "$5-10m",
            AumBucket::From10To20m => "$10-20m",
            AumBucket::From20To30m => "$20-30m",
            AumBucket::From30To50m => "$30-50m",
            AumBucket::From50To75m => "$50-75m",
            AumBucket::From75To100m => "$75-100m",
            AumBucket::From100To250m => "$100-250m",
            AumBucket::From250To500m => "$250-500m",
            AumBucket::Over500m => ">$500m",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        AumBucket::ALL.into_iter().find(|b| b.label() == label)
    }

    /// Classify plan assets into their bucket. Upper bounds are exclusive,
    /// so a $3m plan lands in `$3-5m`.
    pub fn for_aum(aum: Money) -> Self {
        if aum < dec!(1_000_000) {
            AumBucket::Under1m
        } else if aum < dec!(3_000_000) {
            AumBucket::From1To3m
        } else if aum < dec!(5_000_000) {
            AumBucket::From3To5m
        } else if aum < dec!(10_000_000) {
            AumBucket::From5To10m
        } else if aum < dec!(20_000_000) {
            AumBucket::From10To20m
        } else if aum < dec!(30_000_000) {
            AumBucket::From20To30m
        } else if aum < dec!(50_000_000) {
            AumBucket::From30To50m
        } else if aum < dec!(75_000_000) {
            AumBucket::From50To75m
        } else if aum < dec!(100_000_000) {
            AumBucket::From75To100m
        } else if aum < dec!(250_000_000) {
            AumBucket::From100To250m
        } else if aum < dec!(500_000_000) {
            AumBucket::From250To500m
        } else {
            AumBucket::Over500m
        }
    }
}

/// Average-participant-balance buckets, plus the `All` aggregate used when
/// a plan is benchmarked without balance segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceBucket {
    #[serde(rename = "All")]
    All,
    #[serde(rename = "<$25k")]
    Under25k,
    #[serde(rename = "$25-50k")]
    From25To50k,
    #[serde(rename = "$50-75k")]
    From50To75k,
    #[serde(rename = "$75-100k")]
    From75To100k,
    #[serde(rename = ">$100k")]
    Over100k,
}

impl BalanceBucket {
    /// The bucket the resolver prefers when an `All` request has to fall
    /// back to balance-specific rows.
    pub const MIDDLE: BalanceBucket = BalanceBucket::From50To75k;

    pub const SPECIFIC: [BalanceBucket; 5] = [
        BalanceBucket::Under25k,
        BalanceBucket::From25To50k,
        BalanceBucket::From50To75k,
        BalanceBucket::From75To100k,
        BalanceBucket::Over100k,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BalanceBucket::All => "All",
            BalanceBucket::Under25k => "<$25k",
            BalanceBucket::From25To50k => "$25-50k",
            BalanceBucket::From50To75k => "$50-75k",
            BalanceBucket::From75To100k => "$75-100k",
            BalanceBucket::Over100k => ">$100k",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if label == "All" {
            return Some(BalanceBucket::All);
        }
        BalanceBucket::SPECIFIC
            .into_iter()
            .find(|b| b.label() == label)
    }

    /// Position of a specific bucket on the balance axis. `All` has no
    /// position; it is an aggregate, not a range.
    pub fn ordinal(&self) -> Option<u8> {
        match self {
            BalanceBucket::All => None,
            BalanceBucket::Under25k => Some(0),
            BalanceBucket::From25To50k => Some(1),
            BalanceBucket::From50To75k => Some(2),
            BalanceBucket::From75To100k => Some(3),
            BalanceBucket::Over100k => Some(4),
        }
    }

    /// Classify an average participant balance into its bucket.
    pub fn for_average_balance(average_balance: Money) -> Self {
        if average_balance < dec!(25_000) {
            BalanceBucket::Under25k
        } else if average_balance < dec!(50_000) {
            BalanceBucket::From25To50k
        } else if average_balance < dec!(75_000) {
            BalanceBucket::From50To75k
        } else if average_balance < dec!(100_000) {
            BalanceBucket::From75To100k
        } else {
            BalanceBucket::Over100k
        }
    }
}

// ---------------------------------------------------------------------------
// Service selections
// ---------------------------------------------------------------------------

/// The service flags a consultant ticked for one provider. Keys not present
/// read as false, so partial or absent selections are always well-defined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceSelections(pub BTreeMap<String, bool>);

impl ServiceSelections {
    pub fn is_selected(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    /// Number of flags ticked true, regardless of tier.
    pub fn selected_count(&self) -> usize {
        self.0.values().filter(|&&v| v).count()
    }

    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        ServiceSelections(keys.into_iter().map(|k| (k.to_string(), true)).collect())
    }

    pub fn set(&mut self, key: &str, selected: bool) {
        self.0.insert(key.to_string(), selected);
    }
}

/// Per-provider service selections for the whole plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceOptions {
    #[serde(default)]
    pub advisor: ServiceSelections,
    #[serde(default)]
    pub record_keeper: ServiceSelections,
    #[serde(default)]
    pub tpa: ServiceSelections,
    #[serde(default)]
    pub audit: ServiceSelections,
}

// ---------------------------------------------------------------------------
// Plan record
// ---------------------------------------------------------------------------

/// One retirement plan as entered by the consultant, already validated by
/// the input layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanData {
    pub assets_under_management: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_count: Option<u32>,
    /// AUM bucket the plan is benchmarked in.
    pub benchmark_category: AumBucket,
    /// Balance bucket the plan is benchmarked in, or `All`.
    pub balance_benchmark_category: BalanceBucket,
    pub fee_type: FeeType,
    pub fees: FeeSchedule,
    #[serde(default)]
    pub services: ServiceOptions,
}

impl PlanData {
    /// Average participant balance, when a participant count is known.
    pub fn average_balance(&self) -> Option<Money> {
        match self.participant_count {
            Some(n) if n > 0 => Some(self.assets_under_management / Decimal::from(n)),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
