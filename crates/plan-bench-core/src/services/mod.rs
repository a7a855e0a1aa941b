pub mod baseline;
pub mod coverage;
pub mod score;

pub use baseline::{baseline_for, ProviderKind, ServiceBaseline, ServiceFlag};
pub use coverage::{calculate_service_coverage, ServiceCoverage, TierCoverage};
pub use score::{
    calculate_service_value_score, missing_essential_services, PlanSizeBracket, ProviderScores,
    ServiceValueScore,
};
