//! Service baselines: the fixed partition of each provider's named service
//! flags into essential, standard, and premium tiers.
//!
//! The partitions are authoring-time constants. Keys are what consultants'
//! saved plans carry; labels are what insight strings and reports show.

use serde::{Deserialize, Serialize};

/// The four provider types whose services are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Advisor,
    RecordKeeper,
    Tpa,
    Audit,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Advisor,
        ProviderKind::RecordKeeper,
        ProviderKind::Tpa,
        ProviderKind::Audit,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Advisor => "advisor",
            ProviderKind::RecordKeeper => "record keeper",
            ProviderKind::Tpa => "TPA",
            ProviderKind::Audit => "audit",
        }
    }
}

/// One named service offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceFlag {
    pub key: &'static str,
    pub label: &'static str,
}

const fn flag(key: &'static str, label: &'static str) -> ServiceFlag {
    ServiceFlag { key, label }
}

/// A provider's flags partitioned by criticality tier.
#[derive(Debug, Clone, Copy)]
pub struct ServiceBaseline {
    pub provider: ProviderKind,
    pub essential: &'static [ServiceFlag],
    pub standard: &'static [ServiceFlag],
    pub premium: &'static [ServiceFlag],
}

impl ServiceBaseline {
    pub fn all_flags(&self) -> impl Iterator<Item = &ServiceFlag> {
        self.essential
            .iter()
            .chain(self.standard.iter())
            .chain(self.premium.iter())
    }

    pub fn flag_count(&self) -> usize {
        self.essential.len() + self.standard.len() + self.premium.len()
    }
}

pub const ADVISOR_BASELINE: ServiceBaseline = ServiceBaseline {
    provider: ProviderKind::Advisor,
    essential: &[
        flag("investment_monitoring", "Investment menu selection and monitoring"),
        flag("employee_education", "Employee education meetings"),
        flag("fiduciary_guidance", "Fiduciary plan governance guidance"),
    ],
    standard: &[
        flag("provider_benchmarking", "Provider fee benchmarking"),
        flag("committee_meetings", "Investment committee meetings"),
        flag("plan_design_consulting", "Plan design consulting"),
    ],
    premium: &[
        flag("one_on_one_advice", "One-on-one participant advice"),
        flag("financial_wellness", "Financial wellness programming"),
    ],
};

pub const RECORD_KEEPER_BASELINE: ServiceBaseline = ServiceBaseline {
    provider: ProviderKind::RecordKeeper,
    essential: &[
        flag("participant_website", "Participant web portal"),
        flag("daily_valuation", "Daily valuation recordkeeping"),
        flag("call_center", "Participant call center"),
    ],
    standard: &[
        flag("mobile_app", "Mobile app access"),
        flag("auto_enrollment", "Auto-enrollment support"),
        flag("loan_administration", "Loan administration"),
        flag("distribution_processing", "Distribution processing"),
    ],
    premium: &[
        flag("managed_accounts", "Managed account program"),
        flag("brokerage_window", "Self-directed brokerage window"),
    ],
};

pub const TPA_BASELINE: ServiceBaseline = ServiceBaseline {
    provider: ProviderKind::Tpa,
    essential: &[
        flag("form_5500", "Form 5500 preparation"),
        flag("compliance_testing", "Annual nondiscrimination testing"),
        flag("plan_document", "Plan document maintenance"),
    ],
    standard: &[
        flag("eligibility_tracking", "Eligibility tracking"),
        flag("vesting_tracking", "Vesting calculations"),
        flag("amendment_support", "Plan amendment support"),
    ],
    premium: &[
        flag("correction_support", "Compliance correction support"),
        flag("consulting_services", "Ad hoc compliance consulting"),
    ],
};

pub const AUDIT_BASELINE: ServiceBaseline = ServiceBaseline {
    provider: ProviderKind::Audit,
    essential: &[
        flag("annual_audit", "Annual plan audit"),
        flag("audit_report", "Audited financial statements"),
    ],
    standard: &[
        flag("internal_controls_review", "Internal controls review"),
        flag("participant_data_testing", "Participant data testing"),
    ],
    premium: &[flag("pre_audit_readiness", "Pre-audit readiness review")],
};

pub fn baseline_for(provider: ProviderKind) -> &'static ServiceBaseline {
    match provider {
        ProviderKind::Advisor => &ADVISOR_BASELINE,
        ProviderKind::RecordKeeper => &RECORD_KEEPER_BASELINE,
        ProviderKind::Tpa => &TPA_BASELINE,
        ProviderKind::Audit => &AUDIT_BASELINE,
    }
}
