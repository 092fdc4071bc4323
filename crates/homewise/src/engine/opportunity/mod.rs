//! Capital option collection, ranking, and budget allocation.
//!
//! Four heterogeneous sources (preservation recommendations, planned
//! upgrades, mortgage paydown candidates, a market-index baseline) are
//! flattened into a uniform option list, scored, and greedily funded. The
//! pipeline is deliberately a bounded heuristic, not an optimizer: output is
//! deterministic and explainable, not globally optimal.

mod allocation;
mod ranking;

pub use allocation::{allocate_budget, AllocationEntry, AllocationPlan};
pub use ranking::rank_options;

use serde::{Deserialize, Serialize};

use super::constants::*;
use super::domain::{
    EquitySnapshot, PreservationRecommendation, PreservationStatus, UpgradeRecord, UpgradeStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapitalOptionKind {
    Preserve,
    Upgrade,
    MortgagePaydown,
    MarketInvestment,
}

impl CapitalOptionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Preserve => "Preservation",
            Self::Upgrade => "Upgrade",
            Self::MortgagePaydown => "Mortgage Paydown",
            Self::MarketInvestment => "Market Investment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrengthTier {
    Critical,
    Strong,
    Recommended,
    Consider,
}

impl StrengthTier {
    pub const fn weight(self) -> f64 {
        match self {
            Self::Critical => STRENGTH_WEIGHT_CRITICAL,
            Self::Strong => STRENGTH_WEIGHT_STRONG,
            Self::Recommended => STRENGTH_WEIGHT_RECOMMENDED,
            Self::Consider => STRENGTH_WEIGHT_CONSIDER,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Strong => "Strong",
            Self::Recommended => "Recommended",
            Self::Consider => "Consider",
        }
    }
}

/// One competing use of capital, built fresh on every request and never
/// persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapitalOption {
    pub kind: CapitalOptionKind,
    pub label: String,
    pub amount: f64,
    /// Headline return figure shown to the user, in percent.
    pub expected_return_pct: f64,
    /// 0-10, higher means act sooner.
    pub urgency_score: f64,
    pub roi_score: f64,
    pub strength_tier: StrengthTier,
    /// Assigned by the ranker; zero until ranked.
    pub composite_score: f64,
    /// 1-based rank after sorting; zero until ranked.
    pub rank: usize,
}

/// Flatten the four capital sources into unranked options.
pub fn collect_options(
    preservation: &[PreservationRecommendation],
    upgrades: &[UpgradeRecord],
    equity_snapshots: &[EquitySnapshot],
    budget: f64,
) -> Vec<CapitalOption> {
    let mut options = Vec::new();

    for rec in preservation {
        if matches!(
            rec.status,
            PreservationStatus::Completed | PreservationStatus::Dismissed
        ) {
            continue;
        }
        options.push(preservation_option(rec));
    }

    for upgrade in upgrades {
        if upgrade.status == UpgradeStatus::Completed {
            continue;
        }
        options.push(upgrade_option(upgrade));
    }

    for snapshot in equity_snapshots {
        if snapshot.mortgage_balance > 0.0 {
            options.push(paydown_option(snapshot, budget));
        }
    }

    // The index baseline is always present as the liquidity fallback.
    options.push(market_option(budget));
    options
}

/// Collection followed by deterministic ranking; the usual entry point.
pub fn collect_and_rank_options(
    preservation: &[PreservationRecommendation],
    upgrades: &[UpgradeRecord],
    equity_snapshots: &[EquitySnapshot],
    budget: f64,
) -> Vec<CapitalOption> {
    rank_options(collect_options(preservation, upgrades, equity_snapshots, budget))
}

fn preservation_option(rec: &PreservationRecommendation) -> CapitalOption {
    use super::domain::PreservationPriority::*;

    let urgency_score = match rec.priority {
        Urgent => URGENCY_PRESERVE_URGENT,
        Recommended => URGENCY_PRESERVE_RECOMMENDED,
        Optional => URGENCY_PRESERVE_OPTIONAL,
    };
    let strength_tier = if rec.priority == Urgent {
        StrengthTier::Critical
    } else {
        StrengthTier::Recommended
    };

    CapitalOption {
        kind: CapitalOptionKind::Preserve,
        label: format!("Preserve {}", rec.id),
        amount: rec.estimated_cost_min,
        expected_return_pct: rec.roi_multiple * 100.0,
        urgency_score,
        roi_score: rec.roi_multiple,
        strength_tier,
        composite_score: 0.0,
        rank: 0,
    }
}

fn upgrade_option(upgrade: &UpgradeRecord) -> CapitalOption {
    let roi_multiple =
        upgrade.property_value_impact / upgrade.investment_required.max(1.0);
    let strong = roi_multiple > UPGRADE_STRONG_ROI_MULTIPLE;

    CapitalOption {
        kind: CapitalOptionKind::Upgrade,
        label: format!("Upgrade {}", upgrade.id),
        amount: upgrade.investment_required,
        expected_return_pct: roi_multiple * 100.0,
        urgency_score: if strong {
            URGENCY_UPGRADE_STRONG
        } else {
            URGENCY_UPGRADE_WEAK
        },
        roi_score: roi_multiple,
        strength_tier: if strong {
            StrengthTier::Recommended
        } else {
            StrengthTier::Consider
        },
        composite_score: 0.0,
        rank: 0,
    }
}

fn paydown_option(snapshot: &EquitySnapshot, budget: f64) -> CapitalOption {
    let high_rate = snapshot.mortgage_interest_rate > MORTGAGE_HIGH_RATE_PCT;

    CapitalOption {
        kind: CapitalOptionKind::MortgagePaydown,
        label: format!("Pay down mortgage on {}", snapshot.property_id),
        amount: budget.max(0.0).min(snapshot.mortgage_balance),
        expected_return_pct: snapshot.mortgage_interest_rate,
        urgency_score: if high_rate {
            URGENCY_MORTGAGE_HIGH_RATE
        } else {
            URGENCY_MORTGAGE_LOW_RATE
        },
        // Guaranteed, risk-free return equal to the interest avoided.
        roi_score: snapshot.mortgage_interest_rate / 100.0,
        strength_tier: if high_rate {
            StrengthTier::Strong
        } else {
            StrengthTier::Recommended
        },
        composite_score: 0.0,
        rank: 0,
    }
}

fn market_option(budget: f64) -> CapitalOption {
    CapitalOption {
        kind: CapitalOptionKind::MarketInvestment,
        label: "Diversified index fund".to_string(),
        amount: budget.max(0.0),
        expected_return_pct: MARKET_RETURN_PCT,
        urgency_score: MARKET_URGENCY,
        roi_score: MARKET_ROI_SCORE,
        strength_tier: StrengthTier::Consider,
        composite_score: 0.0,
        rank: 0,
    }
}
