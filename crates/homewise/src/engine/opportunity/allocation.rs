use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{CapitalOption, CapitalOptionKind, StrengthTier};
use crate::engine::constants::{HIGH_ROI_SCORE, LIQUIDITY_RESERVE_FLOOR};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub option_rank: usize,
    pub amount: f64,
    pub reason: String,
}

/// Result of a greedy allocation pass over a ranked option list.
///
/// Invariant: `total_allocated + unallocated == available_amount` to the
/// cent, and no option receives more than one entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationPlan {
    pub available_amount: f64,
    pub ranked_options: Vec<CapitalOption>,
    pub entries: Vec<AllocationEntry>,
    pub total_allocated: f64,
    pub unallocated: f64,
    /// Optional narrative attached post-hoc by a text-generation
    /// collaborator; the numeric plan is complete without it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl AllocationPlan {
    fn empty(available: f64, ranked_options: Vec<CapitalOption>) -> Self {
        Self {
            available_amount: available,
            ranked_options,
            entries: Vec::new(),
            total_allocated: 0.0,
            unallocated: available,
            reasoning: None,
        }
    }
}

/// Greedily assign `available` across ranked options in three passes:
/// critical protection first, then high-ROI options, then a liquidity sweep
/// of the remainder into the market fallback. A budget that funds nothing
/// yields a valid plan with everything unallocated, not an error.
pub fn allocate_budget(ranked_options: &[CapitalOption], available: f64) -> AllocationPlan {
    if available <= 0.0 {
        return AllocationPlan::empty(0.0, ranked_options.to_vec());
    }

    let available = round_cents(available);
    let mut remaining = available;
    let mut entries: Vec<AllocationEntry> = Vec::new();
    let mut funded: HashSet<usize> = HashSet::new();

    // Pass 1: fully fund critical protection in rank order.
    for (index, option) in ranked_options.iter().enumerate() {
        if option.strength_tier != StrengthTier::Critical {
            continue;
        }
        let amount = round_cents(option.amount);
        if amount > 0.0 && remaining >= amount {
            entries.push(AllocationEntry {
                option_rank: option.rank,
                amount,
                reason: "Critical system protection".to_string(),
            });
            remaining = round_cents(remaining - amount);
            funded.insert(index);
        }
    }

    // Pass 2: fully fund remaining high-ROI options in rank order.
    for (index, option) in ranked_options.iter().enumerate() {
        if funded.contains(&index) || option.roi_score <= HIGH_ROI_SCORE {
            continue;
        }
        let amount = round_cents(option.amount);
        if amount > 0.0 && remaining >= amount {
            entries.push(AllocationEntry {
                option_rank: option.rank,
                amount,
                reason: format!("High ROI ({:.1}x)", option.roi_score),
            });
            remaining = round_cents(remaining - amount);
            funded.insert(index);
        }
    }

    // Pass 3: sweep anything above the reserve floor into the market
    // fallback so idle cash stays invested.
    if remaining > LIQUIDITY_RESERVE_FLOOR {
        let fallback = ranked_options
            .iter()
            .enumerate()
            .find(|(index, option)| {
                option.kind == CapitalOptionKind::MarketInvestment && !funded.contains(index)
            });
        if let Some((index, option)) = fallback {
            entries.push(AllocationEntry {
                option_rank: option.rank,
                amount: remaining,
                reason: "Maintain liquidity and diversification".to_string(),
            });
            funded.insert(index);
            remaining = 0.0;
        }
    }

    let total_allocated = round_cents(available - remaining);

    AllocationPlan {
        available_amount: available,
        ranked_options: ranked_options.to_vec(),
        entries,
        total_allocated,
        unallocated: remaining,
        reasoning: None,
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
