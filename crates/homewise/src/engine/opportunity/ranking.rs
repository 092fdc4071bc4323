use std::cmp::Ordering;

use super::CapitalOption;
use crate::engine::constants::{RANK_ROI_WEIGHT, RANK_STRENGTH_WEIGHT, RANK_URGENCY_WEIGHT};

/// Score and sort options, assigning 1-based ranks.
///
/// The sort is stable, so ties keep insertion order and identical input
/// always produces identical output.
pub fn rank_options(mut options: Vec<CapitalOption>) -> Vec<CapitalOption> {
    for option in &mut options {
        option.composite_score = composite_score(option);
    }

    options.sort_by(|a, b| {
        b.composite_score
            .partial_cmp(&a.composite_score)
            .unwrap_or(Ordering::Equal)
    });

    for (index, option) in options.iter_mut().enumerate() {
        option.rank = index + 1;
    }
    options
}

pub(crate) fn composite_score(option: &CapitalOption) -> f64 {
    RANK_URGENCY_WEIGHT * (option.urgency_score / 10.0)
        + RANK_ROI_WEIGHT * (option.roi_score / 10.0).min(1.0)
        + RANK_STRENGTH_WEIGHT * option.strength_tier.weight()
}
