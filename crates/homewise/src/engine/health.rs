//! Composite property health scoring.
//!
//! Four weighted sub-scores (system condition, financial position,
//! maintenance discipline, growth trajectory), each capped before the final
//! blend. Missing record collections fall back to the neutral defaults in
//! [`super::constants`] rather than failing.

use serde::{Deserialize, Serialize};

use super::constants::*;
use super::domain::{
    completion_rate, diy_ratio, emergency_ratio, InspectionRecord, PropertyContext, SystemRecord,
    TaskRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBreakdown {
    pub system: u8,
    pub financial: u8,
    pub maintenance: u8,
    pub growth: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScore {
    pub overall: u8,
    pub breakdown: HealthBreakdown,
}

/// Blend the four sub-scores into a 0-100 composite.
pub fn compute_health_score(
    context: &PropertyContext,
    systems: &[SystemRecord],
    tasks: &[TaskRecord],
    inspections: &[InspectionRecord],
) -> HealthScore {
    let system = system_health(systems, context.current_year());
    let financial = financial_health(context, tasks);
    let maintenance = maintenance_health(context, tasks, inspections);
    let growth = growth_health(context);

    let overall = (SYSTEM_WEIGHT * system
        + FINANCIAL_WEIGHT * financial
        + MAINTENANCE_WEIGHT * maintenance
        + GROWTH_WEIGHT * growth)
        .round()
        .clamp(0.0, 100.0);

    HealthScore {
        overall: overall as u8,
        breakdown: HealthBreakdown {
            system: system as u8,
            financial: financial as u8,
            maintenance: maintenance as u8,
            growth: growth as u8,
        },
    }
}

fn system_health(systems: &[SystemRecord], current_year: i32) -> f64 {
    if systems.is_empty() {
        // No tracked systems scores a zero baseline; the other factors carry
        // the composite.
        return 0.0;
    }

    let total = systems.len() as f64;
    let good = systems
        .iter()
        .filter(|system| system.condition.is_good())
        .count() as f64;
    let critical = systems
        .iter()
        .filter(|system| system.condition.needs_attention())
        .count();
    let avg_age = systems
        .iter()
        .map(|system| system.age(current_year) as f64)
        .sum::<f64>()
        / total;

    let age_bonus = if avg_age < AGE_YOUNG_YEARS {
        AGE_BONUS_YOUNG
    } else if avg_age < AGE_MID_YEARS {
        AGE_BONUS_MID
    } else {
        AGE_BONUS_OLD
    };

    let no_critical = if critical == 0 {
        SYSTEM_NO_CRITICAL_POINTS
    } else {
        0.0
    };

    cap(SYSTEM_PRESENCE_POINTS + SYSTEM_CONDITION_POINTS * (good / total) + no_critical + age_bonus)
}

fn financial_health(context: &PropertyContext, tasks: &[TaskRecord]) -> f64 {
    let equity_points = EQUITY_POINTS * (context.equity_pct / EQUITY_TARGET_PCT);

    let ratio = emergency_ratio(tasks);
    let emergency_bonus = if ratio < EMERGENCY_RATIO_LOW {
        EMERGENCY_BONUS_LOW
    } else if ratio < EMERGENCY_RATIO_MID {
        EMERGENCY_BONUS_MID
    } else {
        0.0
    };

    let spend_bonus = if context.maintenance_spend_pct < SPEND_PCT_LEAN {
        SPEND_BONUS_LEAN
    } else if context.maintenance_spend_pct < SPEND_PCT_TYPICAL {
        SPEND_BONUS_TYPICAL
    } else {
        SPEND_BONUS_HEAVY
    };

    cap(equity_points + emergency_bonus + spend_bonus + FINANCIAL_BASE_POINTS)
}

fn maintenance_health(
    context: &PropertyContext,
    tasks: &[TaskRecord],
    inspections: &[InspectionRecord],
) -> f64 {
    let proactive = PROACTIVE_WEIGHT * (100.0 - 100.0 * emergency_ratio(tasks));
    let completion = COMPLETION_WEIGHT * (100.0 * completion_rate(tasks));

    let recency_bonus = match inspections
        .iter()
        .map(|inspection| (context.today - inspection.created_at).num_days())
        .min()
    {
        Some(days) if days < RECENCY_FRESH_DAYS => RECENCY_BONUS_FRESH,
        Some(days) if days < RECENCY_STALE_DAYS => RECENCY_BONUS_OK,
        _ => RECENCY_BONUS_STALE,
    };

    let diy_bonus = if diy_ratio(tasks) >= DIY_RATIO_HANDY {
        DIY_BONUS_HANDY
    } else {
        DIY_BONUS_BASE
    };

    cap(proactive + completion + recency_bonus + diy_bonus)
}

fn growth_health(context: &PropertyContext) -> f64 {
    let appreciation_points = (context.appreciation_pct / APPRECIATION_TARGET_PCT * 100.0)
        .min(APPRECIATION_POINTS_CAP)
        .max(0.0);
    let upgrade_points = if context.completed_upgrade_count > 0 {
        UPGRADE_POINTS
    } else {
        0.0
    };
    let roi_points = (context.realized_roi_pct / ROI_DIVISOR)
        .min(ROI_POINTS_CAP)
        .max(0.0);

    cap(appreciation_points + upgrade_points + roi_points + GROWTH_BASE_POINTS)
}

fn cap(raw: f64) -> f64 {
    raw.round().clamp(0.0, SUB_SCORE_CAP)
}
