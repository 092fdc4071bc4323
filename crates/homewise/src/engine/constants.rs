//! Every weight, threshold, and market constant the engine uses, in one
//! place. Tests assert against these names directly, and re-tuning a rule
//! never requires touching the components that apply it.

/// Sub-scores are capped before the final blend so one strong factor cannot
/// saturate the composite.
pub const SUB_SCORE_CAP: f64 = 95.0;

pub const SYSTEM_WEIGHT: f64 = 0.25;
pub const FINANCIAL_WEIGHT: f64 = 0.30;
pub const MAINTENANCE_WEIGHT: f64 = 0.25;
pub const GROWTH_WEIGHT: f64 = 0.20;

/// Neutral stand-in for task-history ratios when no completed tasks exist.
pub const DEFAULT_TASK_RATIO: f64 = 0.25;
/// Neutral stand-in for the preservation completion rate with no history.
pub const DEFAULT_COMPLETION_RATE: f64 = 0.5;

// System health factors.
pub const SYSTEM_PRESENCE_POINTS: f64 = 30.0;
pub const SYSTEM_CONDITION_POINTS: f64 = 40.0;
pub const SYSTEM_NO_CRITICAL_POINTS: f64 = 15.0;
pub const AGE_BONUS_YOUNG: f64 = 15.0;
pub const AGE_BONUS_MID: f64 = 10.0;
pub const AGE_BONUS_OLD: f64 = 5.0;
pub const AGE_YOUNG_YEARS: f64 = 10.0;
pub const AGE_MID_YEARS: f64 = 15.0;

// Financial health factors.
pub const EQUITY_POINTS: f64 = 35.0;
pub const EQUITY_TARGET_PCT: f64 = 50.0;
pub const FINANCIAL_BASE_POINTS: f64 = 25.0;
pub const EMERGENCY_RATIO_LOW: f64 = 0.3;
pub const EMERGENCY_RATIO_MID: f64 = 0.5;
pub const EMERGENCY_BONUS_LOW: f64 = 20.0;
pub const EMERGENCY_BONUS_MID: f64 = 10.0;
pub const SPEND_PCT_LEAN: f64 = 2.0;
pub const SPEND_PCT_TYPICAL: f64 = 3.0;
pub const SPEND_BONUS_LEAN: f64 = 15.0;
pub const SPEND_BONUS_TYPICAL: f64 = 10.0;
pub const SPEND_BONUS_HEAVY: f64 = 5.0;

// Maintenance discipline factors.
pub const PROACTIVE_WEIGHT: f64 = 0.4;
pub const COMPLETION_WEIGHT: f64 = 0.3;
pub const RECENCY_FRESH_DAYS: i64 = 90;
pub const RECENCY_STALE_DAYS: i64 = 180;
pub const RECENCY_BONUS_FRESH: f64 = 20.0;
pub const RECENCY_BONUS_OK: f64 = 15.0;
pub const RECENCY_BONUS_STALE: f64 = 5.0;
pub const DIY_RATIO_HANDY: f64 = 0.3;
pub const DIY_BONUS_HANDY: f64 = 10.0;
pub const DIY_BONUS_BASE: f64 = 5.0;

// Growth trajectory factors.
pub const APPRECIATION_TARGET_PCT: f64 = 5.0;
pub const APPRECIATION_POINTS_CAP: f64 = 40.0;
pub const UPGRADE_POINTS: f64 = 25.0;
pub const ROI_POINTS_CAP: f64 = 20.0;
pub const ROI_DIVISOR: f64 = 2.0;
pub const GROWTH_BASE_POINTS: f64 = 15.0;

// Capital option collection.
pub const URGENCY_PRESERVE_URGENT: f64 = 10.0;
pub const URGENCY_PRESERVE_RECOMMENDED: f64 = 7.0;
pub const URGENCY_PRESERVE_OPTIONAL: f64 = 4.0;
pub const UPGRADE_STRONG_ROI_MULTIPLE: f64 = 1.5;
pub const URGENCY_UPGRADE_STRONG: f64 = 6.0;
pub const URGENCY_UPGRADE_WEAK: f64 = 3.0;
pub const MORTGAGE_HIGH_RATE_PCT: f64 = 6.0;
pub const URGENCY_MORTGAGE_HIGH_RATE: f64 = 8.0;
pub const URGENCY_MORTGAGE_LOW_RATE: f64 = 5.0;
/// Diversified index baseline, nominal %/yr.
pub const MARKET_RETURN_PCT: f64 = 10.0;
pub const MARKET_URGENCY: f64 = 1.0;
pub const MARKET_ROI_SCORE: f64 = 0.10;

// Composite ranking.
pub const RANK_URGENCY_WEIGHT: f64 = 0.4;
pub const RANK_ROI_WEIGHT: f64 = 0.4;
pub const RANK_STRENGTH_WEIGHT: f64 = 0.2;
pub const STRENGTH_WEIGHT_CRITICAL: f64 = 1.0;
pub const STRENGTH_WEIGHT_STRONG: f64 = 0.85;
pub const STRENGTH_WEIGHT_RECOMMENDED: f64 = 0.7;
pub const STRENGTH_WEIGHT_CONSIDER: f64 = 0.4;

// Greedy allocation.
pub const HIGH_ROI_SCORE: f64 = 5.0;
/// Remainders at or below the reserve floor stay unallocated rather than
/// being swept into the market fallback.
pub const LIQUIDITY_RESERVE_FLOOR: f64 = 5_000.0;

// Projection defaults.
pub const DEFAULT_HORIZON_YEARS: u32 = 10;
pub const DEFAULT_APPRECIATION_RATE: f64 = 0.04;
pub const DEFAULT_AMORTIZATION_FACTOR: f64 = 0.92;

// Benchmark comparison thresholds (ratio = user / market).
pub const RATIO_MUCH_BETTER: f64 = 1.15;
pub const RATIO_ABOVE_AVERAGE: f64 = 1.05;
pub const RATIO_AVERAGE_FLOOR: f64 = 0.95;
pub const PENDING_PRESERVATION_ALERT: usize = 3;

/// Market-average tuple for one benchmark zone.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ZoneBenchmarks {
    pub emergency_ratio: f64,
    pub maintenance_spend_pct: f64,
    /// Fractional annual appreciation (0.042 means 4.2%/yr).
    pub appreciation_rate: f64,
    pub cap_rate: f64,
    pub equity_pct: f64,
}

pub const COLD_HUMID_BENCHMARKS: ZoneBenchmarks = ZoneBenchmarks {
    emergency_ratio: 0.18,
    maintenance_spend_pct: 2.4,
    appreciation_rate: 0.035,
    cap_rate: 0.058,
    equity_pct: 42.0,
};

pub const MIXED_HUMID_BENCHMARKS: ZoneBenchmarks = ZoneBenchmarks {
    emergency_ratio: 0.15,
    maintenance_spend_pct: 2.0,
    appreciation_rate: 0.042,
    cap_rate: 0.054,
    equity_pct: 45.0,
};

pub const HOT_HUMID_BENCHMARKS: ZoneBenchmarks = ZoneBenchmarks {
    emergency_ratio: 0.20,
    maintenance_spend_pct: 2.6,
    appreciation_rate: 0.048,
    cap_rate: 0.051,
    equity_pct: 40.0,
};

pub const HOT_ARID_BENCHMARKS: ZoneBenchmarks = ZoneBenchmarks {
    emergency_ratio: 0.12,
    maintenance_spend_pct: 1.7,
    appreciation_rate: 0.052,
    cap_rate: 0.049,
    equity_pct: 47.0,
};
