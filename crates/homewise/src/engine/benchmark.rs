//! Regional benchmark comparison.
//!
//! Realized portfolio metrics are aggregated from historical records and
//! compared against a fixed per-zone constant table. Comparison is a plain
//! user/market ratio with banded ratings; metrics where lower is better
//! invert the bands. A zero market value short-circuits to parity rather
//! than dividing.

use serde::{Deserialize, Serialize};

use super::constants::{
    ZoneBenchmarks, COLD_HUMID_BENCHMARKS, HOT_ARID_BENCHMARKS, HOT_HUMID_BENCHMARKS,
    MIXED_HUMID_BENCHMARKS, PENDING_PRESERVATION_ALERT, RATIO_ABOVE_AVERAGE, RATIO_AVERAGE_FLOOR,
    RATIO_MUCH_BETTER,
};
use super::domain::{
    emergency_ratio, EquitySnapshot, PreservationRecommendation, PreservationStatus,
    PropertyContext, TaskRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateZone {
    ColdHumid,
    MixedHumid,
    HotHumid,
    HotArid,
}

impl ClimateZone {
    /// Fallback when the caller's zone is unknown or unset.
    pub const DEFAULT: Self = Self::MixedHumid;

    pub const fn ordered() -> [Self; 4] {
        [
            Self::ColdHumid,
            Self::MixedHumid,
            Self::HotHumid,
            Self::HotArid,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ColdHumid => "Cold Humid",
            Self::MixedHumid => "Mixed Humid",
            Self::HotHumid => "Hot Humid",
            Self::HotArid => "Hot Arid",
        }
    }

    /// Tolerant key lookup for config/API input; unknown keys yield `None`
    /// and callers fall back to [`ClimateZone::DEFAULT`].
    pub fn from_key(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "cold_humid" => Some(Self::ColdHumid),
            "mixed_humid" => Some(Self::MixedHumid),
            "hot_humid" => Some(Self::HotHumid),
            "hot_arid" => Some(Self::HotArid),
            _ => None,
        }
    }

    pub const fn benchmarks(self) -> &'static ZoneBenchmarks {
        match self {
            Self::ColdHumid => &COLD_HUMID_BENCHMARKS,
            Self::MixedHumid => &MIXED_HUMID_BENCHMARKS,
            Self::HotHumid => &HOT_HUMID_BENCHMARKS,
            Self::HotArid => &HOT_ARID_BENCHMARKS,
        }
    }
}

/// Realized portfolio metrics in the same units as [`ZoneBenchmarks`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMetrics {
    pub emergency_ratio: f64,
    pub maintenance_spend_pct: f64,
    /// Fractional annual appreciation.
    pub appreciation_rate: f64,
    pub cap_rate: f64,
    pub equity_pct: f64,
    #[serde(default)]
    pub pending_preservation_count: usize,
}

impl UserMetrics {
    /// Reduce historical records into comparable metrics. Missing data
    /// resolves to the context figure or zero, never to a panic.
    pub fn from_records(
        context: &PropertyContext,
        tasks: &[TaskRecord],
        equity_snapshots: &[EquitySnapshot],
        preservation: &[PreservationRecommendation],
    ) -> Self {
        let total_value: f64 = equity_snapshots
            .iter()
            .map(|snapshot| snapshot.current_market_value)
            .sum();
        let total_equity: f64 = equity_snapshots.iter().map(EquitySnapshot::equity).sum();
        let equity_pct = if total_value > 0.0 {
            total_equity / total_value * 100.0
        } else {
            context.equity_pct
        };

        let rentals: Vec<&EquitySnapshot> = equity_snapshots
            .iter()
            .filter(|snapshot| snapshot.is_rental && snapshot.cap_rate > 0.0)
            .collect();
        let cap_rate = if rentals.is_empty() {
            0.0
        } else {
            rentals.iter().map(|snapshot| snapshot.cap_rate).sum::<f64>() / rentals.len() as f64
        };

        let pending_preservation_count = preservation
            .iter()
            .filter(|rec| {
                matches!(
                    rec.status,
                    PreservationStatus::Pending | PreservationStatus::Scheduled
                )
            })
            .count();

        Self {
            emergency_ratio: emergency_ratio(tasks),
            maintenance_spend_pct: context.maintenance_spend_pct,
            appreciation_rate: context.appreciation_pct / 100.0,
            cap_rate,
            equity_pct,
            pending_preservation_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonRating {
    MuchBetter,
    AboveAverage,
    Average,
    BelowAverage,
}

impl ComparisonRating {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MuchBetter => "Much Better",
            Self::AboveAverage => "Above Average",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
        }
    }
}

// Response-only; `metric` points at static names, so no Deserialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricComparison {
    pub metric: &'static str,
    pub user_value: f64,
    pub market_value: f64,
    pub ratio: f64,
    pub rating: ComparisonRating,
    pub lower_is_better: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub zone: ClimateZone,
    pub comparisons: Vec<MetricComparison>,
    pub strengths: Vec<String>,
    pub opportunities: Vec<String>,
}

impl BenchmarkReport {
    pub fn rating_for(&self, metric: &str) -> Option<ComparisonRating> {
        self.comparisons
            .iter()
            .find(|comparison| comparison.metric == metric)
            .map(|comparison| comparison.rating)
    }
}

/// Compare realized metrics against the zone's market constants.
pub fn compare_to_benchmark(metrics: &UserMetrics, zone: ClimateZone) -> BenchmarkReport {
    let market = zone.benchmarks();

    let comparisons = vec![
        compare_metric("emergency_ratio", metrics.emergency_ratio, market.emergency_ratio, true),
        compare_metric(
            "maintenance_spend_pct",
            metrics.maintenance_spend_pct,
            market.maintenance_spend_pct,
            true,
        ),
        compare_metric(
            "appreciation_rate",
            metrics.appreciation_rate,
            market.appreciation_rate,
            false,
        ),
        compare_metric("cap_rate", metrics.cap_rate, market.cap_rate, false),
        compare_metric("equity_pct", metrics.equity_pct, market.equity_pct, false),
    ];

    BenchmarkReport {
        zone,
        strengths: collect_strengths(metrics, market),
        opportunities: collect_opportunities(metrics, market),
        comparisons,
    }
}

fn compare_metric(
    metric: &'static str,
    user_value: f64,
    market_value: f64,
    lower_is_better: bool,
) -> MetricComparison {
    // Zero market data means nothing to compare against; report parity.
    if market_value == 0.0 {
        return MetricComparison {
            metric,
            user_value,
            market_value,
            ratio: 1.0,
            rating: ComparisonRating::Average,
            lower_is_better,
        };
    }

    let ratio = user_value / market_value;
    let rating = if lower_is_better {
        if ratio < 2.0 - RATIO_MUCH_BETTER {
            ComparisonRating::MuchBetter
        } else if ratio < 2.0 - RATIO_ABOVE_AVERAGE {
            ComparisonRating::AboveAverage
        } else if ratio <= 2.0 - RATIO_AVERAGE_FLOOR {
            ComparisonRating::Average
        } else {
            ComparisonRating::BelowAverage
        }
    } else if ratio > RATIO_MUCH_BETTER {
        ComparisonRating::MuchBetter
    } else if ratio > RATIO_ABOVE_AVERAGE {
        ComparisonRating::AboveAverage
    } else if ratio >= RATIO_AVERAGE_FLOOR {
        ComparisonRating::Average
    } else {
        ComparisonRating::BelowAverage
    };

    MetricComparison {
        metric,
        user_value,
        market_value,
        ratio,
        rating,
        lower_is_better,
    }
}

// Each rule below stands alone; evaluation order only affects list order.

fn collect_strengths(metrics: &UserMetrics, market: &ZoneBenchmarks) -> Vec<String> {
    let mut strengths = Vec::new();

    if metrics.emergency_ratio < market.emergency_ratio {
        strengths.push(format!(
            "Emergency repairs run below the area norm ({:.0}% vs {:.0}% of completed work)",
            metrics.emergency_ratio * 100.0,
            market.emergency_ratio * 100.0
        ));
    }
    if metrics.maintenance_spend_pct < market.maintenance_spend_pct {
        strengths.push(format!(
            "Maintenance spend is lean at {:.1}% of value against a {:.1}% market average",
            metrics.maintenance_spend_pct, market.maintenance_spend_pct
        ));
    }
    if metrics.appreciation_rate > market.appreciation_rate {
        strengths.push(format!(
            "Appreciation of {:.1}%/yr outpaces the zone's {:.1}%/yr",
            metrics.appreciation_rate * 100.0,
            market.appreciation_rate * 100.0
        ));
    }
    if metrics.cap_rate > market.cap_rate {
        strengths.push(format!(
            "Rental yield of {:.1}% beats the {:.1}% market cap rate",
            metrics.cap_rate * 100.0,
            market.cap_rate * 100.0
        ));
    }
    if metrics.equity_pct > market.equity_pct {
        strengths.push(format!(
            "Equity position of {:.0}% exceeds the regional {:.0}%",
            metrics.equity_pct, market.equity_pct
        ));
    }

    strengths
}

fn collect_opportunities(metrics: &UserMetrics, market: &ZoneBenchmarks) -> Vec<String> {
    let mut opportunities = Vec::new();

    if metrics.pending_preservation_count > PENDING_PRESERVATION_ALERT {
        opportunities.push(format!(
            "{} preservation recommendations are still open; schedule the urgent ones first",
            metrics.pending_preservation_count
        ));
    }
    if metrics.emergency_ratio > market.emergency_ratio {
        opportunities.push(
            "Emergency work exceeds the area norm; shift budget toward preventive care".to_string(),
        );
    }
    if metrics.maintenance_spend_pct > market.maintenance_spend_pct {
        opportunities.push(format!(
            "Maintenance spend of {:.1}% of value is above the {:.1}% market average",
            metrics.maintenance_spend_pct, market.maintenance_spend_pct
        ));
    }
    if metrics.appreciation_rate < market.appreciation_rate {
        opportunities.push(
            "Appreciation trails the zone; value-add upgrades could close the gap".to_string(),
        );
    }
    if metrics.equity_pct < market.equity_pct {
        opportunities.push(format!(
            "Equity of {:.0}% sits below the regional {:.0}%; consider accelerated paydown",
            metrics.equity_pct, market.equity_pct
        ));
    }

    opportunities
}

#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn zero_market_value_short_circuits_to_average() {
        for lower_is_better in [false, true] {
            let comparison = compare_metric("cap_rate", 0.06, 0.0, lower_is_better);
            assert_eq!(comparison.rating, ComparisonRating::Average);
            assert_eq!(comparison.ratio, 1.0);
        }
    }

    #[test]
    fn rating_band_edges_are_exclusive() {
        // ratio exactly 1.15 is only above average; 0.95 is still average.
        let above = compare_metric("equity_pct", 1.15, 1.0, false);
        assert_eq!(above.rating, ComparisonRating::AboveAverage);
        let floor = compare_metric("equity_pct", 0.95, 1.0, false);
        assert_eq!(floor.rating, ComparisonRating::Average);
    }
}
