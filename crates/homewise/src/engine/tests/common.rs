use chrono::NaiveDate;

use crate::engine::domain::{
    CompletedBy, EquitySnapshot, InspectionRecord, PreservationPriority,
    PreservationRecommendation, PreservationStatus, PropertyContext, SystemCondition,
    SystemRecord, TaskPriority, TaskRecord, TaskStatus, UpgradeRecord, UpgradeStatus,
};

pub(super) fn eval_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid evaluation date")
}

pub(super) fn context() -> PropertyContext {
    PropertyContext {
        today: eval_date(),
        market_value: 400_000.0,
        equity_pct: 40.0,
        maintenance_spend_pct: 1.8,
        appreciation_pct: 4.0,
        completed_upgrade_count: 1,
        realized_roi_pct: 12.0,
    }
}

pub(super) fn empty_context() -> PropertyContext {
    PropertyContext {
        today: eval_date(),
        market_value: 0.0,
        equity_pct: 0.0,
        maintenance_spend_pct: 0.0,
        appreciation_pct: 0.0,
        completed_upgrade_count: 0,
        realized_roi_pct: 0.0,
    }
}

pub(super) fn system(id: &str, installation_year: i32, condition: SystemCondition) -> SystemRecord {
    SystemRecord {
        id: id.to_string(),
        system_type: "hvac".to_string(),
        installation_year,
        estimated_lifespan_years: 20,
        lifespan_extension_years: 0,
        condition,
        replacement_cost_estimate: 9_000.0,
    }
}

pub(super) fn completed_task(id: &str, priority: TaskPriority, by: CompletedBy) -> TaskRecord {
    TaskRecord {
        id: id.to_string(),
        status: TaskStatus::Completed,
        priority,
        actual_cost: 250.0,
        completed_at: NaiveDate::from_ymd_opt(2026, 3, 1),
        completed_by: Some(by),
    }
}

pub(super) fn pending_task(id: &str) -> TaskRecord {
    TaskRecord {
        id: id.to_string(),
        status: TaskStatus::Pending,
        priority: TaskPriority::Medium,
        actual_cost: 0.0,
        completed_at: None,
        completed_by: None,
    }
}

pub(super) fn inspection(id: &str, created_at: NaiveDate) -> InspectionRecord {
    InspectionRecord {
        id: id.to_string(),
        created_at,
    }
}

pub(super) fn preservation(
    id: &str,
    priority: PreservationPriority,
    cost_min: f64,
    roi_multiple: f64,
) -> PreservationRecommendation {
    PreservationRecommendation {
        id: id.to_string(),
        priority,
        status: PreservationStatus::Pending,
        estimated_cost_min: cost_min,
        estimated_cost_max: cost_min * 1.4,
        roi_multiple,
        expected_lifespan_extension_years: 5,
        recommended_deadline: NaiveDate::from_ymd_opt(2026, 12, 31),
    }
}

pub(super) fn upgrade(id: &str, investment: f64, value_impact: f64) -> UpgradeRecord {
    UpgradeRecord {
        id: id.to_string(),
        status: UpgradeStatus::Planned,
        investment_required: investment,
        property_value_impact: value_impact,
    }
}

pub(super) fn equity_snapshot(property_id: &str, value: f64, balance: f64, rate: f64) -> EquitySnapshot {
    EquitySnapshot {
        property_id: property_id.to_string(),
        current_market_value: value,
        mortgage_balance: balance,
        mortgage_interest_rate: rate,
        is_rental: false,
        monthly_noi: 0.0,
        cap_rate: 0.0,
    }
}
