//! Conversion of raw, partially-filled entity payloads into the engine's
//! normalized records.
//!
//! Upstream sources leave numeric fields blank and spell enum values
//! inconsistently, so every field here has an explicit documented default
//! and enum parsing is key-normalized. Normalization never fails; bad data
//! degrades to defaults.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use super::domain::{
    CompletedBy, EquitySnapshot, InspectionRecord, PreservationPriority,
    PreservationRecommendation, PreservationStatus, PropertyContext, SystemCondition,
    SystemRecord, TaskPriority, TaskRecord, TaskStatus, UpgradeRecord, UpgradeStatus,
};

/// Collapse whitespace and case so enum keys from different sources compare
/// equal.
pub(crate) fn normalize_key(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .replace('-', "_")
        .to_ascii_lowercase()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSystemRecord {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub system_type: Option<String>,
    pub installation_year: Option<i32>,
    pub estimated_lifespan_years: Option<u32>,
    pub lifespan_extension_years: Option<u32>,
    pub condition: Option<String>,
    pub replacement_cost_estimate: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTaskRecord {
    pub id: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub actual_cost: Option<f64>,
    pub completed_at: Option<NaiveDate>,
    pub completed_by: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInspectionRecord {
    pub id: Option<String>,
    pub created_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPreservationRecommendation {
    pub id: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub estimated_cost_min: Option<f64>,
    pub estimated_cost_max: Option<f64>,
    pub roi_multiple: Option<f64>,
    pub expected_lifespan_extension_years: Option<u32>,
    pub recommended_deadline: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUpgradeRecord {
    pub id: Option<String>,
    pub status: Option<String>,
    pub investment_required: Option<f64>,
    pub property_value_impact: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEquitySnapshot {
    pub property_id: Option<String>,
    pub current_market_value: Option<f64>,
    pub mortgage_balance: Option<f64>,
    pub mortgage_interest_rate: Option<f64>,
    pub is_rental: Option<bool>,
    pub monthly_noi: Option<f64>,
    pub cap_rate: Option<f64>,
}

/// Defaults: unnamed systems get positional ids, unknown conditions read as
/// Fair, unset installation years read as new this year, lifespan 20y.
pub fn normalize_systems(raw: Vec<RawSystemRecord>, current_year: i32) -> Vec<SystemRecord> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| SystemRecord {
            id: record.id.unwrap_or_else(|| format!("system-{}", index + 1)),
            system_type: record.system_type.unwrap_or_else(|| "general".to_string()),
            installation_year: record.installation_year.unwrap_or(current_year),
            estimated_lifespan_years: record.estimated_lifespan_years.unwrap_or(20),
            lifespan_extension_years: record.lifespan_extension_years.unwrap_or(0),
            condition: record
                .condition
                .as_deref()
                .and_then(parse_condition)
                .unwrap_or(SystemCondition::Fair),
            replacement_cost_estimate: record.replacement_cost_estimate.unwrap_or(0.0),
        })
        .collect()
}

/// Defaults: unknown statuses read as Pending, unknown priorities Medium,
/// zero cost; a completion date with no status still counts as Completed.
pub fn normalize_tasks(raw: Vec<RawTaskRecord>) -> Vec<TaskRecord> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            let status = match record.status.as_deref().and_then(parse_task_status) {
                Some(status) => status,
                None if record.completed_at.is_some() => TaskStatus::Completed,
                None => TaskStatus::Pending,
            };
            TaskRecord {
                id: record.id.unwrap_or_else(|| format!("task-{}", index + 1)),
                status,
                priority: record
                    .priority
                    .as_deref()
                    .and_then(parse_priority)
                    .unwrap_or(TaskPriority::Medium),
                actual_cost: record.actual_cost.unwrap_or(0.0),
                completed_at: record.completed_at,
                completed_by: record.completed_by.as_deref().and_then(parse_completed_by),
            }
        })
        .collect()
}

/// Inspections without a date are dropped; recency math needs one.
pub fn normalize_inspections(raw: Vec<RawInspectionRecord>) -> Vec<InspectionRecord> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            record.created_at.map(|created_at| InspectionRecord {
                id: record.id.unwrap_or_else(|| format!("inspection-{}", index + 1)),
                created_at,
            })
        })
        .collect()
}

/// Defaults: unknown priorities read as Optional, unknown statuses Pending,
/// missing costs zero, missing ROI 1.0x (break-even).
pub fn normalize_preservation(
    raw: Vec<RawPreservationRecommendation>,
) -> Vec<PreservationRecommendation> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            let cost_min = record.estimated_cost_min.unwrap_or(0.0);
            PreservationRecommendation {
                id: record.id.unwrap_or_else(|| format!("rec-{}", index + 1)),
                priority: record
                    .priority
                    .as_deref()
                    .and_then(parse_preservation_priority)
                    .unwrap_or(PreservationPriority::Optional),
                status: record
                    .status
                    .as_deref()
                    .and_then(parse_preservation_status)
                    .unwrap_or(PreservationStatus::Pending),
                estimated_cost_min: cost_min,
                estimated_cost_max: record.estimated_cost_max.unwrap_or(cost_min),
                roi_multiple: record.roi_multiple.unwrap_or(1.0),
                expected_lifespan_extension_years: record
                    .expected_lifespan_extension_years
                    .unwrap_or(0),
                recommended_deadline: record.recommended_deadline,
            }
        })
        .collect()
}

pub fn normalize_upgrades(raw: Vec<RawUpgradeRecord>) -> Vec<UpgradeRecord> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| UpgradeRecord {
            id: record.id.unwrap_or_else(|| format!("upgrade-{}", index + 1)),
            status: record
                .status
                .as_deref()
                .and_then(parse_upgrade_status)
                .unwrap_or(UpgradeStatus::Planned),
            investment_required: record.investment_required.unwrap_or(0.0),
            property_value_impact: record.property_value_impact.unwrap_or(0.0),
        })
        .collect()
}

pub fn normalize_equity(raw: Vec<RawEquitySnapshot>) -> Vec<EquitySnapshot> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| EquitySnapshot {
            property_id: record
                .property_id
                .unwrap_or_else(|| format!("property-{}", index + 1)),
            current_market_value: record.current_market_value.unwrap_or(0.0),
            mortgage_balance: record.mortgage_balance.unwrap_or(0.0),
            mortgage_interest_rate: record.mortgage_interest_rate.unwrap_or(0.0),
            is_rental: record.is_rental.unwrap_or(false),
            monthly_noi: record.monthly_noi.unwrap_or(0.0),
            cap_rate: record.cap_rate.unwrap_or(0.0),
        })
        .collect()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPropertyContext {
    pub market_value: Option<f64>,
    pub equity_pct: Option<f64>,
    pub maintenance_spend_pct: Option<f64>,
    pub appreciation_pct: Option<f64>,
    pub completed_upgrade_count: Option<u32>,
    pub realized_roi_pct: Option<f64>,
}

/// The evaluation date is always supplied by the caller, never read from
/// the clock here.
pub fn normalize_context(raw: RawPropertyContext, today: NaiveDate) -> PropertyContext {
    debug_assert!(today.year() > 1900);
    PropertyContext {
        today,
        market_value: raw.market_value.unwrap_or(0.0),
        equity_pct: raw.equity_pct.unwrap_or(0.0),
        maintenance_spend_pct: raw.maintenance_spend_pct.unwrap_or(0.0),
        appreciation_pct: raw.appreciation_pct.unwrap_or(0.0),
        completed_upgrade_count: raw.completed_upgrade_count.unwrap_or(0),
        realized_roi_pct: raw.realized_roi_pct.unwrap_or(0.0),
    }
}

fn parse_condition(value: &str) -> Option<SystemCondition> {
    match normalize_key(value).as_str() {
        "excellent" => Some(SystemCondition::Excellent),
        "good" => Some(SystemCondition::Good),
        "fair" => Some(SystemCondition::Fair),
        "poor" => Some(SystemCondition::Poor),
        "critical" => Some(SystemCondition::Critical),
        "urgent" => Some(SystemCondition::Urgent),
        _ => None,
    }
}

fn parse_task_status(value: &str) -> Option<TaskStatus> {
    match normalize_key(value).as_str() {
        "completed" | "done" => Some(TaskStatus::Completed),
        "pending" | "open" => Some(TaskStatus::Pending),
        "scheduled" => Some(TaskStatus::Scheduled),
        "cancelled" | "canceled" => Some(TaskStatus::Cancelled),
        _ => None,
    }
}

fn parse_priority(value: &str) -> Option<TaskPriority> {
    match normalize_key(value).as_str() {
        "low" => Some(TaskPriority::Low),
        "medium" | "normal" => Some(TaskPriority::Medium),
        "high" => Some(TaskPriority::High),
        "emergency" | "urgent" => Some(TaskPriority::Emergency),
        _ => None,
    }
}

fn parse_completed_by(value: &str) -> Option<CompletedBy> {
    match normalize_key(value).as_str() {
        "diy" | "owner" | "self" => Some(CompletedBy::Diy),
        "professional" | "pro" | "contractor" => Some(CompletedBy::Professional),
        _ => None,
    }
}

fn parse_preservation_priority(value: &str) -> Option<PreservationPriority> {
    match normalize_key(value).as_str() {
        "urgent" => Some(PreservationPriority::Urgent),
        "recommended" => Some(PreservationPriority::Recommended),
        "optional" => Some(PreservationPriority::Optional),
        _ => None,
    }
}

fn parse_preservation_status(value: &str) -> Option<PreservationStatus> {
    match normalize_key(value).as_str() {
        "pending" => Some(PreservationStatus::Pending),
        "scheduled" => Some(PreservationStatus::Scheduled),
        "completed" => Some(PreservationStatus::Completed),
        "dismissed" | "declined" => Some(PreservationStatus::Dismissed),
        _ => None,
    }
}

fn parse_upgrade_status(value: &str) -> Option<UpgradeStatus> {
    match normalize_key(value).as_str() {
        "planned" => Some(UpgradeStatus::Planned),
        "in_progress" => Some(UpgradeStatus::InProgress),
        "completed" => Some(UpgradeStatus::Completed),
        _ => None,
    }
}
