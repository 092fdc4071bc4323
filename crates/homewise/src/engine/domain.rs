use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_COMPLETION_RATE, DEFAULT_TASK_RATIO};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemCondition {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
    Urgent,
}

impl SystemCondition {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Critical => "Critical",
            Self::Urgent => "Urgent",
        }
    }

    pub const fn is_good(self) -> bool {
        matches!(self, Self::Excellent | Self::Good)
    }

    pub const fn needs_attention(self) -> bool {
        matches!(self, Self::Critical | Self::Urgent)
    }
}

/// A mechanical or structural system tracked on a property (roof, HVAC, etc).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemRecord {
    pub id: String,
    pub system_type: String,
    pub installation_year: i32,
    pub estimated_lifespan_years: u32,
    pub lifespan_extension_years: u32,
    pub condition: SystemCondition,
    pub replacement_cost_estimate: f64,
}

impl SystemRecord {
    pub fn age(&self, current_year: i32) -> u32 {
        (current_year - self.installation_year).max(0) as u32
    }

    pub fn total_lifespan(&self) -> u32 {
        self.estimated_lifespan_years + self.lifespan_extension_years
    }

    /// Fraction of expected lifespan already consumed, clamped at zero for
    /// future-dated installations.
    pub fn age_fraction(&self, current_year: i32) -> f64 {
        self.age(current_year) as f64 / self.total_lifespan().max(1) as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Completed,
    Pending,
    Scheduled,
    Cancelled,
}

impl TaskStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Scheduled => "Scheduled",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletedBy {
    Diy,
    Professional,
}

/// A maintenance task from the property's work history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub actual_cost: f64,
    pub completed_at: Option<NaiveDate>,
    pub completed_by: Option<CompletedBy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionRecord {
    pub id: String,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreservationPriority {
    Urgent,
    Recommended,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreservationStatus {
    Pending,
    Scheduled,
    Completed,
    Dismissed,
}

/// A preservation intervention suggested for a system (e.g. recoat the roof
/// before it fails outright).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreservationRecommendation {
    pub id: String,
    pub priority: PreservationPriority,
    pub status: PreservationStatus,
    pub estimated_cost_min: f64,
    pub estimated_cost_max: f64,
    pub roi_multiple: f64,
    pub expected_lifespan_extension_years: u32,
    pub recommended_deadline: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeStatus {
    Planned,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeRecord {
    pub id: String,
    pub status: UpgradeStatus,
    pub investment_required: f64,
    pub property_value_impact: f64,
}

/// Point-in-time equity position for one property. Negative equity is
/// tolerated; the engine never assumes debt stays below market value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquitySnapshot {
    pub property_id: String,
    pub current_market_value: f64,
    pub mortgage_balance: f64,
    /// Annual interest rate in percent (6.5 means 6.5%/yr).
    pub mortgage_interest_rate: f64,
    pub is_rental: bool,
    pub monthly_noi: f64,
    pub cap_rate: f64,
}

impl EquitySnapshot {
    pub fn equity(&self) -> f64 {
        self.current_market_value - self.mortgage_balance
    }
}

/// Portfolio-level figures the caller supplies alongside record collections.
/// Carries the evaluation date explicitly so every engine call stays
/// deterministic without clock mocking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyContext {
    pub today: NaiveDate,
    pub market_value: f64,
    /// Equity as a percent of market value, 0-100.
    pub equity_pct: f64,
    /// Annual maintenance spend as a percent of market value.
    pub maintenance_spend_pct: f64,
    /// Annual appreciation in percent (4.0 means 4%/yr).
    pub appreciation_pct: f64,
    pub completed_upgrade_count: u32,
    /// Realized return on completed improvements, in percent.
    pub realized_roi_pct: f64,
}

impl PropertyContext {
    pub fn current_year(&self) -> i32 {
        self.today.year()
    }
}

/// Share of completed tasks flagged emergency priority. Empty histories
/// resolve to a neutral default instead of dividing by zero.
pub fn emergency_ratio(tasks: &[TaskRecord]) -> f64 {
    completed_share(tasks, |task| task.priority == TaskPriority::Emergency)
}

/// Share of completed tasks done by the owner rather than a professional.
pub fn diy_ratio(tasks: &[TaskRecord]) -> f64 {
    completed_share(tasks, |task| task.completed_by == Some(CompletedBy::Diy))
}

/// Completed tasks over all non-cancelled tasks; neutral default when the
/// history is empty.
pub fn completion_rate(tasks: &[TaskRecord]) -> f64 {
    let considered = tasks
        .iter()
        .filter(|task| task.status != TaskStatus::Cancelled)
        .count();
    if considered == 0 {
        return DEFAULT_COMPLETION_RATE;
    }
    let completed = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Completed)
        .count();
    completed as f64 / considered as f64
}

/// Inspections logged within the trailing 365 days.
pub fn inspection_frequency(inspections: &[InspectionRecord], today: NaiveDate) -> usize {
    inspections
        .iter()
        .filter(|inspection| {
            let days = (today - inspection.created_at).num_days();
            (0..365).contains(&days)
        })
        .count()
}

fn completed_share(tasks: &[TaskRecord], matches: impl Fn(&TaskRecord) -> bool) -> f64 {
    let completed: Vec<&TaskRecord> = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Completed)
        .collect();
    if completed.is_empty() {
        return DEFAULT_TASK_RATIO;
    }
    let matching = completed.iter().filter(|task| matches(task)).count();
    matching as f64 / completed.len() as f64
}
