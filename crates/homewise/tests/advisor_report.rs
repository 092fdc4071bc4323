use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use homewise::engine::{
    AdvisorError, AdvisorService, ClimateZone, NullReasoningProvider, PortfolioBundle,
    PortfolioRepository, ReasoningError, ReasoningProvider, RepositoryError,
};

use homewise::engine::domain::{
    CompletedBy, EquitySnapshot, InspectionRecord, PreservationPriority,
    PreservationRecommendation, PreservationStatus, PropertyContext, SystemCondition,
    SystemRecord, TaskPriority, TaskRecord, TaskStatus, UpgradeRecord, UpgradeStatus,
};

#[derive(Default, Clone)]
struct InMemoryPortfolioRepository {
    bundles: Arc<Mutex<HashMap<String, PortfolioBundle>>>,
}

impl PortfolioRepository for InMemoryPortfolioRepository {
    fn fetch(&self, portfolio_id: &str) -> Result<Option<PortfolioBundle>, RepositoryError> {
        let guard = self.bundles.lock().expect("repository mutex poisoned");
        Ok(guard.get(portfolio_id).cloned())
    }

    fn store(&self, portfolio_id: &str, bundle: PortfolioBundle) -> Result<(), RepositoryError> {
        let mut guard = self.bundles.lock().expect("repository mutex poisoned");
        guard.insert(portfolio_id.to_string(), bundle);
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, RepositoryError> {
        let guard = self.bundles.lock().expect("repository mutex poisoned");
        Ok(guard.keys().cloned().collect())
    }
}

struct CannedReasoningProvider;

impl ReasoningProvider for CannedReasoningProvider {
    fn narrate(
        &self,
        subject: &str,
        highlights: &[String],
    ) -> Result<Option<String>, ReasoningError> {
        Ok(Some(format!(
            "{subject}: {} highlight(s) considered",
            highlights.len()
        )))
    }
}

fn eval_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid evaluation date")
}

fn sample_bundle() -> PortfolioBundle {
    PortfolioBundle {
        context: PropertyContext {
            today: eval_date(),
            market_value: 400_000.0,
            equity_pct: 30.0,
            maintenance_spend_pct: 1.9,
            appreciation_pct: 4.0,
            completed_upgrade_count: 1,
            realized_roi_pct: 14.0,
        },
        systems: vec![
            SystemRecord {
                id: "roof".to_string(),
                system_type: "roof".to_string(),
                installation_year: 2012,
                estimated_lifespan_years: 25,
                lifespan_extension_years: 5,
                condition: SystemCondition::Good,
                replacement_cost_estimate: 18_000.0,
            },
            SystemRecord {
                id: "hvac".to_string(),
                system_type: "hvac".to_string(),
                installation_year: 2020,
                estimated_lifespan_years: 15,
                lifespan_extension_years: 0,
                condition: SystemCondition::Fair,
                replacement_cost_estimate: 9_500.0,
            },
        ],
        tasks: vec![
            TaskRecord {
                id: "t-1".to_string(),
                status: TaskStatus::Completed,
                priority: TaskPriority::Medium,
                actual_cost: 320.0,
                completed_at: NaiveDate::from_ymd_opt(2026, 2, 10),
                completed_by: Some(CompletedBy::Professional),
            },
            TaskRecord {
                id: "t-2".to_string(),
                status: TaskStatus::Completed,
                priority: TaskPriority::Emergency,
                actual_cost: 1_450.0,
                completed_at: NaiveDate::from_ymd_opt(2026, 1, 4),
                completed_by: Some(CompletedBy::Professional),
            },
            TaskRecord {
                id: "t-3".to_string(),
                status: TaskStatus::Pending,
                priority: TaskPriority::Medium,
                actual_cost: 0.0,
                completed_at: None,
                completed_by: None,
            },
        ],
        inspections: vec![InspectionRecord {
            id: "spring".to_string(),
            created_at: NaiveDate::from_ymd_opt(2026, 4, 20).expect("valid date"),
        }],
        preservation: vec![PreservationRecommendation {
            id: "roof-coating".to_string(),
            priority: PreservationPriority::Urgent,
            status: PreservationStatus::Pending,
            estimated_cost_min: 5_000.0,
            estimated_cost_max: 7_000.0,
            roi_multiple: 3.1,
            expected_lifespan_extension_years: 7,
            recommended_deadline: NaiveDate::from_ymd_opt(2026, 10, 1),
        }],
        upgrades: vec![UpgradeRecord {
            id: "attic-insulation".to_string(),
            status: UpgradeStatus::Planned,
            investment_required: 6_000.0,
            property_value_impact: 11_000.0,
        }],
        equity: vec![EquitySnapshot {
            property_id: "main".to_string(),
            current_market_value: 400_000.0,
            mortgage_balance: 280_000.0,
            mortgage_interest_rate: 6.5,
            is_rental: false,
            monthly_noi: 0.0,
            cap_rate: 0.0,
        }],
    }
}

fn service() -> AdvisorService<InMemoryPortfolioRepository, NullReasoningProvider> {
    let repository = InMemoryPortfolioRepository::default();
    repository
        .store("demo-main", sample_bundle())
        .expect("bundle stores");
    AdvisorService::new(
        Arc::new(repository),
        Arc::new(NullReasoningProvider),
        ClimateZone::DEFAULT,
    )
}

#[test]
fn full_report_covers_score_plan_scenarios_and_benchmark() {
    let report = service()
        .full_report("demo-main", 25_000.0, None)
        .expect("report builds");

    assert!(report.health.overall <= 100);
    assert!(report.health.overall > 0);

    // The urgent roof coating is affordable and must be funded.
    assert!(report
        .plan
        .entries
        .iter()
        .any(|entry| entry.reason == "Critical system protection"));
    assert!(
        (report.plan.total_allocated + report.plan.unallocated - report.plan.available_amount)
            .abs()
            < 0.005
    );

    assert_eq!(report.scenarios.len(), 3);
    for scenario in &report.scenarios {
        assert_eq!(scenario.projection.rows.len(), 11);
        assert_eq!(scenario.projection.rows[0].total_equity, 120_000.0);
    }

    assert_eq!(report.benchmark.zone, ClimateZone::DEFAULT);
    assert_eq!(report.benchmark.comparisons.len(), 5);
    // Numeric output stands alone without the reasoning collaborator.
    assert!(report.plan.reasoning.is_none());
}

#[test]
fn reasoning_collaborator_attaches_a_narrative() {
    let repository = InMemoryPortfolioRepository::default();
    repository
        .store("demo-main", sample_bundle())
        .expect("bundle stores");
    let service = AdvisorService::new(
        Arc::new(repository),
        Arc::new(CannedReasoningProvider),
        ClimateZone::HotArid,
    );

    let plan = service
        .allocation_plan("demo-main", 25_000.0)
        .expect("plan builds");

    let narrative = plan.reasoning.expect("narrative attached");
    assert!(narrative.starts_with("allocation:"));

    let benchmark = service.benchmark("demo-main", None).expect("benchmark builds");
    assert_eq!(benchmark.zone, ClimateZone::HotArid);
}

#[test]
fn unknown_portfolio_is_a_not_found_error() {
    let result = service().health_score("missing");
    assert!(matches!(result, Err(AdvisorError::PortfolioNotFound(id)) if id == "missing"));
}

#[test]
fn repeated_invocations_are_deterministic() {
    let service = service();
    let first = service
        .full_report("demo-main", 25_000.0, Some(ClimateZone::ColdHumid))
        .expect("report builds");
    let second = service
        .full_report("demo-main", 25_000.0, Some(ClimateZone::ColdHumid))
        .expect("report builds");

    assert_eq!(first.health, second.health);
    assert_eq!(first.plan, second.plan);
    assert_eq!(first.benchmark, second.benchmark);
}
