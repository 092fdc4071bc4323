use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::benchmark::{compare_to_benchmark, BenchmarkReport, ClimateZone, UserMetrics};
use super::constants::DEFAULT_HORIZON_YEARS;
use super::health::{compute_health_score, HealthScore};
use super::opportunity::{allocate_budget, collect_and_rank_options, AllocationPlan};
use super::projection::{simulate_scenario, Projection, Scenario};
use super::repository::{
    PortfolioBundle, PortfolioRepository, ReasoningError, ReasoningProvider, RepositoryError,
};

/// Service composing the repository, the pure engine, and the optional
/// reasoning collaborator into portfolio-level reports.
pub struct AdvisorService<R, G> {
    repository: Arc<R>,
    reasoning: Arc<G>,
    default_zone: ClimateZone,
}

/// Per-scenario projection alongside its labeling metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioProjection {
    pub scenario: Scenario,
    pub label: &'static str,
    pub description: &'static str,
    pub projection: Projection,
}

/// Full decision-support report for one portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisorReport {
    pub portfolio_id: String,
    pub health: HealthScore,
    pub plan: AllocationPlan,
    pub scenarios: Vec<ScenarioProjection>,
    pub benchmark: BenchmarkReport,
}

#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("portfolio {0} not found")]
    PortfolioNotFound(String),
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("reasoning error: {0}")]
    Reasoning(#[from] ReasoningError),
}

impl<R, G> AdvisorService<R, G>
where
    R: PortfolioRepository + 'static,
    G: ReasoningProvider + 'static,
{
    pub fn new(repository: Arc<R>, reasoning: Arc<G>, default_zone: ClimateZone) -> Self {
        Self {
            repository,
            reasoning,
            default_zone,
        }
    }

    pub fn health_score(&self, portfolio_id: &str) -> Result<HealthScore, AdvisorError> {
        let bundle = self.bundle(portfolio_id)?;
        Ok(compute_health_score(
            &bundle.context,
            &bundle.systems,
            &bundle.tasks,
            &bundle.inspections,
        ))
    }

    /// Rank capital options and allocate the budget, attaching a narrative
    /// when the reasoning collaborator offers one.
    pub fn allocation_plan(
        &self,
        portfolio_id: &str,
        budget: f64,
    ) -> Result<AllocationPlan, AdvisorError> {
        let bundle = self.bundle(portfolio_id)?;
        let ranked =
            collect_and_rank_options(&bundle.preservation, &bundle.upgrades, &bundle.equity, budget);
        let mut plan = allocate_budget(&ranked, budget);

        let highlights: Vec<String> = plan
            .entries
            .iter()
            .map(|entry| format!("rank {} gets ${:.0}: {}", entry.option_rank, entry.amount, entry.reason))
            .collect();
        plan.reasoning = self.reasoning.narrate("allocation", &highlights)?;

        info!(
            portfolio_id,
            budget,
            entries = plan.entries.len(),
            unallocated = plan.unallocated,
            "allocation plan built"
        );
        Ok(plan)
    }

    pub fn scenario_projections(
        &self,
        portfolio_id: &str,
        horizon_years: u32,
    ) -> Result<Vec<ScenarioProjection>, AdvisorError> {
        let bundle = self.bundle(portfolio_id)?;
        Ok(project_scenarios(&bundle, horizon_years))
    }

    pub fn benchmark(
        &self,
        portfolio_id: &str,
        zone: Option<ClimateZone>,
    ) -> Result<BenchmarkReport, AdvisorError> {
        let bundle = self.bundle(portfolio_id)?;
        let metrics = UserMetrics::from_records(
            &bundle.context,
            &bundle.tasks,
            &bundle.equity,
            &bundle.preservation,
        );
        Ok(compare_to_benchmark(
            &metrics,
            zone.unwrap_or(self.default_zone),
        ))
    }

    /// One-shot report covering score, plan, scenario table, and benchmark.
    pub fn full_report(
        &self,
        portfolio_id: &str,
        budget: f64,
        zone: Option<ClimateZone>,
    ) -> Result<AdvisorReport, AdvisorError> {
        let bundle = self.bundle(portfolio_id)?;

        let health = compute_health_score(
            &bundle.context,
            &bundle.systems,
            &bundle.tasks,
            &bundle.inspections,
        );
        let ranked =
            collect_and_rank_options(&bundle.preservation, &bundle.upgrades, &bundle.equity, budget);
        let mut plan = allocate_budget(&ranked, budget);
        let metrics = UserMetrics::from_records(
            &bundle.context,
            &bundle.tasks,
            &bundle.equity,
            &bundle.preservation,
        );
        let benchmark = compare_to_benchmark(&metrics, zone.unwrap_or(self.default_zone));

        let mut highlights = vec![format!("overall health {}", health.overall)];
        highlights.extend(benchmark.strengths.iter().cloned());
        highlights.extend(benchmark.opportunities.iter().cloned());
        plan.reasoning = self.reasoning.narrate("portfolio report", &highlights)?;

        info!(portfolio_id, health = health.overall, "advisor report built");

        Ok(AdvisorReport {
            portfolio_id: portfolio_id.to_string(),
            health,
            plan,
            scenarios: project_scenarios(&bundle, DEFAULT_HORIZON_YEARS),
            benchmark,
        })
    }

    fn bundle(&self, portfolio_id: &str) -> Result<PortfolioBundle, AdvisorError> {
        self.repository
            .fetch(portfolio_id)?
            .ok_or_else(|| AdvisorError::PortfolioNotFound(portfolio_id.to_string()))
    }
}

fn project_scenarios(bundle: &PortfolioBundle, horizon_years: u32) -> Vec<ScenarioProjection> {
    let starting_value = bundle.total_market_value();
    let starting_debt = bundle.total_debt();

    Scenario::ordered()
        .into_iter()
        .map(|scenario| ScenarioProjection {
            scenario,
            label: scenario.label(),
            description: scenario.description(),
            projection: simulate_scenario(scenario, starting_value, starting_debt, horizon_years),
        })
        .collect()
}
