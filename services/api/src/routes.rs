use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use homewise::engine::normalizer::{
    normalize_context, normalize_equity, normalize_inspections, normalize_preservation,
    normalize_systems, normalize_tasks, normalize_upgrades, RawEquitySnapshot,
    RawInspectionRecord, RawPreservationRecommendation, RawPropertyContext, RawSystemRecord,
    RawTaskRecord, RawUpgradeRecord,
};
use homewise::engine::{
    allocate_budget, collect_and_rank_options, compare_to_benchmark, compute_health_score,
    simulate_projection, simulate_scenario, AdvisorReport, AdvisorService, AllocationPlan,
    BenchmarkReport, ClimateZone, HealthBreakdown, PortfolioRepository, Projection,
    ProjectionInputs, ReasoningProvider, Scenario, UserMetrics,
};
use homewise::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::infra::{deserialize_optional_date, AppState};

pub(crate) fn api_router<R, G>(service: Arc<AdvisorService<R, G>>) -> Router
where
    R: PortfolioRepository + 'static,
    G: ReasoningProvider + 'static,
{
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/engine/health-score", post(health_score_endpoint))
        .route("/api/v1/engine/allocation", post(allocation_endpoint))
        .route("/api/v1/engine/projection", post(projection_endpoint))
        .route("/api/v1/engine/benchmark", post(benchmark_endpoint))
        .route(
            "/api/v1/portfolio/:portfolio_id/report",
            post(portfolio_report_endpoint::<R, G>),
        )
        .with_state(service)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HealthScoreRequest {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) context: RawPropertyContext,
    #[serde(default)]
    pub(crate) systems: Vec<RawSystemRecord>,
    #[serde(default)]
    pub(crate) tasks: Vec<RawTaskRecord>,
    #[serde(default)]
    pub(crate) inspections: Vec<RawInspectionRecord>,
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthScoreResponse {
    pub(crate) today: NaiveDate,
    pub(crate) score: u8,
    pub(crate) breakdown: HealthBreakdown,
}

pub(crate) async fn health_score_endpoint(
    Json(payload): Json<HealthScoreRequest>,
) -> Json<HealthScoreResponse> {
    let today = payload.today.unwrap_or_else(|| Local::now().date_naive());
    let context = normalize_context(payload.context, today);
    let systems = normalize_systems(payload.systems, context.current_year());
    let tasks = normalize_tasks(payload.tasks);
    let inspections = normalize_inspections(payload.inspections);

    let score = compute_health_score(&context, &systems, &tasks, &inspections);
    Json(HealthScoreResponse {
        today,
        score: score.overall,
        breakdown: score.breakdown,
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct AllocationRequest {
    pub(crate) budget: f64,
    #[serde(default)]
    pub(crate) preservation: Vec<RawPreservationRecommendation>,
    #[serde(default)]
    pub(crate) upgrades: Vec<RawUpgradeRecord>,
    #[serde(default)]
    pub(crate) equity: Vec<RawEquitySnapshot>,
}

pub(crate) async fn allocation_endpoint(
    Json(payload): Json<AllocationRequest>,
) -> Json<AllocationPlan> {
    let preservation = normalize_preservation(payload.preservation);
    let upgrades = normalize_upgrades(payload.upgrades);
    let equity = normalize_equity(payload.equity);

    let ranked = collect_and_rank_options(&preservation, &upgrades, &equity, payload.budget);
    Json(allocate_budget(&ranked, payload.budget))
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectionRequest {
    pub(crate) starting_value: f64,
    pub(crate) starting_debt: f64,
    pub(crate) appreciation_rate: Option<f64>,
    pub(crate) amortization_factor: Option<f64>,
    pub(crate) horizon_years: Option<u32>,
    pub(crate) scenario: Option<Scenario>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProjectionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) scenario: Option<&'static str>,
    pub(crate) projection: Projection,
}

pub(crate) async fn projection_endpoint(
    Json(payload): Json<ProjectionRequest>,
) -> Json<ProjectionResponse> {
    let defaults = ProjectionInputs::default();
    let horizon = payload.horizon_years.unwrap_or(defaults.horizon_years);

    let response = match payload.scenario {
        Some(scenario) => ProjectionResponse {
            scenario: Some(scenario.label()),
            projection: simulate_scenario(
                scenario,
                payload.starting_value,
                payload.starting_debt,
                horizon,
            ),
        },
        None => ProjectionResponse {
            scenario: None,
            projection: simulate_projection(&ProjectionInputs {
                starting_value: payload.starting_value,
                starting_debt: payload.starting_debt,
                appreciation_rate: payload
                    .appreciation_rate
                    .unwrap_or(defaults.appreciation_rate),
                amortization_factor: payload
                    .amortization_factor
                    .unwrap_or(defaults.amortization_factor),
                horizon_years: horizon,
            }),
        },
    };

    Json(response)
}

#[derive(Debug, Deserialize)]
pub(crate) struct BenchmarkRequest {
    pub(crate) metrics: UserMetrics,
    #[serde(default)]
    pub(crate) zone: Option<String>,
}

pub(crate) async fn benchmark_endpoint(
    Json(payload): Json<BenchmarkRequest>,
) -> Json<BenchmarkReport> {
    let zone = payload
        .zone
        .as_deref()
        .and_then(ClimateZone::from_key)
        .unwrap_or(ClimateZone::DEFAULT);
    Json(compare_to_benchmark(&payload.metrics, zone))
}

#[derive(Debug, Deserialize)]
pub(crate) struct PortfolioReportRequest {
    pub(crate) budget: f64,
    #[serde(default)]
    pub(crate) zone: Option<String>,
}

pub(crate) async fn portfolio_report_endpoint<R, G>(
    State(service): State<Arc<AdvisorService<R, G>>>,
    Path(portfolio_id): Path<String>,
    Json(payload): Json<PortfolioReportRequest>,
) -> Result<Json<AdvisorReport>, AppError>
where
    R: PortfolioRepository + 'static,
    G: ReasoningProvider + 'static,
{
    let zone = payload.zone.as_deref().and_then(ClimateZone::from_key);
    let report = service.full_report(&portfolio_id, payload.budget, zone)?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::sample_bundle;
    use crate::infra::{InMemoryPortfolioRepository, TemplateReasoningProvider};
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn sample_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid date")
    }

    fn seeded_service() -> Arc<AdvisorService<InMemoryPortfolioRepository, TemplateReasoningProvider>>
    {
        let repository = InMemoryPortfolioRepository::default();
        repository
            .store("demo-main", sample_bundle(sample_today()))
            .expect("bundle stores");
        Arc::new(AdvisorService::new(
            Arc::new(repository),
            Arc::new(TemplateReasoningProvider),
            ClimateZone::DEFAULT,
        ))
    }

    #[tokio::test]
    async fn health_score_endpoint_defaults_missing_collections() {
        let request = HealthScoreRequest {
            today: Some(sample_today()),
            ..HealthScoreRequest::default()
        };

        let Json(body) = health_score_endpoint(Json(request)).await;

        assert_eq!(body.today, sample_today());
        assert!(body.score <= 100);
        assert_eq!(body.breakdown.system, 0);
    }

    #[tokio::test]
    async fn allocation_endpoint_builds_a_conserving_plan() {
        let request = AllocationRequest {
            budget: 25_000.0,
            preservation: vec![RawPreservationRecommendation {
                id: Some("roof".to_string()),
                priority: Some("URGENT".to_string()),
                estimated_cost_min: Some(5_000.0),
                roi_multiple: Some(3.0),
                ..RawPreservationRecommendation::default()
            }],
            upgrades: Vec::new(),
            equity: Vec::new(),
        };

        let Json(plan) = allocation_endpoint(Json(request)).await;

        assert_eq!(plan.available_amount, 25_000.0);
        assert!((plan.total_allocated + plan.unallocated - 25_000.0).abs() < 0.005);
        assert!(plan
            .entries
            .iter()
            .any(|entry| entry.reason == "Critical system protection"));
    }

    #[tokio::test]
    async fn projection_endpoint_honors_scenario_labels() {
        let request = ProjectionRequest {
            starting_value: 400_000.0,
            starting_debt: 280_000.0,
            appreciation_rate: None,
            amortization_factor: None,
            horizon_years: None,
            scenario: Some(Scenario::HoldAll),
        };

        let Json(body) = projection_endpoint(Json(request)).await;

        assert_eq!(body.scenario, Some("Hold All"));
        assert_eq!(body.projection.rows.len(), 11);
        assert_eq!(body.projection.rows[0].total_equity, 120_000.0);
    }

    #[tokio::test]
    async fn benchmark_endpoint_falls_back_on_unknown_zone() {
        let request = BenchmarkRequest {
            metrics: UserMetrics {
                emergency_ratio: 0.1,
                maintenance_spend_pct: 1.5,
                appreciation_rate: 0.05,
                cap_rate: 0.0,
                equity_pct: 50.0,
                pending_preservation_count: 0,
            },
            zone: Some("lunar".to_string()),
        };

        let Json(report) = benchmark_endpoint(Json(request)).await;

        assert_eq!(report.zone, ClimateZone::DEFAULT);
        assert_eq!(report.comparisons.len(), 5);
    }

    #[tokio::test]
    async fn portfolio_report_endpoint_serves_seeded_portfolio() {
        let service = seeded_service();

        let Json(report) = portfolio_report_endpoint(
            State(service),
            Path("demo-main".to_string()),
            Json(PortfolioReportRequest {
                budget: 25_000.0,
                zone: None,
            }),
        )
        .await
        .expect("report builds");

        assert_eq!(report.portfolio_id, "demo-main");
        assert_eq!(report.scenarios.len(), 3);
        assert!(report.plan.reasoning.is_some());
    }

    #[tokio::test]
    async fn router_serves_healthcheck() {
        let app = api_router(seeded_service());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
    }
}
