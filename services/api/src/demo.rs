use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use homewise::engine::domain::{
    CompletedBy, EquitySnapshot, InspectionRecord, PreservationPriority,
    PreservationRecommendation, PreservationStatus, PropertyContext, SystemCondition,
    SystemRecord, TaskPriority, TaskRecord, TaskStatus, UpgradeRecord, UpgradeStatus,
};
use homewise::engine::{
    AdvisorError, AdvisorReport, AdvisorService, ClimateZone, HistoryImporter, PortfolioBundle,
    PortfolioRepository,
};
use homewise::error::AppError;

use crate::infra::{InMemoryPortfolioRepository, TemplateReasoningProvider};

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Capital budget to allocate across the ranked options.
    #[arg(long, default_value_t = 25_000.0)]
    pub(crate) budget: f64,
    /// Climate zone key for benchmarking (e.g. hot_arid). Defaults to the
    /// configured zone.
    #[arg(long)]
    pub(crate) zone: Option<String>,
    /// Override the evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Optional maintenance-history CSV export to hydrate the task records.
    #[arg(long)]
    pub(crate) tasks_csv: Option<PathBuf>,
    /// Optional inspection-log CSV export to hydrate the inspection records.
    #[arg(long)]
    pub(crate) inspections_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Capital budget used for the allocation portion of the demo.
    #[arg(long, default_value_t = 25_000.0)]
    pub(crate) budget: f64,
    /// Override the evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_portfolio_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        budget,
        zone,
        today,
        tasks_csv,
        inspections_csv,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let mut bundle = sample_bundle(today);
    let mut imported = false;

    if let Some(path) = tasks_csv {
        bundle.tasks = HistoryImporter::tasks_from_path(path)?;
        imported = true;
    }
    if let Some(path) = inspections_csv {
        bundle.inspections = HistoryImporter::inspections_from_path(path)?;
        imported = true;
    }

    let zone = zone.as_deref().and_then(ClimateZone::from_key);
    let report = build_report(bundle, budget, zone)?;
    render_report(&report, today, imported);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { budget, today } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("Portfolio advisor demo");
    let report = build_report(sample_bundle(today), budget, None)?;
    render_report(&report, today, false);
    Ok(())
}

fn build_report(
    bundle: PortfolioBundle,
    budget: f64,
    zone: Option<ClimateZone>,
) -> Result<AdvisorReport, AppError> {
    let repository = InMemoryPortfolioRepository::default();
    repository
        .store(DEMO_PORTFOLIO_ID, bundle)
        .map_err(AdvisorError::Repository)?;

    let service = AdvisorService::new(
        Arc::new(repository),
        Arc::new(TemplateReasoningProvider),
        ClimateZone::DEFAULT,
    );
    Ok(service.full_report(DEMO_PORTFOLIO_ID, budget, zone)?)
}

pub(crate) fn render_report(report: &AdvisorReport, today: NaiveDate, imported: bool) {
    println!("Portfolio: {} (evaluated {today})", report.portfolio_id);
    if imported {
        println!("Data source: CSV history import");
    } else {
        println!("Data source: built-in sample records");
    }

    println!("\nHealth score: {}/100", report.health.overall);
    println!("- Systems: {}", report.health.breakdown.system);
    println!("- Financial: {}", report.health.breakdown.financial);
    println!("- Maintenance: {}", report.health.breakdown.maintenance);
    println!("- Growth: {}", report.health.breakdown.growth);

    println!(
        "\nAllocation plan (${:.0} available)",
        report.plan.available_amount
    );
    for option in &report.plan.ranked_options {
        println!(
            "- #{} {} [{}]: ${:.0} | composite {:.3}",
            option.rank,
            option.label,
            option.strength_tier.label(),
            option.amount,
            option.composite_score
        );
    }
    if report.plan.entries.is_empty() {
        println!("Funded: nothing (budget exhausted or no options)");
    } else {
        println!("Funded:");
        for entry in &report.plan.entries {
            println!(
                "- rank {}: ${:.2} ({})",
                entry.option_rank, entry.amount, entry.reason
            );
        }
    }
    println!(
        "Allocated ${:.2}, unallocated ${:.2}",
        report.plan.total_allocated, report.plan.unallocated
    );
    if let Some(narrative) = &report.plan.reasoning {
        println!("Narrative: {narrative}");
    }

    println!("\nEquity projections");
    for scenario in &report.scenarios {
        println!(
            "- {}: {} -> final equity ${:.0}",
            scenario.label,
            scenario.description,
            scenario.projection.final_equity()
        );
    }

    println!(
        "\nBenchmark vs {} market averages",
        report.benchmark.zone.label()
    );
    for comparison in &report.benchmark.comparisons {
        println!(
            "- {}: you {:.3} | market {:.3} | {}",
            comparison.metric,
            comparison.user_value,
            comparison.market_value,
            comparison.rating.label()
        );
    }
    if !report.benchmark.strengths.is_empty() {
        println!("Strengths:");
        for strength in &report.benchmark.strengths {
            println!("- {strength}");
        }
    }
    if !report.benchmark.opportunities.is_empty() {
        println!("Opportunities:");
        for opportunity in &report.benchmark.opportunities {
            println!("- {opportunity}");
        }
    }
}

pub(crate) const DEMO_PORTFOLIO_ID: &str = "demo-main";

/// A single-property portfolio with enough history to light up every part
/// of the report: an aging roof with an urgent preservation recommendation,
/// a planned insulation upgrade, and a mortgaged equity position.
pub(crate) fn sample_bundle(today: NaiveDate) -> PortfolioBundle {
    let year = today.year();

    PortfolioBundle {
        context: PropertyContext {
            today,
            market_value: 400_000.0,
            equity_pct: 30.0,
            maintenance_spend_pct: 1.8,
            appreciation_pct: 4.0,
            completed_upgrade_count: 1,
            realized_roi_pct: 12.0,
        },
        systems: vec![
            SystemRecord {
                id: "roof".to_string(),
                system_type: "roof".to_string(),
                installation_year: year - 18,
                estimated_lifespan_years: 25,
                lifespan_extension_years: 0,
                condition: SystemCondition::Fair,
                replacement_cost_estimate: 18_000.0,
            },
            SystemRecord {
                id: "hvac".to_string(),
                system_type: "hvac".to_string(),
                installation_year: year - 6,
                estimated_lifespan_years: 15,
                lifespan_extension_years: 3,
                condition: SystemCondition::Good,
                replacement_cost_estimate: 9_500.0,
            },
            SystemRecord {
                id: "water-heater".to_string(),
                system_type: "plumbing".to_string(),
                installation_year: year - 9,
                estimated_lifespan_years: 12,
                lifespan_extension_years: 0,
                condition: SystemCondition::Poor,
                replacement_cost_estimate: 2_200.0,
            },
        ],
        tasks: vec![
            TaskRecord {
                id: "gutter-clean".to_string(),
                status: TaskStatus::Completed,
                priority: TaskPriority::Low,
                actual_cost: 240.0,
                completed_at: today.checked_sub_signed(chrono::Duration::days(40)),
                completed_by: Some(CompletedBy::Diy),
            },
            TaskRecord {
                id: "furnace-service".to_string(),
                status: TaskStatus::Completed,
                priority: TaskPriority::Medium,
                actual_cost: 310.0,
                completed_at: today.checked_sub_signed(chrono::Duration::days(150)),
                completed_by: Some(CompletedBy::Professional),
            },
            TaskRecord {
                id: "burst-pipe".to_string(),
                status: TaskStatus::Completed,
                priority: TaskPriority::Emergency,
                actual_cost: 1_450.0,
                completed_at: today.checked_sub_signed(chrono::Duration::days(300)),
                completed_by: Some(CompletedBy::Professional),
            },
            TaskRecord {
                id: "fence-repair".to_string(),
                status: TaskStatus::Pending,
                priority: TaskPriority::Low,
                actual_cost: 0.0,
                completed_at: None,
                completed_by: None,
            },
        ],
        inspections: vec![InspectionRecord {
            id: "annual".to_string(),
            created_at: today
                .checked_sub_signed(chrono::Duration::days(120))
                .unwrap_or(today),
        }],
        preservation: vec![
            PreservationRecommendation {
                id: "roof-coating".to_string(),
                priority: PreservationPriority::Urgent,
                status: PreservationStatus::Pending,
                estimated_cost_min: 5_000.0,
                estimated_cost_max: 7_000.0,
                roi_multiple: 3.0,
                expected_lifespan_extension_years: 7,
                recommended_deadline: today.checked_add_signed(chrono::Duration::days(90)),
            },
            PreservationRecommendation {
                id: "anode-rod".to_string(),
                priority: PreservationPriority::Recommended,
                status: PreservationStatus::Pending,
                estimated_cost_min: 250.0,
                estimated_cost_max: 400.0,
                roi_multiple: 4.5,
                expected_lifespan_extension_years: 4,
                recommended_deadline: None,
            },
        ],
        upgrades: vec![UpgradeRecord {
            id: "attic-insulation".to_string(),
            status: UpgradeStatus::Planned,
            investment_required: 6_000.0,
            property_value_impact: 11_000.0,
        }],
        equity: vec![EquitySnapshot {
            property_id: "primary".to_string(),
            current_market_value: 400_000.0,
            mortgage_balance: 280_000.0,
            mortgage_interest_rate: 6.5,
            is_rental: false,
            monthly_noi: 0.0,
            cap_rate: 0.0,
        }],
    }
}
