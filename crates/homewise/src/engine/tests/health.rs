use super::common::*;
use crate::engine::constants::SUB_SCORE_CAP;
use crate::engine::domain::{CompletedBy, SystemCondition, TaskPriority};
use crate::engine::health::compute_health_score;

#[test]
fn score_stays_within_bounds_for_typical_portfolio() {
    let systems = vec![
        system("roof", 2018, SystemCondition::Good),
        system("hvac", 2021, SystemCondition::Excellent),
        system("water-heater", 2010, SystemCondition::Fair),
    ];
    let tasks = vec![
        completed_task("t-1", TaskPriority::Medium, CompletedBy::Professional),
        completed_task("t-2", TaskPriority::High, CompletedBy::Diy),
        completed_task("t-3", TaskPriority::Emergency, CompletedBy::Professional),
        pending_task("t-4"),
    ];
    let inspections = vec![inspection("i-1", eval_date() - chrono::Duration::days(45))];

    let score = compute_health_score(&context(), &systems, &tasks, &inspections);

    assert!(score.overall <= 100);
    assert!(score.breakdown.system <= SUB_SCORE_CAP as u8);
    assert!(score.breakdown.financial <= SUB_SCORE_CAP as u8);
    assert!(score.breakdown.maintenance <= SUB_SCORE_CAP as u8);
    assert!(score.breakdown.growth <= SUB_SCORE_CAP as u8);
    assert!(score.overall > 0);
}

#[test]
fn empty_records_resolve_to_documented_defaults() {
    let score = compute_health_score(&empty_context(), &[], &[], &[]);

    // No systems is a zero baseline, not an error.
    assert_eq!(score.breakdown.system, 0);
    // Zero equity + neutral emergency ratio (0.25 -> +20) + lean spend
    // (+15) + base 25.
    assert_eq!(score.breakdown.financial, 60);
    // 0.4*75 proactive + 0.3*50 completion + stale recency 5 + base diy 5.
    assert_eq!(score.breakdown.maintenance, 55);
    // Base growth only.
    assert_eq!(score.breakdown.growth, 15);
    assert_eq!(score.overall, 35);
}

#[test]
fn sub_scores_cap_before_the_blend() {
    let mut rich = context();
    rich.equity_pct = 200.0;
    rich.appreciation_pct = 30.0;
    rich.realized_roi_pct = 90.0;

    let systems = vec![
        system("roof", 2024, SystemCondition::Excellent),
        system("hvac", 2025, SystemCondition::Excellent),
    ];
    let score = compute_health_score(&rich, &systems, &[], &[]);

    assert_eq!(score.breakdown.system, SUB_SCORE_CAP as u8);
    assert_eq!(score.breakdown.financial, SUB_SCORE_CAP as u8);
    assert_eq!(score.breakdown.growth, SUB_SCORE_CAP as u8);
    assert!(score.overall <= 100);
}

#[test]
fn critical_systems_cost_the_stability_points() {
    let healthy = vec![
        system("roof", 2020, SystemCondition::Good),
        system("hvac", 2022, SystemCondition::Good),
    ];
    let mut troubled = healthy.clone();
    troubled.push(system("electrical", 2020, SystemCondition::Critical));

    let ctx = context();
    let healthy_score = compute_health_score(&ctx, &healthy, &[], &[]);
    let troubled_score = compute_health_score(&ctx, &troubled, &[], &[]);

    assert!(troubled_score.breakdown.system < healthy_score.breakdown.system);
}

#[test]
fn recent_inspection_outscores_stale_history() {
    let ctx = context();
    let tasks = vec![completed_task(
        "t-1",
        TaskPriority::Medium,
        CompletedBy::Professional,
    )];

    let fresh = vec![inspection("i-1", eval_date() - chrono::Duration::days(30))];
    let stale = vec![inspection("i-1", eval_date() - chrono::Duration::days(400))];

    let fresh_score = compute_health_score(&ctx, &[], &tasks, &fresh);
    let stale_score = compute_health_score(&ctx, &[], &tasks, &stale);

    assert!(fresh_score.breakdown.maintenance > stale_score.breakdown.maintenance);
}
