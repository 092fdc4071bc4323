use chrono::NaiveDate;

use crate::engine::domain::{
    CompletedBy, PreservationPriority, SystemCondition, TaskPriority, TaskStatus,
};
use crate::engine::normalizer::{
    normalize_inspections, normalize_preservation, normalize_systems, normalize_tasks,
    RawInspectionRecord, RawPreservationRecommendation, RawSystemRecord, RawTaskRecord,
};

#[test]
fn blank_system_fields_fill_with_documented_defaults() {
    let systems = normalize_systems(vec![RawSystemRecord::default()], 2026);
    let system = &systems[0];

    assert_eq!(system.id, "system-1");
    assert_eq!(system.system_type, "general");
    assert_eq!(system.installation_year, 2026);
    assert_eq!(system.estimated_lifespan_years, 20);
    assert_eq!(system.condition, SystemCondition::Fair);
    assert_eq!(system.replacement_cost_estimate, 0.0);
    assert_eq!(system.age(2026), 0);
}

#[test]
fn condition_parsing_tolerates_case_and_whitespace() {
    let systems = normalize_systems(
        vec![
            RawSystemRecord {
                condition: Some("  GOOD ".to_string()),
                ..RawSystemRecord::default()
            },
            RawSystemRecord {
                condition: Some("weathered".to_string()),
                ..RawSystemRecord::default()
            },
        ],
        2026,
    );

    assert_eq!(systems[0].condition, SystemCondition::Good);
    assert_eq!(systems[1].condition, SystemCondition::Fair);
}

#[test]
fn completion_date_implies_completed_status() {
    let tasks = normalize_tasks(vec![RawTaskRecord {
        completed_at: NaiveDate::from_ymd_opt(2026, 2, 1),
        ..RawTaskRecord::default()
    }]);

    assert_eq!(tasks[0].status, TaskStatus::Completed);
    assert_eq!(tasks[0].priority, TaskPriority::Medium);
}

#[test]
fn completed_by_accepts_common_spellings() {
    let tasks = normalize_tasks(vec![
        RawTaskRecord {
            completed_by: Some("Owner".to_string()),
            ..RawTaskRecord::default()
        },
        RawTaskRecord {
            completed_by: Some("contractor".to_string()),
            ..RawTaskRecord::default()
        },
    ]);

    assert_eq!(tasks[0].completed_by, Some(CompletedBy::Diy));
    assert_eq!(tasks[1].completed_by, Some(CompletedBy::Professional));
}

#[test]
fn undated_inspections_are_dropped() {
    let inspections = normalize_inspections(vec![
        RawInspectionRecord::default(),
        RawInspectionRecord {
            id: Some("annual".to_string()),
            created_at: NaiveDate::from_ymd_opt(2026, 1, 10),
        },
    ]);

    assert_eq!(inspections.len(), 1);
    assert_eq!(inspections[0].id, "annual");
}

#[test]
fn preservation_defaults_are_conservative() {
    let recs = normalize_preservation(vec![RawPreservationRecommendation {
        estimated_cost_min: Some(1_200.0),
        ..RawPreservationRecommendation::default()
    }]);
    let rec = &recs[0];

    assert_eq!(rec.priority, PreservationPriority::Optional);
    assert_eq!(rec.roi_multiple, 1.0);
    // Missing max falls back to the min, never below it.
    assert_eq!(rec.estimated_cost_max, 1_200.0);
}
