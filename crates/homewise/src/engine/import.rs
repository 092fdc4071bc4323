//! CSV import for maintenance history exports.
//!
//! Home-management platforms export task and inspection history as CSV with
//! loosely formatted columns. Rows are parsed leniently and pushed through
//! the normalizer so the engine only ever sees normalized records.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::domain::{InspectionRecord, TaskRecord};
use super::normalizer::{
    normalize_inspections, normalize_tasks, RawInspectionRecord, RawTaskRecord,
};

#[derive(Debug, thiserror::Error)]
pub enum HistoryImportError {
    #[error("failed to read history export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid history CSV data: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct TaskRow {
    #[serde(rename = "Task ID")]
    id: Option<String>,
    #[serde(rename = "Status")]
    status: Option<String>,
    #[serde(rename = "Priority")]
    priority: Option<String>,
    #[serde(rename = "Actual Cost")]
    actual_cost: Option<String>,
    #[serde(rename = "Completed At")]
    completed_at: Option<String>,
    #[serde(rename = "Completed By")]
    completed_by: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InspectionRow {
    #[serde(rename = "Inspection ID")]
    id: Option<String>,
    #[serde(rename = "Created At")]
    created_at: Option<String>,
}

pub struct HistoryImporter;

impl HistoryImporter {
    pub fn tasks_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<TaskRecord>, HistoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::tasks_from_reader(file)
    }

    pub fn tasks_from_reader<R: Read>(reader: R) -> Result<Vec<TaskRecord>, HistoryImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut raw = Vec::new();
        for row in csv_reader.deserialize::<TaskRow>() {
            let row = row?;
            raw.push(RawTaskRecord {
                id: non_empty(row.id),
                status: non_empty(row.status),
                priority: non_empty(row.priority),
                actual_cost: non_empty(row.actual_cost)
                    .and_then(|value| value.replace(['$', ','], "").parse::<f64>().ok()),
                completed_at: non_empty(row.completed_at).and_then(|value| parse_date(&value)),
                completed_by: non_empty(row.completed_by),
            });
        }

        Ok(normalize_tasks(raw))
    }

    pub fn inspections_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<InspectionRecord>, HistoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::inspections_from_reader(file)
    }

    pub fn inspections_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<InspectionRecord>, HistoryImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut raw = Vec::new();
        for row in csv_reader.deserialize::<InspectionRow>() {
            let row = row?;
            raw.push(RawInspectionRecord {
                id: non_empty(row.id),
                created_at: non_empty(row.created_at).and_then(|value| parse_date(&value)),
            });
        }

        Ok(normalize_inspections(raw))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|candidate| !candidate.trim().is_empty())
}

/// Accepts plain dates and RFC 3339 timestamps (date portion only).
fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
