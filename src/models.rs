//! Data models for the roadmap reporter.
//!
//! This module contains the core data structures used throughout
//! the application for representing roadmap records and reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the course roadmap table.
///
/// The `tools` and `skill` fields hold comma-joined lists; use
/// [`CourseRecord::tools`] and [`CourseRecord::skills`] to iterate the
/// cleaned elements instead of reading the raw strings.
///
/// Precondition for aggregation: the loader has already produced a numeric
/// `duration_weeks` and string values for every other field. Malformed rows
/// are rejected at load time, never coerced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course name. Non-empty, shared by many records.
    #[serde(rename = "Course")]
    pub course: String,
    /// Skill-level label (e.g., "Beginner"). Open set, counted verbatim.
    #[serde(rename = "Level")]
    pub level: String,
    /// Duration of this roadmap step in weeks.
    #[serde(rename = "Duration_Weeks")]
    pub duration_weeks: f64,
    /// Comma-joined tool names, possibly empty.
    #[serde(rename = "Tools")]
    pub tools: String,
    /// Comma-joined skill names, possibly empty.
    #[serde(rename = "Skill")]
    pub skill: String,
}

impl CourseRecord {
    /// Iterate the tool names in this record, trimmed, empties dropped.
    pub fn tools(&self) -> impl Iterator<Item = &str> {
        split_list(&self.tools)
    }

    /// Iterate the skill names in this record, trimmed, empties dropped.
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        split_list(&self.skill)
    }
}

/// Split a comma-joined list field into its cleaned elements.
///
/// Each element is trimmed; empty elements (trailing commas, `",,"`) are
/// dropped rather than surfacing as a name of `""`.
pub fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Average duration for one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseAverage {
    /// Course name.
    pub course: String,
    /// Arithmetic mean of `duration_weeks` across the course's records.
    pub average_weeks: f64,
}

/// A named frequency count (level, tool, or skill).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    /// The counted label.
    pub name: String,
    /// Number of occurrences.
    pub count: usize,
}

impl CountEntry {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Skill breakdown for a single selected course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseFocus {
    /// The selected course.
    pub course: String,
    /// Level labels the records were narrowed to (empty = all levels).
    pub levels: Vec<String>,
    /// Number of records in the filtered subset.
    pub records: usize,
    /// Skill frequency within the subset, descending by count.
    pub skills: Vec<CountEntry>,
}

/// Metadata about the generated report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Path of the roadmap CSV that was analyzed.
    pub source: String,
    /// Date and time the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Total number of records loaded.
    pub total_records: usize,
    /// Number of distinct course names.
    pub distinct_courses: usize,
    /// Wall-clock duration of the run in seconds.
    pub duration_seconds: f64,
}

/// The complete roadmap statistics report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Metadata about the report.
    pub metadata: ReportMetadata,
    /// Average duration per course, ascending by average.
    pub average_duration: Vec<CourseAverage>,
    /// Skill-level frequency across all records, descending by count.
    pub level_counts: Vec<CountEntry>,
    /// Most common tools across all records, descending by count.
    pub top_tools: Vec<CountEntry>,
    /// Skill breakdown for the selected course, if one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_focus: Option<CourseFocus>,
}
