//! Roadmap aggregation and statistics.
//!
//! This module provides pure functions for summarizing roadmap records:
//! duration averages per course and frequency counts for levels, tools,
//! and skills. No I/O, no display concerns, no state between calls.

use crate::models::CourseRecord;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Average `duration_weeks` per distinct course.
///
/// Every record contributes to exactly one group. The result is ordered by
/// ascending average; ties are broken by course name so identical input
/// always yields identical output. Empty input yields an empty vector.
pub fn average_duration_by_course(records: &[CourseRecord]) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();

    for record in records {
        let entry = totals.entry(record.course.as_str()).or_insert((0.0, 0));
        entry.0 += record.duration_weeks;
        entry.1 += 1;
    }

    let mut averages: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(course, (sum, count))| (course.to_string(), sum / count as f64))
        .collect();

    averages.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    averages
}

/// Count occurrences of each distinct `level` value.
///
/// Labels are counted verbatim, with no normalization and no fixed
/// enumeration: levels absent from the input are absent from the result.
pub fn level_distribution(records: &[CourseRecord]) -> HashMap<String, usize> {
    let mut dist: HashMap<String, usize> = HashMap::new();

    for record in records {
        *dist.entry(record.level.clone()).or_default() += 1;
    }

    dist
}

/// The `limit` most common tools across all records.
///
/// Each record's `tools` field is split on commas, trimmed, and empty
/// elements are dropped before counting. The result is ordered by
/// descending count, ties broken by tool name ascending, and never
/// exceeds `limit` entries. `limit` is expected to be at least 1
/// (validated at the CLI boundary); entries never have a count of 0.
pub fn top_tools(records: &[CourseRecord], limit: usize) -> Vec<(String, usize)> {
    let mut sorted = sorted_counts(count_list_field(records, |r| r.tools()));
    sorted.truncate(limit);
    sorted
}

/// Count skill occurrences across the given records.
///
/// Uses the same split/trim/drop-empty rule as [`top_tools`]. Scoping is
/// the caller's job: pass a pre-filtered slice to count skills for a
/// single course or level subset.
pub fn skill_distribution(records: &[CourseRecord]) -> HashMap<String, usize> {
    count_list_field(records, |r| r.skills())
}

/// Order a count map by descending count, ties by name ascending.
pub fn sorted_counts(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

/// Accumulate counts over a comma-list field of every record.
fn count_list_field<'a, F, I>(records: &'a [CourseRecord], field: F) -> HashMap<String, usize>
where
    F: Fn(&'a CourseRecord) -> I,
    I: Iterator<Item = &'a str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in records {
        for item in field(record) {
            *counts.entry(item.to_string()).or_default() += 1;
        }
    }

    counts
}
