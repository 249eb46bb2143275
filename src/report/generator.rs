//! Markdown report generation.
//!
//! This module turns a [`Report`] into the Markdown document written to
//! disk, plus a JSON alternative for machine consumers.

use crate::models::{CountEntry, CourseFocus, Report, ReportMetadata};
use anyhow::Result;

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &Report, include_toc: bool) -> String {
    let mut output = String::new();

    // Title
    output.push_str("# Course Roadmap Report\n\n");

    // Metadata section
    output.push_str(&generate_metadata_section(&report.metadata));

    // Table of contents
    if include_toc {
        output.push_str(&generate_table_of_contents(report));
    }

    // Average duration per course
    output.push_str(&generate_duration_section(report));

    // Skill level distribution
    output.push_str(&generate_count_table(
        "Skill Level Distribution",
        "Level",
        &report.level_counts,
    ));

    // Top tools
    output.push_str(&generate_count_table(
        "Top Tools",
        "Tool",
        &report.top_tools,
    ));

    // Course focus
    if let Some(ref focus) = report.course_focus {
        output.push_str(&generate_focus_section(focus));
    }

    // Footer
    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Source:** `{}`\n", metadata.source));
    section.push_str(&format!(
        "- **Generated:** {}\n",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!("- **Records:** {}\n", metadata.total_records));
    section.push_str(&format!(
        "- **Distinct Courses:** {}\n",
        metadata.distinct_courses
    ));
    section.push_str(&format!(
        "- **Run Duration:** {:.1}s\n",
        metadata.duration_seconds
    ));
    section.push('\n');

    section
}

/// Generate the table of contents.
fn generate_table_of_contents(report: &Report) -> String {
    let mut toc = String::new();

    toc.push_str("## Table of Contents\n\n");
    toc.push_str("- [Metadata](#metadata)\n");
    toc.push_str("- [Average Duration per Course](#average-duration-per-course)\n");
    toc.push_str("- [Skill Level Distribution](#skill-level-distribution)\n");
    toc.push_str("- [Top Tools](#top-tools)\n");

    if let Some(ref focus) = report.course_focus {
        let anchor = focus
            .course
            .replace([' ', '/', '.'], "-")
            .to_lowercase();
        toc.push_str(&format!(
            "- [Skill Breakdown for {}](#skill-breakdown-for-{})\n",
            focus.course, anchor
        ));
    }

    toc.push('\n');

    toc
}

/// Generate the average-duration table, ascending by average.
fn generate_duration_section(report: &Report) -> String {
    let mut section = String::new();

    section.push_str("## Average Duration per Course\n\n");

    if report.average_duration.is_empty() {
        section.push_str("No records were loaded.\n\n");
        return section;
    }

    section.push_str("| Course | Average Duration (Weeks) |\n");
    section.push_str("|:---|:---:|\n");

    for entry in &report.average_duration {
        section.push_str(&format!(
            "| {} | {:.1} |\n",
            entry.course, entry.average_weeks
        ));
    }
    section.push('\n');

    section
}

/// Generate a name/count table section.
fn generate_count_table(title: &str, label: &str, entries: &[CountEntry]) -> String {
    let mut section = String::new();

    section.push_str(&format!("## {}\n\n", title));

    if entries.is_empty() {
        section.push_str("Nothing to count.\n\n");
        return section;
    }

    section.push_str(&format!("| {} | Count |\n", label));
    section.push_str("|:---|:---:|\n");

    for entry in entries {
        section.push_str(&format!("| {} | {} |\n", entry.name, entry.count));
    }
    section.push('\n');

    section
}

/// Generate the per-course skill breakdown section.
fn generate_focus_section(focus: &CourseFocus) -> String {
    let mut section = String::new();

    section.push_str(&format!("## Skill Breakdown for {}\n\n", focus.course));

    if focus.levels.is_empty() {
        section.push_str(&format!("*All levels | Records: {}*\n\n", focus.records));
    } else {
        section.push_str(&format!(
            "*Levels: {} | Records: {}*\n\n",
            focus.levels.join(", "),
            focus.records
        ));
    }

    if focus.skills.is_empty() {
        section.push_str("No skills recorded for this selection.\n\n");
        return section;
    }

    section.push_str("| Skill | Count |\n");
    section.push_str("|:---|:---:|\n");

    for entry in &focus.skills {
        section.push_str(&format!("| {} | {} |\n", entry.name, entry.count));
    }
    section.push('\n');

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    let mut footer = String::new();

    footer.push_str("---\n\n");
    footer.push_str("*Report generated by roadmap-report*\n");

    footer
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
