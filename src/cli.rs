//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::{Path, PathBuf};

/// roadmap-report - statistics reports for course roadmap CSVs
///
/// Summarize a course roadmap table: average duration per course,
/// skill-level distribution, most common tools, and per-course skill
/// breakdowns. Markdown/JSON reports. Built in Rust.
///
/// Examples:
///   roadmap-report all_courses_roadmap.csv
///   roadmap-report all_courses_roadmap.csv --format json -o report.json
///   roadmap-report all_courses_roadmap.csv --course "Data Science" --level Beginner,Advanced
///   roadmap-report all_courses_roadmap.csv --check
///   roadmap-report --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to the roadmap CSV file
    ///
    /// Expects the headers Course, Level, Duration_Weeks, Tools, Skill.
    /// Not required when using --init-config.
    #[arg(value_name = "CSV", required_unless_present = "init_config")]
    pub input: Option<PathBuf>,

    /// Output file path for the report
    ///
    /// Defaults to roadmap_report.md (or the config file's setting).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (markdown, json)
    #[arg(short, long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Course to focus the skill breakdown on
    ///
    /// Adds a skill-frequency section scoped to this course's records.
    #[arg(short, long, value_name = "NAME")]
    pub course: Option<String>,

    /// Level labels to narrow the course focus to (comma-separated)
    ///
    /// Example: --level Beginner,Advanced. Requires --course.
    /// Labels are matched verbatim against the Level column.
    #[arg(short, long, value_name = "LEVELS", value_delimiter = ',')]
    pub level: Option<Vec<String>>,

    /// How many entries the Top Tools table lists
    ///
    /// Can also be set via ROADMAP_TOP_TOOLS or .roadmap-report.toml.
    #[arg(long, value_name = "COUNT", env = "ROADMAP_TOP_TOOLS")]
    pub top_tools: Option<usize>,

    /// Write the filtered records to this path as CSV
    ///
    /// With --course (and optionally --level), exports the matching
    /// subset; without them, exports all loaded records.
    #[arg(short, long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .roadmap-report.toml in the current directory
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Load and validate the CSV, print counts, and exit without a report
    #[arg(long)]
    pub check: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .roadmap-report.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the input path, defaulting to empty (should be validated first).
    pub fn input_path(&self) -> &Path {
        self.input.as_deref().unwrap_or_else(|| Path::new(""))
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        let input = self.input.as_deref().unwrap_or_else(|| Path::new(""));

        if input.as_os_str().is_empty() {
            return Err("A roadmap CSV path is required".to_string());
        }

        if input.exists() && !input.is_file() {
            return Err(format!("Input path is not a file: {}", input.display()));
        }

        // Missing input files surface as SourceUnavailable from the loader,
        // with the user-facing "not found" message; not re-checked here.

        if let Some(top_tools) = self.top_tools {
            if top_tools == 0 {
                return Err("--top-tools must be at least 1".to_string());
            }
        }

        if self.level.is_some() && self.course.is_none() {
            return Err("--level requires --course".to_string());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            input: Some(PathBuf::from("all_courses_roadmap.csv")),
            output: None,
            format: OutputFormat::Markdown,
            course: None,
            level: None,
            top_tools: None,
            export: None,
            config: None,
            check: false,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_validation_accepts_defaults() {
        let args = make_args();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_requires_input() {
        let mut args = make_args();
        args.input = Some(PathBuf::new());
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_zero_top_tools() {
        let mut args = make_args();
        args.top_tools = Some(0);
        assert!(args.validate().is_err());

        args.top_tools = Some(1);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_level_requires_course() {
        let mut args = make_args();
        args.level = Some(vec!["Beginner".to_string()]);
        assert!(args.validate().is_err());

        args.course = Some("Data Science".to_string());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_skipped_for_init_config() {
        let mut args = make_args();
        args.input = None;
        args.init_config = true;
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
