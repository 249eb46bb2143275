//! roadmap-report - Course Roadmap Statistics CLI
//!
//! A CLI tool that loads a course-roadmap CSV and generates a
//! statistics report: average duration per course, skill-level
//! distribution, top tools, and per-course skill breakdowns.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (missing file, malformed data, write failure)

mod analysis;
mod cli;
mod config;
mod loader;
mod models;
mod report;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::{Args, OutputFormat};
use config::Config;
use models::{CountEntry, CourseAverage, CourseFocus, CourseRecord, Report, ReportMetadata};
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        if let Err(e) = handle_init_config() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    // Initialize logging
    init_logging(&args);

    info!("roadmap-report v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the report pipeline
    match run_report(args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Report failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .roadmap-report.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".roadmap-report.toml");

    if path.exists() {
        eprintln!("⚠️  .roadmap-report.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .roadmap-report.toml")?;

    println!("✅ Created .roadmap-report.toml with default settings.");
    println!("   Edit it to customize the output path and report tables.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete report workflow. Returns the exit code.
fn run_report(args: Args) -> Result<i32> {
    let start_time = Instant::now();

    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    // Step 1: Load the records
    let input = args.input_path();
    println!("📥 Loading roadmap: {}", input.display());

    let records = loader::load_records(input)?;
    let distinct_courses = count_distinct_courses(&records);

    println!("✅ Data loaded successfully!");
    println!("   Records: {}", records.len());
    println!("   Unique courses: {}", distinct_courses);

    // Handle --check: validate and exit without writing a report
    if args.check {
        println!("\n✅ Check complete. The roadmap parses cleanly.");
        return Ok(0);
    }

    // Step 2: Select the course focus subset, if requested
    let focus_records = args.course.as_ref().map(|course| {
        let levels = args.level.clone().unwrap_or_default();
        filter_records(&records, course, &levels)
    });

    if let (Some(course), Some(subset)) = (args.course.as_ref(), focus_records.as_ref()) {
        if subset.is_empty() {
            warn!("No records match course '{}' with the given levels", course);
        } else {
            info!("Course focus '{}': {} records", course, subset.len());
        }
    }

    // Step 3: Export the filtered subset, if requested
    if let Some(ref export_path) = args.export {
        let subset = focus_records.as_deref().unwrap_or(&records);
        loader::write_records(export_path, subset)?;
        println!(
            "📥 Exported {} records to: {}",
            subset.len(),
            export_path.display()
        );
    }

    // Step 4: Aggregate
    println!("\n🔬 Computing statistics...");

    let average_duration: Vec<CourseAverage> = analysis::average_duration_by_course(&records)
        .into_iter()
        .map(|(course, average_weeks)| CourseAverage {
            course,
            average_weeks,
        })
        .collect();

    let level_counts = to_count_entries(analysis::sorted_counts(analysis::level_distribution(
        &records,
    )));

    let top_tools = analysis::top_tools(&records, config.report.top_tools)
        .into_iter()
        .map(|(name, count)| CountEntry::new(name, count))
        .collect();

    let course_focus = args.course.as_ref().map(|course| {
        let subset = focus_records.as_deref().unwrap_or(&[]);
        CourseFocus {
            course: course.clone(),
            levels: args.level.clone().unwrap_or_default(),
            records: subset.len(),
            skills: to_count_entries(analysis::sorted_counts(analysis::skill_distribution(
                subset,
            ))),
        }
    });

    // Step 5: Build the report
    println!("📝 Generating report...");

    let metadata = ReportMetadata {
        source: input.display().to_string(),
        generated_at: Utc::now(),
        total_records: records.len(),
        distinct_courses,
        duration_seconds: start_time.elapsed().as_secs_f64(),
    };

    let report = Report {
        metadata,
        average_duration,
        level_counts,
        top_tools,
        course_focus,
    };

    // Step 6: Write the report
    let output = std::path::PathBuf::from(&config.general.output);
    let content = match args.format {
        OutputFormat::Json => report::generate_json_report(&report)?,
        OutputFormat::Markdown => {
            report::generate_markdown_report(&report, config.report.include_toc)
        }
    };

    std::fs::write(&output, &content)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;

    // Print summary
    println!("\n📊 Report Summary:");
    println!("   Courses: {}", report.average_duration.len());
    println!("   Levels seen: {}", report.level_counts.len());
    println!("   Tools listed: {}", report.top_tools.len());
    if let Some(ref focus) = report.course_focus {
        println!(
            "   Focus: {} ({} records, {} skills)",
            focus.course,
            focus.records,
            focus.skills.len()
        );
    }
    println!(
        "\n✅ Report complete! Saved to: {}",
        output.display()
    );

    Ok(0)
}

/// Number of distinct course names across all records.
fn count_distinct_courses(records: &[CourseRecord]) -> usize {
    records
        .iter()
        .map(|r| r.course.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Records for one course, optionally narrowed to the given level labels.
///
/// Level labels match verbatim; an empty label list keeps all levels.
fn filter_records(records: &[CourseRecord], course: &str, levels: &[String]) -> Vec<CourseRecord> {
    records
        .iter()
        .filter(|r| r.course == course)
        .filter(|r| levels.is_empty() || levels.iter().any(|l| l == &r.level))
        .cloned()
        .collect()
}

/// Convert ordered (name, count) pairs into report entries.
fn to_count_entries(pairs: Vec<(String, usize)>) -> Vec<CountEntry> {
    pairs
        .into_iter()
        .map(|(name, count)| CountEntry::new(name, count))
        .collect()
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .roadmap-report.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
