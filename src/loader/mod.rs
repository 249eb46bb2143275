//! CSV loading and writing for roadmap records.
//!
//! The loader is the only place that touches the filesystem for record
//! data. It produces fully-typed [`CourseRecord`]s so the aggregator
//! never has to deal with missing files or non-numeric durations.

use crate::models::CourseRecord;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or writing roadmap data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The backing CSV file does not exist.
    #[error("'{}' not found. Please add it to this folder.", path.display())]
    SourceUnavailable { path: PathBuf },

    /// The file exists but could not be read or written.
    #[error("failed to access '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed into a record (wrong shape, or a
    /// non-numeric `Duration_Weeks` value).
    #[error("malformed record in '{}'", path.display())]
    MalformedRecord {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Load all roadmap records from a CSV file.
///
/// Expects the original header row (`Course,Level,Duration_Weeks,Tools,Skill`).
/// Whole-field whitespace is trimmed by the reader; the per-element trimming
/// inside comma-joined lists happens later, at aggregation time.
pub fn load_records(path: &Path) -> Result<Vec<CourseRecord>, LoadError> {
    if !path.exists() {
        return Err(LoadError::SourceUnavailable {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize::<CourseRecord>() {
        let record = row.map_err(|source| LoadError::MalformedRecord {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record);
    }

    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write records back out as CSV with the original headers.
///
/// Used by `--export` to save a filtered subset of the roadmap.
pub fn write_records(path: &Path, records: &[CourseRecord]) -> Result<(), LoadError> {
    let file = File::create(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer
            .serialize(record)
            .map_err(|source| LoadError::MalformedRecord {
                path: path.to_path_buf(),
                source,
            })?;
    }

    writer.flush().map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_records() {
        let file = write_temp_csv(
            "Course,Level,Duration_Weeks,Tools,Skill\n\
             Data Science,Beginner,4,\"Python, pandas\",\"EDA, Statistics\"\n\
             Data Science,Advanced,8,Python,Modeling\n",
        );

        let records = load_records(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].course, "Data Science");
        assert_eq!(records[0].duration_weeks, 4.0);
        assert_eq!(records[1].level, "Advanced");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_records(Path::new("no_such_roadmap.csv")).unwrap_err();

        assert!(matches!(err, LoadError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_non_numeric_duration() {
        let file = write_temp_csv(
            "Course,Level,Duration_Weeks,Tools,Skill\n\
             Data Science,Beginner,six,Python,EDA\n",
        );

        let err = load_records(file.path()).unwrap_err();

        assert!(matches!(err, LoadError::MalformedRecord { .. }));
    }

    #[test]
    fn test_load_sample_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/sample_roadmap.csv");

        let records = load_records(&path).unwrap();

        assert!(!records.is_empty());
        assert!(records.iter().all(|r| !r.course.is_empty()));
        assert!(records.iter().all(|r| r.duration_weeks >= 0.0));
    }

    #[test]
    fn test_write_records_round_trip() {
        let records = vec![CourseRecord {
            course: "Web Development".to_string(),
            level: "Intermediate".to_string(),
            duration_weeks: 6.0,
            tools: "JavaScript, React".to_string(),
            skill: "Components".to_string(),
        }];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        write_records(&path, &records).unwrap();

        let reloaded = load_records(&path).unwrap();
        assert_eq!(reloaded, records);
    }
}
