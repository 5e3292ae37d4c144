//! Per-run output directories and the writers that fill them.
//!
//! Layout on disk:
//!
//! ```text
//! results/
//!   20240101-000000/
//!     Fitness-over-Iterations.png
//!     summary.txt
//! ```
//!
//! # Components
//!
//! - `plot`: PNG line charts
//! - `summary`: `summary.txt` report of a run
//! - `series`: CSV input for the plot writer

pub mod plot;
pub mod series;
pub mod summary;

pub use plot::{plot_file_name, plot_line_graph, sanitize_title, Figure};
pub use series::read_series_csv;
pub use summary::{
    load_run_record, load_run_summary, render_summary, save_result_to_file, RunRecord, RunSummary,
    SUMMARY_FILE_NAME,
};

use crate::{ReportError, Result};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Default results root, relative to the working directory
pub const RESULTS_DIR: &str = "results";

/// `strftime` pattern of run directory names
pub const RUN_DIR_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Where and how large the run outputs are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub results_root: PathBuf,
    pub plot_width: u32,
    pub plot_height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_root: PathBuf::from(RESULTS_DIR),
            plot_width: 640,
            plot_height: 480,
        }
    }
}

impl OutputConfig {
    pub fn with_results_root<P: Into<PathBuf>>(results_root: P) -> Self {
        Self {
            results_root: results_root.into(),
            ..Default::default()
        }
    }
}

/// Directory name of a run, e.g. `20240101-000000`
pub fn run_dir_name(timestamp: &NaiveDateTime) -> String {
    timestamp.format(RUN_DIR_FORMAT).to_string()
}

/// Timestamp encoded in a run directory name
pub fn parse_run_dir_name(name: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(name, RUN_DIR_FORMAT)
}

/// Path of a run directory, without touching the filesystem
pub fn run_dir<P: AsRef<Path>>(results_root: P, timestamp: &NaiveDateTime) -> PathBuf {
    results_root.as_ref().join(run_dir_name(timestamp))
}

/// Create the run directory if it is missing and return its path.
///
/// An existing directory is left as is. Anything else that prevents the
/// directory from existing (a file with the same name, permissions, a full
/// disk) is reported as [`ReportError::CreateDir`].
pub fn ensure_run_dir<P: AsRef<Path>>(
    results_root: P,
    timestamp: &NaiveDateTime,
) -> Result<PathBuf> {
    let path = run_dir(results_root, timestamp);

    if path.is_dir() {
        log::debug!("Run directory {} already exists", path.display());
        return Ok(path);
    }

    fs::create_dir_all(&path).map_err(|source| ReportError::CreateDir {
        path: path.clone(),
        source,
    })?;
    log::debug!("Created run directory {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 2)
            .unwrap()
    }

    #[test]
    fn test_run_dir_name_is_zero_padded() {
        assert_eq!(run_dir_name(&timestamp()), "20240309-070502");
    }

    #[test]
    fn test_parse_run_dir_name() {
        assert_eq!(parse_run_dir_name("20240309-070502").unwrap(), timestamp());
        assert!(parse_run_dir_name("2024-03-09").is_err());
    }

    #[test]
    fn test_run_dir_joins_root() {
        assert_eq!(
            run_dir("results", &timestamp()),
            PathBuf::from("results").join("20240309-070502")
        );
    }

    #[test]
    fn test_default_config() {
        let config = OutputConfig::default();
        assert_eq!(config.results_root, PathBuf::from("results"));
        assert_eq!((config.plot_width, config.plot_height), (640, 480));
    }

    #[test]
    fn test_ensure_run_dir_creates_missing_root() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path().join("results");

        let path = ensure_run_dir(&root, &timestamp())?;

        assert!(path.is_dir());
        assert_eq!(path, root.join("20240309-070502"));
        Ok(())
    }

    #[test]
    fn test_ensure_run_dir_is_idempotent() -> Result<()> {
        let dir = tempdir()?;
        let first = ensure_run_dir(dir.path(), &timestamp())?;
        fs::write(first.join("keep.txt"), "data")?;

        let second = ensure_run_dir(dir.path(), &timestamp())?;

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(second.join("keep.txt"))?, "data");
        assert_eq!(fs::read_dir(&second)?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_ensure_run_dir_reports_file_in_the_way() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("20240309-070502"), "not a directory")?;

        let result = ensure_run_dir(dir.path(), &timestamp());

        assert_matches!(result, Err(ReportError::CreateDir { .. }));
        Ok(())
    }
}
