//! # GA Report
//!
//! Output side of the genetic optimizer experiment harness.
//!
//! ## Features
//!
//! - **Run directories**: one `results/YYYYMMDD-HHMMSS/` folder per optimizer run
//! - **Plot writer**: line charts of a metric over iterations, saved as PNG
//! - **Summary writer**: fixed-format `summary.txt` report of a run
//! - **Objective catalog**: names of the benchmark functions the optimizer minimizes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::Local;
//! use ga_report::output::{plot_line_graph, OutputConfig};
//!
//! let config = OutputConfig::default();
//! let now = Local::now().naive_local();
//! let iterations = vec![1.0, 2.0, 3.0];
//! let best = vec![4.2, 1.3, 0.7];
//! plot_line_graph(&config, &iterations, &best, "Iteration", "Fitness", "Best fitness", &now)?;
//! # Ok::<(), ga_report::ReportError>(())
//! ```

use std::path::PathBuf;

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Benchmark objective function names
pub mod catalog;

/// Run directories, plots and summaries
pub mod output;

/// Logger setup shared by the binary and embedding harnesses
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use catalog::{objective_index, objective_name, parse_objective, OBJECTIVE_FUNCTIONS};
pub use output::{
    ensure_run_dir, load_run_record, load_run_summary, parse_run_dir_name, plot_line_graph, read_series_csv,
    render_summary, run_dir, run_dir_name, sanitize_title, save_result_to_file, Figure,
    OutputConfig, RunRecord, RunSummary,
};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the report writers
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Objective function index {index} is outside the catalog (1..={len})")]
    UnknownObjective { index: usize, len: usize },

    #[error("Unknown objective function '{0}'")]
    UnknownObjectiveName(String),

    #[error("Invalid run summary: {0}")]
    InvalidSummary(String),

    #[error("Series length mismatch: x has {x_len} values, y has {y_len}")]
    SeriesLengthMismatch { x_len: usize, y_len: usize },

    #[error("Cannot create results directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Plot error: {0}")]
    Plot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ReportError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
