//! Plain-text summary of one optimizer run.
//!
//! The optimizer hands over a [`RunRecord`]; it is validated once into a
//! [`RunSummary`] and written as `summary.txt` in the run directory.

use crate::catalog;
use crate::output::{ensure_run_dir, OutputConfig};
use crate::{ReportError, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Name of the report inside a run directory
pub const SUMMARY_FILE_NAME: &str = "summary.txt";

/// Raw result record, as produced by the optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// 1-based index into [`catalog::OBJECTIVE_FUNCTIONS`]
    pub obj_func: usize,
    pub obj_dimen: usize,
    pub pool_size: usize,
    pub mutate_prob: f64,
    pub max_iter: usize,
    pub use_softmax: bool,
    pub best_obj_value: f64,
    pub best_gene: Vec<f64>,
    pub stop_iter: usize,
    pub stop_reason: String,
}

/// A run record that passed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RunRecord", into = "RunRecord")]
pub struct RunSummary {
    record: RunRecord,
}

impl RunSummary {
    /// Validate a raw record.
    ///
    /// Fails when the objective index is outside the catalog or the mutation
    /// probability is not in `[0, 1]`. A best gene whose length differs from
    /// `obj_dimen` is accepted with a warning.
    pub fn new(record: RunRecord) -> Result<Self> {
        catalog::objective_name(record.obj_func)?;

        if !(0.0..=1.0).contains(&record.mutate_prob) {
            return Err(ReportError::InvalidSummary(format!(
                "mutation probability must be within [0, 1], got {}",
                record.mutate_prob
            )));
        }

        if record.best_gene.len() != record.obj_dimen {
            log::warn!(
                "⚠️  Best gene has {} components, objective dimension is {}",
                record.best_gene.len(),
                record.obj_dimen
            );
        }

        Ok(Self { record })
    }

    pub fn objective_name(&self) -> &'static str {
        // obj_func was checked against the catalog in `new`
        catalog::OBJECTIVE_FUNCTIONS[self.record.obj_func - 1]
    }

    pub fn objective_index(&self) -> usize {
        self.record.obj_func
    }

    pub fn dimension(&self) -> usize {
        self.record.obj_dimen
    }

    pub fn pool_size(&self) -> usize {
        self.record.pool_size
    }

    pub fn mutate_prob(&self) -> f64 {
        self.record.mutate_prob
    }

    pub fn max_iter(&self) -> usize {
        self.record.max_iter
    }

    pub fn use_softmax(&self) -> bool {
        self.record.use_softmax
    }

    pub fn best_obj_value(&self) -> f64 {
        self.record.best_obj_value
    }

    pub fn best_gene(&self) -> &[f64] {
        &self.record.best_gene
    }

    pub fn stop_iter(&self) -> usize {
        self.record.stop_iter
    }

    pub fn stop_reason(&self) -> &str {
        &self.record.stop_reason
    }
}

impl TryFrom<RunRecord> for RunSummary {
    type Error = ReportError;

    fn try_from(record: RunRecord) -> Result<Self> {
        Self::new(record)
    }
}

impl From<RunSummary> for RunRecord {
    fn from(summary: RunSummary) -> Self {
        summary.record
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

/// Shortest round-trip form of a float, spelled the way Python prints it:
/// `0.1`, `1.0`, `1e-07`, `1.5e+20`, `nan`, `inf`.
fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

/// Three-decimal fixed form; non-finite values as `nan`, `inf`, `-inf`
fn fixed3(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.3}", value)
    }
}

fn vector_repr(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|&v| float_repr(v)).collect();
    format!("[{}]", items.join(", "))
}

/// Text of `summary.txt`: ten items in a fixed order, the last one being the
/// `Best gene:` heading followed by the vector on its own line.
pub fn render_summary(summary: &RunSummary) -> String {
    format!(
        "Objective function: {}\n\
         Dimension of objective function: {}\n\
         Pool size: {}\n\
         Mutation probability: {}\n\
         Used softmax function: {}\n\
         Maximum number of iterations: {}\n\
         Stopped at iteration: {}\n\
         Reason for stopping: {}\n\
         Best fitness value: {}\n\
         Best gene:\n\
         {}\n",
        summary.objective_name(),
        summary.dimension(),
        summary.pool_size(),
        float_repr(summary.mutate_prob()),
        yes_no(summary.use_softmax()),
        summary.max_iter(),
        summary.stop_iter(),
        summary.stop_reason(),
        fixed3(summary.best_obj_value()),
        vector_repr(summary.best_gene()),
    )
}

/// Write `summary.txt` into the run directory, replacing any previous one.
///
/// Returns the path of the written file.
pub fn save_result_to_file(
    config: &OutputConfig,
    summary: &RunSummary,
    timestamp: &NaiveDateTime,
) -> Result<PathBuf> {
    let output_dir = ensure_run_dir(&config.results_root, timestamp)?;
    let path = output_dir.join(SUMMARY_FILE_NAME);

    let mut writer = BufWriter::new(File::create(&path)?);
    writer.write_all(render_summary(summary).as_bytes())?;
    writer.flush()?;

    log::info!(
        "📝 Summary for {} (stopped at iteration {}) saved to {}",
        summary.objective_name(),
        summary.stop_iter(),
        path.display()
    );
    Ok(path)
}

/// Read a JSON result record without validating it
pub fn load_run_record<P: AsRef<Path>>(path: P) -> Result<RunRecord> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let record: RunRecord = serde_json::from_reader(reader)?;
    log::debug!("Loaded run record from {}", path.as_ref().display());
    Ok(record)
}

/// Load and validate a JSON result record
pub fn load_run_summary<P: AsRef<Path>>(path: P) -> Result<RunSummary> {
    RunSummary::new(load_run_record(path)?)
}
