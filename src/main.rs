use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

use ga_report::catalog::parse_objective;
use ga_report::logging::setup_logging;
use ga_report::output::{
    load_run_record, parse_run_dir_name, plot_line_graph, read_series_csv, run_dir_name,
    save_result_to_file, OutputConfig, RunSummary, RESULTS_DIR,
};

#[derive(Parser, Debug)]
#[command(
    name = "ga_report",
    version,
    about = "Write plots and summaries of genetic optimizer runs."
)]
struct Args {
    /// Root folder holding one directory per run
    #[arg(long, global = true, default_value = RESULTS_DIR)]
    results_root: PathBuf,

    /// Run timestamp as YYYYMMDD-HHMMSS (defaults to now)
    #[arg(short, long, global = true, value_parser = parse_timestamp)]
    timestamp: Option<NaiveDateTime>,

    /// Plot width in pixels
    #[arg(long, global = true, default_value_t = 640)]
    width: u32,

    /// Plot height in pixels
    #[arg(long, global = true, default_value_t = 480)]
    height: u32,

    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Write logs to rotated files in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plot a metric over iterations from a CSV file with x,y columns
    Plot {
        /// CSV file with a header row and two numeric columns
        #[arg(short, long)]
        input: PathBuf,

        /// Plot title, also used for the file name
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "Iteration")]
        x_label: String,

        #[arg(long, default_value = "Fitness")]
        y_label: String,
    },

    /// Write summary.txt from a JSON result record
    Summary {
        /// JSON document with the optimizer's result fields
        #[arg(short, long)]
        input: PathBuf,

        /// Objective function to report, by name or 1-based index (overrides obj_func)
        #[arg(short, long, value_parser = parse_objective_arg)]
        objective: Option<usize>,
    },
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, String> {
    parse_run_dir_name(value)
        .map_err(|e| format!("expected YYYYMMDD-HHMMSS, got '{}' ({})", value, e))
}

fn parse_objective_arg(value: &str) -> Result<usize, String> {
    parse_objective(value).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let _logger = setup_logging(&args.log_level, args.log_dir.as_deref())?;

    let config = OutputConfig {
        results_root: args.results_root,
        plot_width: args.width,
        plot_height: args.height,
    };
    let timestamp = args
        .timestamp
        .unwrap_or_else(|| Local::now().naive_local());

    log::info!(
        "🗂️  Run {} under {}",
        run_dir_name(&timestamp),
        config.results_root.display()
    );

    let written = match args.command {
        Command::Plot {
            input,
            title,
            x_label,
            y_label,
        } => {
            let (xs, ys) = read_series_csv(&input)?;
            plot_line_graph(&config, &xs, &ys, &x_label, &y_label, &title, &timestamp)?
        }
        Command::Summary { input, objective } => {
            let mut record = load_run_record(&input)?;
            if let Some(index) = objective {
                log::info!("Objective overridden: {} -> {}", record.obj_func, index);
                record.obj_func = index;
            }
            let summary = RunSummary::new(record)?;
            save_result_to_file(&config, &summary, &timestamp)?
        }
    };

    println!("{}", written.display());
    Ok(())
}
