use flexi_logger::{
    colored_default_format, opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger,
    LoggerHandle, Naming,
};
use std::path::Path;

/// Start the global logger.
///
/// `RUST_LOG` wins over `spec`. Without `log_dir` the output goes to stderr;
/// with it, to size-rotated `ga_report` files in that directory. Keep the
/// returned handle alive for as long as logging is needed.
pub fn setup_logging(spec: &str, log_dir: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(spec)?;

    let logger = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename("ga_report"))
            .format(opt_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // 10 MB per file
                Naming::Numbers,
                Cleanup::KeepLogFiles(7),
            ),
        None => logger.format(colored_default_format),
    };

    logger.start()
}
