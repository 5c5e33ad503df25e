// ============================================================================
// bwc-cli/src/logging.rs
// ============================================================================
//
// LOGGING UTILITIES: Logger initialization for a CLI run
//
// The logger itself is log4rs, configured by bwc_core::logging. This file
// decides the level and the run log location from the command-line flags.
//
// KEY COMPONENTS:
// - log_level: Debug with --verbose, Info otherwise
// - init_logging: level from --verbose, log file unless --no-log

use crate::error::CliResult;

use bwc_core::CoreError;

use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Maps the verbose flag to a log level.
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger for this run.
///
/// # Returns
///
/// The path of the run log file, or `None` when file logging is disabled.
pub fn init_logging(
    log_dir: &Path,
    file_logging: bool,
    stamp: &str,
    verbose: bool,
) -> CliResult<Option<PathBuf>> {
    let level = log_level(verbose);
    let log_file = file_logging.then(|| bwc_core::logging::log_file_path(log_dir, stamp));

    bwc_core::logging::setup_logging(log_file.as_deref(), level)
        .map_err(|e| CoreError::OperationFailed(format!("Failed to set up logging: {e:#}")))?;

    if level == LevelFilter::Debug {
        log::debug!("Debug level logging enabled");
    }
    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(true), LevelFilter::Debug);
        assert_eq!(log_level(false), LevelFilter::Info);
    }

    #[test]
    fn test_unwritable_log_dir_reports_once() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("file");
        std::fs::write(&not_a_dir, b"").unwrap();

        let err = init_logging(&not_a_dir.join("logs"), true, "20240101_100000", false).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Operation failed: Failed to set up logging: "));
        assert!(message.contains("Failed to create log directory"));
        assert_eq!(message.matches("Operation failed").count(), 1);
    }
}
