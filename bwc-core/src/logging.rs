//! Logging setup for a scene manager run.
//!
//! Everything is routed through the `log` facade to log4rs. The console
//! receives bare messages (terminal helpers already style them); the run log
//! file, when enabled, receives timestamped and levelled lines.

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::path::{Path, PathBuf};

/// Pattern used for lines written to the run log file.
pub const FILE_LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}] {m}{n}";

/// Returns the run log path for the given log directory and stamp.
pub fn log_file_path(log_dir: &Path, stamp: &str) -> PathBuf {
    log_dir.join(format!("bwc_scene_run_{stamp}.log"))
}

/// Initializes the global logger.
///
/// # Arguments
///
/// * `log_file` - Run log to create, or `None` for console output only
/// * `log_level` - Maximum level passed to every appender
///
/// # Errors
///
/// Fails if the log directory or file cannot be created, or if a global
/// logger was already installed.
pub fn setup_logging(log_file: Option<&Path>, log_level: LevelFilter) -> Result<()> {
    let console = ConsoleAppender::builder()
        .target(Target::Stdout)
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .build();

    let mut builder =
        Config::builder().appender(Appender::builder().build("console", Box::new(console)));
    let mut root = Root::builder().appender("console");

    if let Some(log_file) = log_file {
        if let Some(parent) = log_file.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create log directory: {}", parent.display())
            })?;
        }

        let file_appender = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(FILE_LOG_PATTERN)))
            .build(log_file)
            .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

        builder = builder.appender(Appender::builder().build("file", Box::new(file_appender)));
        root = root.appender("file");
    }

    let config = builder.build(root.build(log_level))?;
    log4rs::init_config(config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path() {
        let path = log_file_path(Path::new("/out/logs"), "20240101_100000");
        assert_eq!(path, PathBuf::from("/out/logs/bwc_scene_run_20240101_100000.log"));
    }
}
