//! Configuration structures and constants for the bwc-core library.
//!
//! This module provides the run configuration: where clips are read from,
//! where reports and playlists are written, which outputs are produced and
//! how copies are parallelized.

mod builder;

use crate::error::{CoreError, CoreResult};
use crate::grouping::GroupingStrategy;

use std::fmt;
use std::path::PathBuf;

pub use builder::CoreConfigBuilder;

// Default constants

/// Default number of concurrent copy workers for file organization.
pub const DEFAULT_COPY_WORKERS: usize = 4;

/// Upper bound for copy workers accepted by validation.
pub const MAX_COPY_WORKERS: usize = 64;

/// Name of the log subdirectory created under the output directory.
pub const DEFAULT_LOG_SUBDIR: &str = "logs";

/// Which families of output a run produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Metadata and missing-time reports only.
    Report,
    /// Per-group playlists only.
    Playlists,
    /// Reports and playlists.
    #[default]
    Both,
}

impl OutputMode {
    pub fn includes_reports(self) -> bool {
        matches!(self, OutputMode::Report | OutputMode::Both)
    }

    pub fn includes_playlists(self) -> bool {
        matches!(self, OutputMode::Playlists | OutputMode::Both)
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputMode::Report => "report",
            OutputMode::Playlists => "playlists",
            OutputMode::Both => "both",
        })
    }
}

/// File format(s) used for tabular reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    #[default]
    Xlsx,
    Both,
}

impl ReportFormat {
    pub fn includes_csv(self) -> bool {
        matches!(self, ReportFormat::Csv | ReportFormat::Both)
    }

    pub fn includes_xlsx(self) -> bool {
        matches!(self, ReportFormat::Xlsx | ReportFormat::Both)
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Xlsx => "xlsx",
            ReportFormat::Both => "csv+xlsx",
        })
    }
}

/// Main configuration structure for the bwc-core library.
///
/// Built once per run, usually from command-line flags by bwc-cli, and
/// passed by reference to the export stage.
///
/// # Examples
///
/// ```rust,no_run
/// use bwc_core::config::{CoreConfigBuilder, OutputMode, ReportFormat};
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .input_dir(PathBuf::from("/path/to/clips"))
///     .output_dir(PathBuf::from("/path/to/output"))
///     .mode(OutputMode::Both)
///     .report_format(ReportFormat::Csv)
///     .organize_files(true)
///     .copy_workers(8)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory containing the clips to analyze
    pub input_dir: PathBuf,

    /// Directory where reports, playlists and organized folders are written
    pub output_dir: PathBuf,

    /// Directory for run log files
    pub log_dir: PathBuf,

    /// Whether a run log file is written
    pub file_logging: bool,

    /// Which outputs the run produces
    pub mode: OutputMode,

    /// Format of the tabular reports
    pub report_format: ReportFormat,

    /// Whether group members are copied into per-group folders
    pub organize_files: bool,

    /// Number of concurrent copy workers (1-64)
    pub copy_workers: usize,

    /// How clips are merged into concurrent scenes
    pub grouping: GroupingStrategy,

    /// Local run time as `YYYYMMDD_HHMMSS`, shared by every file the run writes
    pub run_stamp: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            log_dir: PathBuf::from(".").join(DEFAULT_LOG_SUBDIR),
            file_logging: true,
            mode: OutputMode::default(),
            report_format: ReportFormat::default(),
            organize_files: false,
            copy_workers: DEFAULT_COPY_WORKERS,
            grouping: GroupingStrategy::default(),
            run_stamp: crate::utils::get_timestamp(),
        }
    }
}

impl CoreConfig {
    /// Checks the configuration before any processing starts.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the configuration is usable
    /// * `Err(CoreError::InvalidInputDirectory)` - If the input is missing or not a directory
    /// * `Err(CoreError::Config)` - If any other setting is out of range
    pub fn validate(&self) -> CoreResult<()> {
        crate::discovery::validate_input_dir(&self.input_dir)?;

        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(CoreError::Config(format!(
                "output path {} is not a directory",
                self.output_dir.display()
            )));
        }
        if !(1..=MAX_COPY_WORKERS).contains(&self.copy_workers) {
            return Err(CoreError::Config(format!(
                "copy workers must be between 1 and {}, got {}",
                MAX_COPY_WORKERS, self.copy_workers
            )));
        }
        if self.run_stamp.is_empty() {
            return Err(CoreError::Config("run stamp must not be empty".to_string()));
        }
        Ok(())
    }
}
