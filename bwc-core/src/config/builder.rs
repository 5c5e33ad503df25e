// ============================================================================
// bwc-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// This module implements the builder pattern for the CoreConfig structure,
// providing a fluent API for creating CoreConfig instances with defaults
// for everything except the input directory.
//
// KEY COMPONENTS:
// - CoreConfigBuilder: Builder struct for creating CoreConfig instances
// - Output and log directory defaults derived from the input directory

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::{CoreConfig, DEFAULT_LOG_SUBDIR, OutputMode, ReportFormat};
use crate::error::{CoreError, CoreResult};
use crate::grouping::GroupingStrategy;

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use bwc_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .input_dir(PathBuf::from("/path/to/clips"))
///     .build()
///     .unwrap();
///
/// // Output defaults to the input directory, logs to <output>/logs.
/// assert_eq!(config.output_dir, PathBuf::from("/path/to/clips"));
/// assert_eq!(config.log_dir, PathBuf::from("/path/to/clips/logs"));
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfigBuilder {
    // Required fields
    input_dir: Option<PathBuf>,

    // Optional directory fields
    output_dir: Option<PathBuf>,
    log_dir: Option<PathBuf>,

    // Optional fields with defaults
    file_logging: bool,
    mode: OutputMode,
    report_format: ReportFormat,
    organize_files: bool,
    copy_workers: usize,
    grouping: GroupingStrategy,
    run_stamp: Option<String>,
}

impl Default for CoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self {
            input_dir: None,

            output_dir: None,
            log_dir: None,

            file_logging: true,
            mode: OutputMode::default(),
            report_format: ReportFormat::default(),
            organize_files: false,
            copy_workers: super::DEFAULT_COPY_WORKERS,
            grouping: GroupingStrategy::default(),
            run_stamp: None,
        }
    }

    /// Sets the directory containing the clips.
    pub fn input_dir(mut self, input_dir: PathBuf) -> Self {
        self.input_dir = Some(input_dir);
        self
    }

    /// Sets the output directory. Defaults to the input directory.
    pub fn output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = Some(output_dir);
        self
    }

    /// Sets the log directory. Defaults to `<output>/logs`.
    pub fn log_dir(mut self, log_dir: PathBuf) -> Self {
        self.log_dir = Some(log_dir);
        self
    }

    /// Sets whether a run log file is written.
    pub fn file_logging(mut self, enable: bool) -> Self {
        self.file_logging = enable;
        self
    }

    /// Sets which outputs the run produces.
    pub fn mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the report file format.
    pub fn report_format(mut self, format: ReportFormat) -> Self {
        self.report_format = format;
        self
    }

    /// Sets whether group members are copied into per-group folders.
    pub fn organize_files(mut self, enable: bool) -> Self {
        self.organize_files = enable;
        self
    }

    /// Sets the number of concurrent copy workers.
    ///
    /// # Arguments
    ///
    /// * `workers` - Worker count (1-64)
    pub fn copy_workers(mut self, workers: usize) -> Self {
        self.copy_workers = workers;
        self
    }

    /// Sets the grouping strategy.
    pub fn grouping(mut self, strategy: GroupingStrategy) -> Self {
        self.grouping = strategy;
        self
    }

    /// Sets the run stamp used in output file names. Defaults to the current local time.
    pub fn run_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.run_stamp = Some(stamp.into());
        self
    }

    /// Builds a CoreConfig instance from the builder.
    ///
    /// Only the presence of required fields is checked here; call
    /// [`CoreConfig::validate`] to check the file system and ranges.
    ///
    /// # Returns
    ///
    /// * `Ok(CoreConfig)` - The assembled configuration
    /// * `Err(CoreError::Config)` - If the input directory was not set
    pub fn build(self) -> CoreResult<CoreConfig> {
        let input_dir = self
            .input_dir
            .ok_or_else(|| CoreError::Config("input_dir is required".to_string()))?;
        let output_dir = self.output_dir.unwrap_or_else(|| input_dir.clone());
        let log_dir = self
            .log_dir
            .unwrap_or_else(|| output_dir.join(DEFAULT_LOG_SUBDIR));

        Ok(CoreConfig {
            input_dir,
            output_dir,
            log_dir,
            file_logging: self.file_logging,
            mode: self.mode,
            report_format: self.report_format,
            organize_files: self.organize_files,
            copy_workers: self.copy_workers,
            grouping: self.grouping,
            run_stamp: self.run_stamp.unwrap_or_else(crate::utils::get_timestamp),
        })
    }
}
