//! End-to-end run: scan, analyze, export.

use crate::analysis::{Analysis, analyze};
use crate::config::CoreConfig;
use crate::error::CoreResult;
use crate::export::{ExportSummary, run_exports};
use crate::external::{DurationProbe, FileMetadataProvider};
use crate::ingest::{IngestReport, SkipCounts, SkippedFile, scan_directory};

/// Everything a run produced, for the caller's summary and exit code.
#[derive(Debug)]
pub struct RunReport {
    /// Regular files found in the input directory
    pub regular_files: usize,
    /// Files that did not become clips
    pub skipped: Vec<SkippedFile>,
    pub analysis: Analysis,
    pub exports: ExportSummary,
}

impl RunReport {
    /// Counts of skipped files by cause.
    pub fn skip_counts(&self) -> SkipCounts {
        SkipCounts::tally(&self.skipped)
    }

    /// True when any output target failed to write.
    pub fn has_export_failures(&self) -> bool {
        self.exports.has_failures()
    }
}

/// Runs the whole pipeline for one input directory.
///
/// The configuration is validated first, so an invalid input directory fails
/// before anything is written. Per-file problems never fail the run; they
/// are reported in the returned [`RunReport`].
///
/// # Examples
///
/// ```rust,no_run
/// use bwc_core::config::CoreConfigBuilder;
/// use bwc_core::external::{FfprobeDurationProbe, StdFsMetadataProvider};
/// use bwc_core::process_directory;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .input_dir(PathBuf::from("/path/to/clips"))
///     .build()
///     .unwrap();
/// let report = process_directory(&config, &FfprobeDurationProbe::new(), &StdFsMetadataProvider).unwrap();
/// println!("{} scene(s)", report.analysis.group_count);
/// ```
pub fn process_directory(
    config: &CoreConfig,
    probe: &dyn DurationProbe,
    metadata: &dyn FileMetadataProvider,
) -> CoreResult<RunReport> {
    config.validate()?;

    let IngestReport {
        clips,
        skipped,
        regular_files,
    } = scan_directory(&config.input_dir, probe, metadata)?;

    let analysis = analyze(clips, config.grouping);
    log::info!(
        "Found {} concurrent scene(s) and {} missing time chunk(s)",
        analysis.group_count,
        analysis.gaps.len()
    );

    let exports = run_exports(config, &analysis);

    Ok(RunReport {
        regular_files,
        skipped,
        analysis,
        exports,
    })
}
