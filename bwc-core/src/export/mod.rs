// ============================================================================
// bwc-core/src/export/mod.rs
// ============================================================================
//
// EXPORT: Reports, Playlists and File Organization
//
// This module writes everything a run produces into the output directory.
// Each output file is an independent target: a target that cannot be written
// is recorded as an ExportWriteFailure and the remaining targets are still
// attempted.
//
// KEY COMPONENTS:
// - csv: metadata and missing time tables as delimited text
// - xlsx: both tables as sheets of one workbook
// - playlist: one M3U playlist per concurrent scene
// - organize: copies scene members into per-scene folders

// ---- Internal crate imports ----
use crate::analysis::Analysis;
use crate::config::CoreConfig;
use crate::error::{CoreError, export_error};
use crate::report::ReportRows;
use crate::terminal;

// ---- Standard library imports ----
use std::path::{Path, PathBuf};

// ============================================================================
// SUBMODULES
// ============================================================================

pub mod csv;
pub mod organize;
pub mod playlist;
pub mod xlsx;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use organize::{CopySummary, organize_groups};

/// Base name of the metadata report files.
pub const METADATA_REPORT_PREFIX: &str = "bwc_metadata";

/// Base name of the missing time report file.
pub const GAP_REPORT_PREFIX: &str = "bwc_missing_time_chunks";

/// Stamped report path, e.g. `bwc_metadata_20240101_100000.csv`.
pub fn report_path(output_dir: &Path, prefix: &str, stamp: &str, extension: &str) -> PathBuf {
    output_dir.join(format!("{prefix}_{stamp}.{extension}"))
}

// ============================================================================
// EXPORT SUMMARY
// ============================================================================

/// What the export stage wrote and what it could not.
#[derive(Debug, Default)]
pub struct ExportSummary {
    /// Files written successfully, in the order they were written
    pub written: Vec<PathBuf>,

    /// One `ExportWriteFailure` per target that could not be written
    pub failures: Vec<CoreError>,

    /// Copy results, when file organization ran
    pub copies: Option<CopySummary>,
}

impl ExportSummary {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    fn record(&mut self, result: Result<PathBuf, CoreError>) {
        match result {
            Ok(path) => {
                log::debug!("Wrote {}", path.display());
                self.written.push(path);
            }
            Err(err) => {
                log::error!("{err}");
                self.failures.push(err);
            }
        }
    }
}

// ============================================================================
// EXPORT DRIVER
// ============================================================================

/// Writes every output selected by the configuration.
///
/// Reports are written when the mode includes reports, in the configured
/// format(s). Playlists are written when the mode includes playlists, and
/// scene folders are organized alongside them when enabled. Failures never
/// stop later targets.
pub fn run_exports(config: &CoreConfig, analysis: &Analysis) -> ExportSummary {
    let mut summary = ExportSummary::default();
    let output_dir = config.output_dir.as_path();
    let stamp = config.run_stamp.as_str();

    if let Err(e) = std::fs::create_dir_all(output_dir) {
        summary.failures.push(export_error(output_dir.display(), e));
        log::error!("Cannot create output directory {}", output_dir.display());
        return summary;
    }

    if config.mode.includes_reports() {
        terminal::print_processing("Writing reports");
        let rows = ReportRows::assemble(analysis);

        if config.report_format.includes_csv() {
            let clip_path = report_path(output_dir, METADATA_REPORT_PREFIX, stamp, "csv");
            summary.record(csv::write_clip_csv(&clip_path, &rows.clips).map(|()| clip_path));

            let gap_path = report_path(output_dir, GAP_REPORT_PREFIX, stamp, "csv");
            summary.record(csv::write_gap_csv(&gap_path, &rows.gaps).map(|()| gap_path));
        }

        if config.report_format.includes_xlsx() {
            let workbook_path = report_path(output_dir, METADATA_REPORT_PREFIX, stamp, "xlsx");
            summary.record(xlsx::write_workbook(&workbook_path, &rows).map(|()| workbook_path));
        }
    }

    if config.mode.includes_playlists() {
        terminal::print_processing("Writing concurrent scene playlists");
        let groups = analysis.groups();
        for group in &groups {
            summary.record(playlist::write_playlist(output_dir, group));
        }

        if config.organize_files {
            terminal::print_processing("Organizing files into scene folders");
            match organize_groups(output_dir, &groups, config.copy_workers) {
                Ok(copies) => summary.copies = Some(copies),
                Err(e) => summary.record(Err(export_error("scene folders", e))),
            }
        }
    } else if config.organize_files {
        terminal::print_warning("File organization runs with playlist export; skipped in report mode");
    }

    for path in &summary.written {
        terminal::print_sub_item(&format!("Wrote {}", path.display()));
    }

    summary
}
