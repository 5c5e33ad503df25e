//! Implementation of the 'process' subcommand.
//!
//! Builds the core configuration from the flags, validates it before anything
//! is written, sets up logging, runs the bwc-core pipeline and prints the run
//! summary.

use crate::cli::ProcessArgs;
use crate::error::CliResult;
use crate::logging::init_logging;

use bwc_core::config::{CoreConfig, CoreConfigBuilder};
use bwc_core::external::{FfprobeDurationProbe, StdFsMetadataProvider};
use bwc_core::utils::get_timestamp;
use bwc_core::{GroupingStrategy, RunReport, format_bytes, process_directory, terminal};

use std::time::Instant;

/// Builds the run configuration from the command-line arguments.
pub fn build_config(args: &ProcessArgs, stamp: &str) -> CliResult<CoreConfig> {
    let mut builder = CoreConfigBuilder::new()
        .input_dir(args.input_dir.clone())
        .mode(args.mode.into())
        .report_format(args.report_format.into())
        .organize_files(args.organize)
        .copy_workers(usize::from(args.copy_workers))
        .file_logging(!args.no_log)
        .run_stamp(stamp);

    if let Some(output_dir) = &args.output_dir {
        builder = builder.output_dir(output_dir.clone());
    }
    if let Some(log_dir) = &args.log_dir {
        builder = builder.log_dir(log_dir.clone());
    }
    if args.legacy_grouping {
        builder = builder.grouping(GroupingStrategy::Adjacent);
    }

    builder.build()
}

/// Runs the `process` command.
///
/// # Returns
///
/// * `Ok(RunReport)` - The run finished; the caller checks it for export failures
/// * `Err(CoreError)` - Invalid configuration or input directory, or logging setup failed
pub fn run_process(args: ProcessArgs, verbose: bool) -> CliResult<RunReport> {
    let stamp = get_timestamp();
    let config = build_config(&args, &stamp)?;

    // Nothing is created on disk until the configuration is known to be usable.
    config.validate()?;

    let log_file = init_logging(&config.log_dir, config.file_logging, &stamp, verbose)?;

    terminal::print_section("BWC Scene Manager");
    terminal::print_status("Input", &config.input_dir.display().to_string(), false);
    terminal::print_status("Output", &config.output_dir.display().to_string(), false);
    terminal::print_status("Mode", &config.mode.to_string(), false);
    if config.mode.includes_reports() {
        terminal::print_status("Report format", &config.report_format.to_string(), false);
    }
    if config.organize_files {
        terminal::print_status("Copy workers", &config.copy_workers.to_string(), false);
    }
    if config.grouping == GroupingStrategy::Adjacent {
        terminal::print_status("Grouping", "legacy (adjacent clips only)", false);
    }
    if let Some(path) = &log_file {
        terminal::print_status("Log file", &path.display().to_string(), false);
    }

    let start = Instant::now();
    terminal::print_processing("Reading clip metadata");
    let report = process_directory(&config, &FfprobeDurationProbe::new(), &StdFsMetadataProvider)?;

    print_summary(&report, start.elapsed().as_secs_f64());
    Ok(report)
}

fn print_summary(report: &RunReport, elapsed_secs: f64) {
    let skips = report.skip_counts();
    let analysis = &report.analysis;
    let total_bytes: u64 = analysis.clips.iter().map(|c| c.file_size_bytes).sum();

    terminal::print_section("Summary");
    terminal::print_status("Files found", &report.regular_files.to_string(), false);
    terminal::print_status(
        "Clips",
        &format!("{} ({})", analysis.clips.len(), format_bytes(total_bytes)),
        true,
    );
    if skips.malformed > 0 {
        terminal::print_status("Bad file names", &skips.malformed.to_string(), false);
    }
    if skips.unprobeable > 0 {
        terminal::print_status("Unprobeable", &skips.unprobeable.to_string(), false);
    }
    if skips.size_unavailable > 0 {
        terminal::print_status("Size unknown", &skips.size_unavailable.to_string(), false);
    }
    terminal::print_status("Scenes", &analysis.group_count.to_string(), true);
    terminal::print_status("Missing time", &analysis.gaps.len().to_string(), true);
    terminal::print_status("Files written", &report.exports.written.len().to_string(), false);

    if let Some(copies) = &report.exports.copies {
        terminal::print_status("Files copied", &copies.copied.to_string(), false);
        for failure in &copies.failures {
            terminal::print_warning(&failure.to_string());
        }
    }

    if report.has_export_failures() {
        for failure in &report.exports.failures {
            terminal::print_error(
                "Export failed",
                &failure.to_string(),
                Some("Check that the output directory is writable"),
            );
        }
    } else {
        terminal::print_success(&format!("Completed in {elapsed_secs:.1}s"));
    }
}
