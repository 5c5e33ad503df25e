// bwc-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use bwc_core::{OutputMode, ReportFormat};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DEFAULT_COPY_WORKERS;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "BWC Scene Manager: concurrent scene and missing time analysis",
    long_about = "Groups body-worn-camera clips whose recordings overlap into concurrent scenes, \
                  reports each person's missing time between recordings, and exports reports \
                  and playlists using bwc-core."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug level logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyzes a directory of clips and writes reports and playlists
    Process(ProcessArgs),
}

/// Outputs to produce.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeArg {
    /// Metadata and missing time reports
    Report,
    /// Per-scene .m3u playlists
    Playlists,
    /// Reports and playlists
    #[default]
    Both,
}

impl From<ModeArg> for OutputMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Report => OutputMode::Report,
            ModeArg::Playlists => OutputMode::Playlists,
            ModeArg::Both => OutputMode::Both,
        }
    }
}

/// Report file formats.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormatArg {
    Csv,
    #[default]
    Xlsx,
    Both,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(format: ReportFormatArg) -> Self {
        match format {
            ReportFormatArg::Csv => ReportFormat::Csv,
            ReportFormatArg::Xlsx => ReportFormat::Xlsx,
            ReportFormatArg::Both => ReportFormat::Both,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct ProcessArgs {
    /// Directory containing the clips
    #[arg(short = 'i', long = "input", required = true, value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Optional: Directory for reports and playlists (defaults to INPUT_DIR)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Which outputs to produce
    #[arg(long, value_enum, default_value_t = ModeArg::Both)]
    pub mode: ModeArg,

    /// Report file format
    #[arg(long, value_enum, default_value_t = ReportFormatArg::Xlsx)]
    pub report_format: ReportFormatArg,

    /// Copy each scene's clips into its own subfolder of OUTPUT_DIR
    #[arg(long)]
    pub organize: bool,

    /// Number of concurrent file copies when organizing
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_COPY_WORKERS,
        value_parser = clap::value_parser!(u8).range(1..=64)
    )]
    pub copy_workers: u8,

    /// Group by comparing each clip only with the one before it
    #[arg(long)]
    pub legacy_grouping: bool,

    /// Optional: Directory for log files (defaults to OUTPUT_DIR/logs)
    #[arg(long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Do not write a run log file
    #[arg(long)]
    pub no_log: bool,
}

/// Parses the command line, exiting with a usage error on invalid input.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("bwc-scene").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["process", "-i", "/clips"]).unwrap();
        assert!(!cli.verbose);
        let Commands::Process(args) = cli.command;
        assert_eq!(args.input_dir, PathBuf::from("/clips"));
        assert_eq!(args.output_dir, None);
        assert_eq!(args.mode, ModeArg::Both);
        assert_eq!(args.report_format, ReportFormatArg::Xlsx);
        assert!(!args.organize);
        assert_eq!(args.copy_workers, 4);
        assert!(!args.legacy_grouping);
        assert!(!args.no_log);
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            "process",
            "--input",
            "/clips",
            "--output",
            "/out",
            "--mode",
            "playlists",
            "--report-format",
            "both",
            "--organize",
            "--copy-workers",
            "8",
            "--legacy-grouping",
            "--log-dir",
            "/logs",
            "--no-log",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Process(args) = cli.command;
        assert_eq!(args.output_dir, Some(PathBuf::from("/out")));
        assert_eq!(OutputMode::from(args.mode), OutputMode::Playlists);
        assert_eq!(ReportFormat::from(args.report_format), ReportFormat::Both);
        assert!(args.organize && args.legacy_grouping && args.no_log);
        assert_eq!(args.copy_workers, 8);
        assert_eq!(args.log_dir, Some(PathBuf::from("/logs")));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(parse(&["process", "-i", "/clips", "--mode", "everything"]).is_err());
        assert!(parse(&["process", "-i", "/clips", "--copy-workers", "0"]).is_err());
        assert!(parse(&["process", "-i", "/clips", "--copy-workers", "65"]).is_err());
        assert!(parse(&["process"]).is_err());
    }
}
