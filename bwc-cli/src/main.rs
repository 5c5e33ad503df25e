//! Main entry point for the bwc-scene CLI application.
//!
//! Parses the command line and dispatches to the command handler. Exit code
//! 1 means the run could not start (bad input directory, bad configuration,
//! logging setup) or at least one output could not be written. Copy failures
//! alone do not change the exit code.

use bwc_cli::{Commands, parse_cli, run_process};
use console::style;

use std::process::ExitCode;

fn main() -> ExitCode {
    let cli_args = parse_cli();

    match cli_args.command {
        Commands::Process(args) => match run_process(args, cli_args.verbose) {
            Ok(report) if report.has_export_failures() => {
                eprintln!(
                    "{} {} output(s) could not be written",
                    style("Error:").red().bold().for_stderr(),
                    report.exports.failures.len()
                );
                ExitCode::FAILURE
            }
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("{e}");
                eprintln!("{} {e}", style("Error:").red().bold().for_stderr());
                ExitCode::FAILURE
            }
        },
    }
}
