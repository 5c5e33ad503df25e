//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `process` command.
/// This command analyzes a clip directory and writes reports and playlists.
pub mod process;
