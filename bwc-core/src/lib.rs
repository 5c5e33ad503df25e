//! Core library for body-worn-camera clip analysis.
//!
//! This crate parses clip metadata out of file names, probes durations with
//! ffprobe, groups clips whose recordings overlap into concurrent scenes,
//! finds each person's missing time between recordings, and exports the
//! results as reports, playlists and organized folders.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use bwc_core::config::{CoreConfigBuilder, OutputMode};
//! use bwc_core::external::{FfprobeDurationProbe, StdFsMetadataProvider};
//! use std::path::PathBuf;
//!
//! let config = CoreConfigBuilder::new()
//!     .input_dir(PathBuf::from("/path/to/clips"))
//!     .output_dir(PathBuf::from("/path/to/output"))
//!     .mode(OutputMode::Both)
//!     .build()
//!     .unwrap();
//!
//! let report = bwc_core::process_directory(
//!     &config,
//!     &FfprobeDurationProbe::new(),
//!     &StdFsMetadataProvider,
//! ).unwrap();
//!
//! for gap in &report.analysis.gaps {
//!     println!("{} idle for {}s", gap.identity(), gap.gap_duration_secs);
//! }
//! ```

pub mod analysis;
pub mod clip;
pub mod config;
pub mod discovery;
pub mod error;
pub mod export;
pub mod external;
pub mod gaps;
pub mod grouping;
pub mod ingest;
pub mod logging;
pub mod naming;
pub mod pipeline;
pub mod report;
pub mod terminal;
pub mod utils;

// Re-exports for public API
pub use analysis::{Analysis, analyze};
pub use clip::Clip;
pub use config::{CoreConfig, CoreConfigBuilder, OutputMode, ReportFormat};
pub use error::{CoreError, CoreResult};
pub use export::{ExportSummary, run_exports};
pub use gaps::{Gap, find_gaps};
pub use grouping::{GroupingStrategy, SceneGroup, assign_groups, scene_groups};
pub use ingest::{IngestReport, SkipCounts, SkipReason, SkippedFile, scan_directory};
pub use naming::{Identity, ParsedName, parse_file_name};
pub use pipeline::{RunReport, process_directory};
pub use utils::format_bytes;
