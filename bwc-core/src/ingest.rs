//! Clip ingestion: turns the files of an input directory into clips.
//!
//! Each file is parsed, probed for duration and size, and becomes either a
//! [`Clip`] or a [`SkippedFile`]. A clip is all-or-nothing; any failure
//! excludes the file and records why.

use crate::clip::Clip;
use crate::discovery::list_regular_files;
use crate::error::CoreResult;
use crate::external::{DurationProbe, FileMetadataProvider};
use crate::naming::parse_file_name;

use rayon::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};

/// Why a file did not become a clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file name does not follow the clip naming convention.
    MalformedFilename,
    /// The duration probe failed.
    Unprobeable(String),
    /// The file size could not be read.
    SizeUnavailable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MalformedFilename => write!(f, "file name does not match the clip naming convention"),
            SkipReason::Unprobeable(reason) => write!(f, "duration unavailable: {reason}"),
            SkipReason::SizeUnavailable(reason) => write!(f, "file size unavailable: {reason}"),
        }
    }
}

/// A file excluded from the clip set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file_name: String,
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Outcome of scanning an input directory.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// Clips in discovery order.
    pub clips: Vec<Clip>,
    /// Excluded files in discovery order.
    pub skipped: Vec<SkippedFile>,
    /// Number of regular files found in the directory.
    pub regular_files: usize,
}

/// Skipped files tallied by cause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    pub malformed: usize,
    pub unprobeable: usize,
    pub size_unavailable: usize,
}

impl SkipCounts {
    pub fn tally(skipped: &[SkippedFile]) -> Self {
        skipped.iter().fold(Self::default(), |mut counts, s| {
            match s.reason {
                SkipReason::MalformedFilename => counts.malformed += 1,
                SkipReason::Unprobeable(_) => counts.unprobeable += 1,
                SkipReason::SizeUnavailable(_) => counts.size_unavailable += 1,
            }
            counts
        })
    }
}

impl IngestReport {
    pub fn skip_counts(&self) -> SkipCounts {
        SkipCounts::tally(&self.skipped)
    }
}

/// Builds a clip from one file, or reports why it was excluded.
pub fn build_clip(
    path: &Path,
    probe: &dyn DurationProbe,
    metadata: &dyn FileMetadataProvider,
) -> Result<Clip, SkippedFile> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let skip = |reason: SkipReason| SkippedFile {
        file_name: file_name.clone(),
        path: path.to_path_buf(),
        reason,
    };

    let parsed = parse_file_name(&file_name).map_err(|_| skip(SkipReason::MalformedFilename))?;
    let duration_secs = probe
        .probe_duration(path)
        .map_err(|e| skip(SkipReason::Unprobeable(e.to_string())))?;
    let file_size_bytes = metadata
        .get_size(path)
        .map_err(|e| skip(SkipReason::SizeUnavailable(e.to_string())))?;

    Ok(Clip::new(parsed, file_name.clone(), path, duration_secs, file_size_bytes))
}

/// Scans the top level of `input_dir` and builds a clip for every conforming file.
///
/// Probes run in parallel; results keep the discovery order of the files.
/// Per-file failures never abort the scan.
///
/// # Returns
///
/// * `Ok(IngestReport)` - Clips plus every excluded file and the reason
/// * `Err(CoreError::InvalidInputDirectory)` - If the directory cannot be listed
pub fn scan_directory(
    input_dir: &Path,
    probe: &dyn DurationProbe,
    metadata: &dyn FileMetadataProvider,
) -> CoreResult<IngestReport> {
    let files = list_regular_files(input_dir)?;
    let regular_files = files.len();

    let outcomes: Vec<Result<Clip, SkippedFile>> = files
        .par_iter()
        .map(|path| build_clip(path, probe, metadata))
        .collect();

    let mut report = IngestReport {
        regular_files,
        ..Default::default()
    };
    for outcome in outcomes {
        match outcome {
            Ok(clip) => {
                log::debug!(
                    "Clip {} starts {} ({}s)",
                    clip.file_name,
                    clip.start_time,
                    clip.duration_secs
                );
                report.clips.push(clip);
            }
            Err(skipped) => {
                match &skipped.reason {
                    SkipReason::MalformedFilename => {
                        log::debug!("Skipping {}: {}", skipped.file_name, skipped.reason)
                    }
                    _ => log::warn!("Error processing {}: {}", skipped.file_name, skipped.reason),
                }
                report.skipped.push(skipped);
            }
        }
    }

    log::info!(
        "Read {} clip(s) from {} file(s); {} skipped",
        report.clips.len(),
        report.regular_files,
        report.skipped.len()
    );
    Ok(report)
}
