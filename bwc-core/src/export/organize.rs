//! Copies scene members into per-scene folders.
//!
//! Every group gets `<output>/<case>_concurrentScene-<id>/`. Copies run on a
//! dedicated rayon pool sized by the configured worker count; each task writes
//! its own destination file. Sources are only ever read.

use crate::clip::Clip;
use crate::error::{CoreError, CoreResult};
use crate::grouping::SceneGroup;
use crate::terminal;

use rayon::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Outcome of organizing every group.
#[derive(Debug, Default)]
pub struct CopySummary {
    /// Number of files copied successfully
    pub copied: usize,
    /// One `CopyFailure` per file that could not be copied
    pub failures: Vec<CoreError>,
}

/// Copies the members of every group into its scene folder.
///
/// # Arguments
///
/// * `output_dir` - Directory that receives the scene folders
/// * `groups` - Scene groups to organize
/// * `workers` - Maximum number of concurrent copies
///
/// # Returns
///
/// * `Ok(CopySummary)` - Per-file results; individual failures do not abort
/// * `Err(CoreError::OperationFailed)` - If the worker pool cannot be created
pub fn organize_groups(
    output_dir: &Path,
    groups: &[SceneGroup<'_>],
    workers: usize,
) -> CoreResult<CopySummary> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .build()
        .map_err(|e| CoreError::OperationFailed(format!("Failed to initialize copy pool: {e}")))?;

    let mut summary = CopySummary::default();
    for group in groups {
        let folder = output_dir.join(group.playlist_stem());
        if let Err(e) = fs::create_dir_all(&folder) {
            log::error!("Cannot create scene folder {}: {}", folder.display(), e);
            summary.failures.extend(group.clips.iter().map(|clip| CoreError::CopyFailure {
                source_path: clip.path.clone(),
                destination: folder.clone(),
                reason: e.to_string(),
            }));
            continue;
        }

        let pb = terminal::copy_progress_bar(group.clips.len() as u64, &group.playlist_stem());
        let results: Vec<CoreResult<PathBuf>> = pool.install(|| {
            group
                .clips
                .par_iter()
                .map(|clip| {
                    let result = copy_clip(clip, &folder);
                    pb.inc(1);
                    result
                })
                .collect()
        });
        pb.finish_and_clear();

        for result in results {
            match result {
                Ok(dest) => {
                    log::debug!("Copied to {}", dest.display());
                    summary.copied += 1;
                }
                Err(err) => {
                    log::warn!("{err}");
                    summary.failures.push(err);
                }
            }
        }
        log::info!("Files organized into: {}", folder.display());
    }

    Ok(summary)
}

/// Copies one clip into `folder`, keeping the source modification time.
fn copy_clip(clip: &Clip, folder: &Path) -> CoreResult<PathBuf> {
    let destination = match clip.path.file_name() {
        Some(name) => folder.join(name),
        None => folder.join(&clip.file_name),
    };
    fs::copy(&clip.path, &destination).map_err(|e| CoreError::CopyFailure {
        source_path: clip.path.clone(),
        destination: destination.clone(),
        reason: e.to_string(),
    })?;

    if let Err(e) = preserve_mtime(&clip.path, &destination) {
        log::debug!(
            "Could not preserve modification time on {}: {}",
            destination.display(),
            e
        );
    }
    Ok(destination)
}

fn preserve_mtime(source: &Path, destination: &Path) -> std::io::Result<()> {
    let modified = fs::metadata(source)?.modified()?;
    File::options()
        .write(true)
        .open(destination)?
        .set_modified(modified)
}
