// ============================================================================
// bwc-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL COLLABORATORS: Media Probing and File System Metadata
//
// This module encapsulates the collaborators the core needs from outside the
// process: ffprobe for clip durations and the file system for clip sizes.
// Both are reached through traits so the pipeline can be driven by mocks in
// tests.
//
// KEY COMPONENTS:
// - DurationProbe: returns a clip's duration in whole seconds
// - FileMetadataProvider: returns a file's size in bytes
// - FfprobeDurationProbe / StdFsMetadataProvider: production implementations

// ---- Internal crate imports ----
use crate::error::CoreResult;

// ---- Standard library imports ----
use std::path::Path;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the ffprobe-backed duration probe
pub mod ffprobe_executor;

#[cfg(test)]
pub(crate) mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::FfprobeDurationProbe;

// ============================================================================
// DURATION PROBING
// ============================================================================

/// Trait for obtaining the recorded duration of a media file.
///
/// Implementations must be shareable across threads because probes run on
/// the rayon pool.
///
/// # Examples
///
/// ```rust,no_run
/// use bwc_core::external::DurationProbe;
/// use bwc_core::CoreResult;
/// use std::path::Path;
///
/// struct FixedProbe;
///
/// impl DurationProbe for FixedProbe {
///     fn probe_duration(&self, _path: &Path) -> CoreResult<u64> {
///         Ok(60)
///     }
/// }
///
/// assert_eq!(FixedProbe.probe_duration(Path::new("/fake/clip.mp4")).unwrap(), 60);
/// ```
pub trait DurationProbe: Sync {
    /// Gets the duration of the media file in whole seconds.
    ///
    /// # Returns
    ///
    /// * `Ok(u64)` - The duration, truncated to whole seconds
    /// * `Err(CoreError::Unprobeable)` - If the file cannot be probed
    fn probe_duration(&self, path: &Path) -> CoreResult<u64>;
}

// ============================================================================
// FILE METADATA ACCESS
// ============================================================================

/// Trait for abstracting file metadata access operations.
///
/// This trait provides an abstraction over file system operations to retrieve
/// metadata about files, such as their size. It allows for dependency injection
/// and easier testing by decoupling the code from direct file system access.
pub trait FileMetadataProvider: Sync {
    /// Gets the size of the file at the given path in bytes.
    fn get_size(&self, path: &Path) -> CoreResult<u64>;
}

/// Standard implementation of FileMetadataProvider using the standard library.
#[derive(Debug, Clone, Default)]
pub struct StdFsMetadataProvider;

impl FileMetadataProvider for StdFsMetadataProvider {
    fn get_size(&self, path: &Path) -> CoreResult<u64> {
        Ok(std::fs::metadata(path)?.len())
    }
}
