//! FFprobe integration for clip duration probing.
//!
//! Durations come from the container's `format.duration` field and are
//! truncated to whole seconds.

use super::DurationProbe;
use crate::error::{CoreError, CoreResult};

use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;

/// Probes clip durations by running ffprobe through the `ffprobe` crate.
#[derive(Debug, Clone, Default)]
pub struct FfprobeDurationProbe;

impl FfprobeDurationProbe {
    pub fn new() -> Self {
        Self
    }
}

impl DurationProbe for FfprobeDurationProbe {
    fn probe_duration(&self, path: &Path) -> CoreResult<u64> {
        log::debug!("Running ffprobe (via crate) for duration on: {}", path.display());
        match ffprobe(path) {
            Ok(metadata) => {
                let raw = metadata.format.duration.ok_or_else(|| unprobeable(
                    path,
                    "container reports no duration",
                ))?;
                duration_from_str(&raw).ok_or_else(|| {
                    unprobeable(path, format!("unusable duration value '{raw}'"))
                })
            }
            Err(err) => {
                log::debug!("ffprobe failed for duration on {}: {:?}", path.display(), err);
                Err(map_ffprobe_error(err, path))
            }
        }
    }
}

/// Converts ffprobe's decimal seconds string into whole seconds.
fn duration_from_str(raw: &str) -> Option<u64> {
    let secs = raw.trim().parse::<f64>().ok()?;
    if secs.is_finite() && secs >= 0.0 {
        Some(secs.trunc() as u64)
    } else {
        None
    }
}

fn unprobeable(path: &Path, reason: impl Into<String>) -> CoreError {
    CoreError::Unprobeable {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

fn map_ffprobe_error(err: FfProbeError, path: &Path) -> CoreError {
    let reason = match err {
        FfProbeError::Io(io_err) => format!("failed to start ffprobe: {io_err}"),
        FfProbeError::Status(output) => format!(
            "ffprobe exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ),
        FfProbeError::Deserialize(err) => format!("ffprobe output deserialization: {err}"),
        other => format!("unknown ffprobe error: {other:?}"),
    };
    unprobeable(path, reason)
}
