// bwc-core/src/external/mocks.rs

// --- Mocking Infrastructure (for unit tests) ---

use super::{DurationProbe, FileMetadataProvider};
use crate::error::{CoreError, CoreResult};
use std::collections::HashMap;
use std::path::Path;

/// Mock duration probe keyed by file name. Unknown names are unprobeable.
#[derive(Debug, Clone, Default)]
pub struct MockDurationProbe {
    durations: HashMap<String, u64>,
}

impl MockDurationProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, file_name: &str, secs: u64) -> Self {
        self.durations.insert(file_name.to_string(), secs);
        self
    }
}

impl DurationProbe for MockDurationProbe {
    fn probe_duration(&self, path: &Path) -> CoreResult<u64> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.durations
            .get(&name)
            .copied()
            .ok_or_else(|| CoreError::Unprobeable {
                path: path.to_path_buf(),
                reason: "mock: no duration registered".to_string(),
            })
    }
}

/// Mock metadata provider returning a fixed size, or failing for listed names.
#[derive(Debug, Clone, Default)]
pub struct MockMetadataProvider {
    pub size: u64,
    pub failing: Vec<String>,
}

impl FileMetadataProvider for MockMetadataProvider {
    fn get_size(&self, path: &Path) -> CoreResult<u64> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.failing.contains(&name) {
            return Err(CoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "mock: size unavailable",
            )));
        }
        Ok(self.size)
    }
}
