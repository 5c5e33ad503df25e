//! Clip records: one parsed and probed video file.

use crate::naming::{Identity, ParsedName};

use chrono::{Duration, NaiveDateTime};
use std::path::{Path, PathBuf};

/// A single video file with its recording interval.
///
/// Built once from a [`ParsedName`] plus probed duration and size. Only
/// `group` changes after construction, when the grouper assigns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    pub file_name: String,
    pub path: PathBuf,
    pub first_name: String,
    pub last_name: String,
    pub case_number: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_secs: u64,
    pub file_size_bytes: u64,
    pub group: Option<u32>,
}

impl Clip {
    /// Creates a clip ending `duration_secs` after the capture time.
    pub fn new(
        parsed: ParsedName,
        file_name: impl Into<String>,
        path: impl Into<PathBuf>,
        duration_secs: u64,
        file_size_bytes: u64,
    ) -> Self {
        let start_time = parsed.capture_time;
        // Durations beyond i64 seconds are not real recordings; saturate instead of wrapping.
        let secs = i64::try_from(duration_secs).unwrap_or(i64::MAX);
        let end_time = Duration::try_seconds(secs)
            .and_then(|d| start_time.checked_add_signed(d))
            .unwrap_or(NaiveDateTime::MAX);

        Self {
            file_name: file_name.into(),
            path: path.into(),
            first_name: parsed.first_name,
            last_name: parsed.last_name,
            case_number: parsed.case_number,
            start_time,
            end_time,
            duration_secs,
            file_size_bytes,
            group: None,
        }
    }

    pub fn identity(&self) -> Identity {
        Identity::new(&self.first_name, &self.last_name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::parse_file_name;

    #[test]
    fn test_end_time_adds_duration() {
        let parsed = parse_file_name("Alice_Smith_01_01_2024_23_59_30_CASE1.mp4").unwrap();
        let clip = Clip::new(parsed, "Alice_Smith_01_01_2024_23_59_30_CASE1.mp4", "/v/a.mp4", 45, 10);
        assert_eq!(clip.end_time.to_string(), "2024-01-02 00:00:15");
        assert_eq!(clip.duration_secs, 45);
        assert_eq!(clip.file_size_bytes, 10);
        assert_eq!(clip.group, None);
        assert_eq!(clip.identity(), Identity::new("Alice", "Smith"));
    }

    #[test]
    fn test_zero_duration_clip() {
        let parsed = parse_file_name("A_B_01_01_2024_10_00_00_C.mp4").unwrap();
        let clip = Clip::new(parsed, "A_B_01_01_2024_10_00_00_C.mp4", "/v/a.mp4", 0, 0);
        assert_eq!(clip.start_time, clip.end_time);
    }
}
