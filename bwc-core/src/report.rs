//! Report rows for the metadata and missing time tables.
//!
//! Rows are plain serde structs so the CSV writer can serialize them
//! directly; field order is the column order.

use crate::analysis::Analysis;
use crate::clip::Clip;
use crate::gaps::Gap;

use chrono::NaiveDateTime;
use serde::Serialize;

/// Timestamp layout used in every report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column headers of the metadata table, in order.
pub const CLIP_COLUMNS: [&str; 9] = [
    "file_name",
    "first_name",
    "last_name",
    "case_number",
    "start_time",
    "end_time",
    "duration",
    "file_size",
    "group",
];

/// Column headers of the missing time table, in order.
pub const GAP_COLUMNS: [&str; 5] = [
    "first_name",
    "last_name",
    "gap_start",
    "gap_end",
    "gap_duration_seconds",
];

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// One row of the metadata table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClipRow {
    pub file_name: String,
    pub first_name: String,
    pub last_name: String,
    pub case_number: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: u64,
    pub file_size: u64,
    pub group: Option<u32>,
}

impl From<&Clip> for ClipRow {
    fn from(clip: &Clip) -> Self {
        Self {
            file_name: clip.file_name.clone(),
            first_name: clip.first_name.clone(),
            last_name: clip.last_name.clone(),
            case_number: clip.case_number.clone(),
            start_time: format_timestamp(&clip.start_time),
            end_time: format_timestamp(&clip.end_time),
            duration: clip.duration_secs,
            file_size: clip.file_size_bytes,
            group: clip.group,
        }
    }
}

/// One row of the missing time table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapRow {
    pub first_name: String,
    pub last_name: String,
    pub gap_start: String,
    pub gap_end: String,
    pub gap_duration_seconds: u64,
}

impl From<&Gap> for GapRow {
    fn from(gap: &Gap) -> Self {
        Self {
            first_name: gap.first_name.clone(),
            last_name: gap.last_name.clone(),
            gap_start: format_timestamp(&gap.gap_start),
            gap_end: format_timestamp(&gap.gap_end),
            gap_duration_seconds: gap.gap_duration_secs,
        }
    }
}

/// Both report tables, ready for any writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRows {
    pub clips: Vec<ClipRow>,
    pub gaps: Vec<GapRow>,
}

impl ReportRows {
    /// Builds rows in the analysis order: clips chronological, gaps per identity.
    pub fn assemble(analysis: &Analysis) -> Self {
        Self {
            clips: analysis.clips.iter().map(ClipRow::from).collect(),
            gaps: analysis.gaps.iter().map(GapRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::grouping::GroupingStrategy;
    use crate::naming::parse_file_name;

    #[test]
    fn test_assemble_rows() {
        let name = "Alice_Smith_01_01_2024_10_00_00_CASE1.mp4";
        let later = "Alice_Smith_01_01_2024_10_05_00_CASE1.mp4";
        let clips = vec![
            Clip::new(parse_file_name(name).unwrap(), name, "/in/a.mp4", 60, 2048),
            Clip::new(parse_file_name(later).unwrap(), later, "/in/b.mp4", 60, 4096),
        ];
        let rows = ReportRows::assemble(&analyze(clips, GroupingStrategy::RunningMax));

        assert_eq!(
            rows.clips[0],
            ClipRow {
                file_name: name.to_string(),
                first_name: "Alice".to_string(),
                last_name: "Smith".to_string(),
                case_number: "CASE1".to_string(),
                start_time: "2024-01-01 10:00:00".to_string(),
                end_time: "2024-01-01 10:01:00".to_string(),
                duration: 60,
                file_size: 2048,
                group: Some(1),
            }
        );
        assert_eq!(rows.clips[1].group, Some(2));
        assert_eq!(
            rows.gaps,
            vec![GapRow {
                first_name: "Alice".to_string(),
                last_name: "Smith".to_string(),
                gap_start: "2024-01-01 10:01:00".to_string(),
                gap_end: "2024-01-01 10:05:00".to_string(),
                gap_duration_seconds: 240,
            }]
        );
    }

    #[test]
    fn test_timestamp_is_zero_padded() {
        let ts = parse_file_name("A_B_03_04_2024_05_06_07_C.mp4").unwrap().capture_time;
        assert_eq!(format_timestamp(&ts), "2024-03-04 05:06:07");
    }
}
