// bwc-core/tests/pipeline_tests.rs
//
// End-to-end runs over temporary directories with mock probes, so no ffprobe
// binary is needed.

use bwc_core::config::{CoreConfig, CoreConfigBuilder, OutputMode, ReportFormat};
use bwc_core::external::{DurationProbe, FileMetadataProvider, StdFsMetadataProvider};
use bwc_core::{CoreError, CoreResult, GroupingStrategy, SkipCounts, process_directory};

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const STAMP: &str = "20240101_120000";

/// Duration probe that answers from a table of file names.
struct TableProbe(HashMap<&'static str, u64>);

impl TableProbe {
    fn new(entries: &[(&'static str, u64)]) -> Self {
        Self(entries.iter().copied().collect())
    }
}

impl DurationProbe for TableProbe {
    fn probe_duration(&self, path: &Path) -> CoreResult<u64> {
        let name = path.file_name().unwrap().to_string_lossy();
        self.0
            .get(name.as_ref())
            .copied()
            .ok_or_else(|| CoreError::Unprobeable {
                path: path.to_path_buf(),
                reason: "not a video".to_string(),
            })
    }
}

/// Size probe that always fails.
struct NoSizes;

impl FileMetadataProvider for NoSizes {
    fn get_size(&self, path: &Path) -> CoreResult<u64> {
        Err(CoreError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            format!("no size for {}", path.display()),
        )))
    }
}

fn write_files(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), name.as_bytes()).unwrap();
    }
}

fn config(input: &Path, output: &Path, mode: OutputMode, format: ReportFormat) -> CoreConfig {
    CoreConfigBuilder::new()
        .input_dir(input.to_path_buf())
        .output_dir(output.to_path_buf())
        .mode(mode)
        .report_format(format)
        .run_stamp(STAMP)
        .build()
        .unwrap()
}

#[test]
fn test_overlapping_clips_form_one_scene() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let output = tempdir()?;
    let alice = "Alice_Smith_01_01_2024_10_00_00_CASE1.mp4";
    let bob = "Bob_Jones_01_01_2024_10_00_30_CASE1.mp4";
    write_files(input.path(), &[alice, bob]);

    let report = process_directory(
        &config(input.path(), output.path(), OutputMode::Both, ReportFormat::Csv),
        &TableProbe::new(&[(alice, 60), (bob, 60)]),
        &StdFsMetadataProvider,
    )?;

    assert_eq!(report.analysis.group_count, 1);
    assert!(report.analysis.clips.iter().all(|c| c.group == Some(1)));
    assert!(report.analysis.gaps.is_empty());
    assert!(!report.has_export_failures());

    let csv = fs::read_to_string(output.path().join(format!("bwc_metadata_{STAMP}.csv")))?;
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("file_name,first_name,last_name,case_number,start_time,end_time,duration,file_size,group")
    );
    assert_eq!(
        lines.next(),
        Some(format!(
            "{alice},Alice,Smith,CASE1,2024-01-01 10:00:00,2024-01-01 10:01:00,60,{},1",
            alice.len()
        ))
        .as_deref()
    );
    assert_eq!(
        lines.next(),
        Some(format!(
            "{bob},Bob,Jones,CASE1,2024-01-01 10:00:30,2024-01-01 10:01:30,60,{},1",
            bob.len()
        ))
        .as_deref()
    );
    assert_eq!(lines.next(), None);

    let playlist = fs::read_to_string(output.path().join("CASE1_concurrentScene-1.m3u"))?;
    let expected = format!(
        "#EXTM3U\n#EXTINF:60,{alice}\n{}\n#EXTINF:60,{bob}\n{}\n",
        input.path().join(alice).display(),
        input.path().join(bob).display()
    );
    assert_eq!(playlist, expected);
    Ok(())
}

#[test]
fn test_gap_for_one_person() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let output = tempdir()?;
    let first = "Alice_Smith_01_01_2024_10_00_00_CASE1.mp4";
    let second = "Alice_Smith_01_01_2024_10_05_00_CASE1.mp4";
    write_files(input.path(), &[first, second]);

    let report = process_directory(
        &config(input.path(), output.path(), OutputMode::Report, ReportFormat::Csv),
        &TableProbe::new(&[(first, 60), (second, 60)]),
        &StdFsMetadataProvider,
    )?;

    assert_eq!(report.analysis.gaps.len(), 1);
    let gaps = fs::read_to_string(output.path().join(format!("bwc_missing_time_chunks_{STAMP}.csv")))?;
    assert_eq!(
        gaps,
        "first_name,last_name,gap_start,gap_end,gap_duration_seconds\n\
         Alice,Smith,2024-01-01 10:01:00,2024-01-01 10:05:00,240\n"
    );

    // Report mode writes no playlists.
    let playlists = fs::read_dir(output.path())?
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|x| x == "m3u"))
        .count();
    assert_eq!(playlists, 0);
    Ok(())
}

#[test]
fn test_malformed_name_is_excluded_and_counted() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let output = tempdir()?;
    let alice = "Alice_Smith_01_01_2024_10_00_00_CASE1.mp4";
    write_files(input.path(), &[alice, "BadName.mp4", "Dan_Ray_01_01_2024_11_00_00_CASE2.mp4"]);

    let report = process_directory(
        &config(input.path(), output.path(), OutputMode::Both, ReportFormat::Both),
        &TableProbe::new(&[(alice, 60), ("BadName.mp4", 60)]),
        &StdFsMetadataProvider,
    )?;

    // BadName is a parse failure; Dan is unprobeable.
    assert_eq!(report.regular_files, 3);
    assert_eq!(report.analysis.clips.len() + report.skipped.len(), report.regular_files);
    assert_eq!(
        report.skip_counts(),
        SkipCounts { malformed: 1, unprobeable: 1, size_unavailable: 0 }
    );
    assert!(report.analysis.clips.iter().all(|c| c.file_name != "BadName.mp4"));

    let csv = fs::read_to_string(output.path().join(format!("bwc_metadata_{STAMP}.csv")))?;
    assert!(!csv.contains("BadName"));
    assert!(output.path().join(format!("bwc_metadata_{STAMP}.xlsx")).is_file());
    Ok(())
}

#[test]
fn test_size_failures_are_excluded() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let output = tempdir()?;
    let alice = "Alice_Smith_01_01_2024_10_00_00_CASE1.mp4";
    write_files(input.path(), &[alice]);

    let report = process_directory(
        &config(input.path(), output.path(), OutputMode::Report, ReportFormat::Csv),
        &TableProbe::new(&[(alice, 60)]),
        &NoSizes,
    )?;
    assert!(report.analysis.clips.is_empty());
    assert_eq!(report.skip_counts().size_unavailable, 1);
    Ok(())
}

#[test]
fn test_missing_input_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    let missing = root.path().join("missing");
    let output = root.path().join("out");

    let result = process_directory(
        &config(&missing, &output, OutputMode::Both, ReportFormat::Both),
        &TableProbe::new(&[]),
        &StdFsMetadataProvider,
    );
    assert!(matches!(result, Err(CoreError::InvalidInputDirectory(_))));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_missing_output_dir_is_created() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let root = tempdir()?;
    let output = root.path().join("cases").join("2024").join("out");
    let alice = "Alice_Smith_01_01_2024_10_00_00_CASE1.mp4";
    let bob = "Bob_Jones_01_01_2024_10_00_30_CASE1.mp4";
    write_files(input.path(), &[alice, bob]);
    assert!(!output.exists());

    let report = process_directory(
        &config(input.path(), &output, OutputMode::Both, ReportFormat::Both),
        &TableProbe::new(&[(alice, 60), (bob, 60)]),
        &StdFsMetadataProvider,
    )?;

    assert!(!report.has_export_failures());
    assert!(output.is_dir());
    assert!(output.join(format!("bwc_metadata_{STAMP}.csv")).is_file());
    assert!(output.join(format!("bwc_missing_time_chunks_{STAMP}.csv")).is_file());
    assert!(output.join(format!("bwc_metadata_{STAMP}.xlsx")).is_file());
    assert!(output.join("CASE1_concurrentScene-1.m3u").is_file());
    assert_eq!(report.exports.written.len(), 4);
    Ok(())
}

#[test]
fn test_organize_copies_scenes() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let output = tempdir()?;
    let alice = "Alice_Smith_01_01_2024_10_00_00_CASE1.mp4";
    let bob = "Bob_Jones_01_01_2024_12_00_00_CASE2.mp4";
    write_files(input.path(), &[alice, bob]);

    let mut config = config(input.path(), output.path(), OutputMode::Playlists, ReportFormat::Csv);
    config.organize_files = true;
    config.copy_workers = 2;

    let report = process_directory(
        &config,
        &TableProbe::new(&[(alice, 60), (bob, 60)]),
        &StdFsMetadataProvider,
    )?;

    let copies = report.exports.copies.as_ref().expect("organize ran");
    assert_eq!(copies.copied, 2);
    assert!(copies.failures.is_empty());
    assert!(output.path().join("CASE1_concurrentScene-1").join(alice).is_file());
    assert!(output.path().join("CASE2_concurrentScene-2").join(bob).is_file());
    // Sources stay where they were.
    assert!(input.path().join(alice).is_file());
    assert!(input.path().join(bob).is_file());
    Ok(())
}

#[test]
fn test_legacy_grouping_splits_nested_fixture() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let long = "Long_Cam_01_01_2024_10_00_00_C.mp4";
    let short = "Short_Cam_01_01_2024_10_01_00_C.mp4";
    let late = "Late_Cam_01_01_2024_10_05_00_C.mp4";
    write_files(input.path(), &[long, short, late]);
    let probe = TableProbe::new(&[(long, 600), (short, 60), (late, 60)]);

    for (strategy, expected) in [(GroupingStrategy::RunningMax, 1), (GroupingStrategy::Adjacent, 2)] {
        let output = tempdir()?;
        let mut config = config(input.path(), output.path(), OutputMode::Playlists, ReportFormat::Csv);
        config.grouping = strategy;
        let report = process_directory(&config, &probe, &StdFsMetadataProvider)?;
        assert_eq!(report.analysis.group_count, expected, "{strategy:?}");
    }
    Ok(())
}
