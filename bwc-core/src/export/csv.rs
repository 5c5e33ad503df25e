//! CSV report writers.
//!
//! The header row is written explicitly so an empty table still produces a
//! file with its columns.

use crate::error::{CoreResult, export_error};
use crate::report::{CLIP_COLUMNS, ClipRow, GAP_COLUMNS, GapRow};

use serde::Serialize;
use std::path::Path;

/// Writes the metadata table.
pub fn write_clip_csv(path: &Path, rows: &[ClipRow]) -> CoreResult<()> {
    write_table(path, &CLIP_COLUMNS, rows)
}

/// Writes the missing time table.
pub fn write_gap_csv(path: &Path, rows: &[GapRow]) -> CoreResult<()> {
    write_table(path, &GAP_COLUMNS, rows)
}

fn write_table<R: Serialize>(path: &Path, header: &[&str], rows: &[R]) -> CoreResult<()> {
    let fail = |e: ::csv::Error| export_error(path.display(), e);

    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(fail)?;
    writer.write_record(header).map_err(fail)?;
    for row in rows {
        writer.serialize(row).map_err(fail)?;
    }
    writer
        .flush()
        .map_err(|e| export_error(path.display(), e))?;

    log::info!("CSV report saved: {}", path.display());
    Ok(())
}
