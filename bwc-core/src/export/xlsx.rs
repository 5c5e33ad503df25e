//! XLSX workbook writer.
//!
//! One workbook holds both tables: the clip metadata on the `Metadata`
//! sheet and the gaps on `Missing Time Chunks`. Numeric columns are stored
//! as numbers so they sort and sum in a spreadsheet.

use crate::error::{CoreResult, export_error};
use crate::report::{CLIP_COLUMNS, GAP_COLUMNS, ReportRows};

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;

pub const METADATA_SHEET: &str = "Metadata";
pub const GAP_SHEET: &str = "Missing Time Chunks";

/// Writes both report tables to a workbook at `path`.
pub fn write_workbook(path: &Path, rows: &ReportRows) -> CoreResult<()> {
    build_workbook(rows)
        .and_then(|mut workbook| workbook.save(path))
        .map_err(|e| export_error(path.display(), e))?;

    log::info!("Excel report saved: {}", path.display());
    Ok(())
}

fn build_workbook(rows: &ReportRows) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(METADATA_SHEET)?;
    write_header(sheet, &CLIP_COLUMNS, &header)?;
    for (i, row) in rows.clips.iter().enumerate() {
        let r = data_row(i);
        sheet.write_string(r, 0, &row.file_name)?;
        sheet.write_string(r, 1, &row.first_name)?;
        sheet.write_string(r, 2, &row.last_name)?;
        sheet.write_string(r, 3, &row.case_number)?;
        sheet.write_string(r, 4, &row.start_time)?;
        sheet.write_string(r, 5, &row.end_time)?;
        sheet.write_number(r, 6, row.duration as f64)?;
        sheet.write_number(r, 7, row.file_size as f64)?;
        if let Some(group) = row.group {
            sheet.write_number(r, 8, f64::from(group))?;
        }
    }
    sheet.autofit();

    let sheet = workbook.add_worksheet();
    sheet.set_name(GAP_SHEET)?;
    write_header(sheet, &GAP_COLUMNS, &header)?;
    for (i, row) in rows.gaps.iter().enumerate() {
        let r = data_row(i);
        sheet.write_string(r, 0, &row.first_name)?;
        sheet.write_string(r, 1, &row.last_name)?;
        sheet.write_string(r, 2, &row.gap_start)?;
        sheet.write_string(r, 3, &row.gap_end)?;
        sheet.write_number(r, 4, row.gap_duration_seconds as f64)?;
    }
    sheet.autofit();

    Ok(workbook)
}

fn write_header(sheet: &mut Worksheet, columns: &[&str], format: &Format) -> Result<(), XlsxError> {
    for (col, name) in (0u16..).zip(columns) {
        sheet.write_string_with_format(0, col, *name, format)?;
    }
    Ok(())
}

// Row 0 is the header.
fn data_row(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
