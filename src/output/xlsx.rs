// src/output/xlsx.rs

use anyhow::{Context, Result};
use arrow::{
    array::{Array, ArrayRef, Float64Array, Int64Array, StringArray},
    datatypes::DataType,
    record_batch::RecordBatch,
    util::display::array_value_to_string,
};
use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use tracing::{debug, info};

pub const SHEET_NAME: &str = "Sheet1";

/// Write `batch` as a single-sheet workbook: bold header row of column
/// names, then one row per record. Nulls are left blank, no index column.
///
/// An existing file at `path` is overwritten.
pub fn write_xlsx(batch: &RecordBatch, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    let schema = batch.schema();
    for (c, field) in schema.fields().iter().enumerate() {
        let col = u16::try_from(c).context("too many columns for a worksheet")?;
        worksheet
            .write_string_with_format(0, col, field.name(), &header)
            .with_context(|| format!("writing header `{}`", field.name()))?;
        write_column(worksheet, col, batch.column(c))
            .with_context(|| format!("writing column `{}`", field.name()))?;
    }
    worksheet.autofit();

    workbook
        .save(path)
        .with_context(|| format!("saving workbook to {}", path.display()))?;

    info!(
        path = %path.display(),
        rows = batch.num_rows(),
        columns = batch.num_columns(),
        "wrote spreadsheet"
    );
    Ok(())
}

fn write_column(ws: &mut Worksheet, col: u16, arr: &ArrayRef) -> Result<()> {
    match arr.data_type() {
        DataType::Utf8 => {
            let a = downcast::<StringArray>(arr)?;
            for (i, v) in a.iter().enumerate() {
                if let Some(s) = v {
                    ws.write_string(sheet_row(i)?, col, s)?;
                }
            }
        }
        DataType::Float64 => {
            let a = downcast::<Float64Array>(arr)?;
            for (i, v) in a.iter().enumerate() {
                // NaN/inf have no cell representation, leave blank like nulls
                if let Some(n) = v.filter(|n| n.is_finite()) {
                    ws.write_number(sheet_row(i)?, col, n)?;
                }
            }
        }
        DataType::Int64 => {
            let a = downcast::<Int64Array>(arr)?;
            for (i, v) in a.iter().enumerate() {
                if let Some(n) = v {
                    ws.write_number(sheet_row(i)?, col, n as f64)?;
                }
            }
        }
        other => {
            debug!(data_type = %other, "writing column via display strings");
            for i in 0..arr.len() {
                if arr.is_valid(i) {
                    let s = array_value_to_string(arr.as_ref(), i)?;
                    ws.write_string(sheet_row(i)?, col, &s)?;
                }
            }
        }
    }
    Ok(())
}

fn downcast<T: 'static>(arr: &ArrayRef) -> Result<&T> {
    arr.as_any()
        .downcast_ref::<T>()
        .with_context(|| format!("unexpected array for {}", arr.data_type()))
}

/// Data row `i` sits below the header.
fn sheet_row(i: usize) -> Result<u32> {
    u32::try_from(i + 1).context("too many rows for a worksheet")
}

/// First sheet of a workbook, as read back from disk.
#[derive(Debug)]
pub struct SheetSummary {
    pub sheet_names: Vec<String>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<Data>>,
}

/// Read the first worksheet of an `.xlsx` file; row 0 is taken as the header.
pub fn read_xlsx_summary(path: &Path) -> Result<SheetSummary> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).with_context(|| format!("opening workbook {}", path.display()))?;
    let sheet_names = workbook.sheet_names();
    let first = sheet_names
        .first()
        .cloned()
        .with_context(|| format!("{} has no worksheets", path.display()))?;
    let range = workbook
        .worksheet_range(&first)
        .with_context(|| format!("reading sheet `{}`", first))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .unwrap_or_default();
    let rows = rows.map(|r| r.to_vec()).collect();

    Ok(SheetSummary {
        sheet_names,
        header,
        rows,
    })
}
