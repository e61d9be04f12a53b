// src/process/date_split.rs

use super::utils::replace_or_append;
use anyhow::{Context, Result};
use arrow::{
    array::{Array, ArrayRef, Int64Builder, StringArray},
    datatypes::{DataType, Field},
    record_batch::RecordBatch,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::{debug, info};

pub const YEAR_COLUMN: &str = "year";
pub const MONTH_COLUMN: &str = "month";

/// First 4 digits + 2 digits anywhere in the value; not anchored.
static YEAR_MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{4})([0-9]{2})").expect("year-month pattern should parse"));

/// Turn `YYYYMmm` values in `column` into `YYYYmm`, and derive integer
/// `year` / `month` columns from them.
///
/// Rows that don't contain 4+2 digits after stripping get null year/month.
/// Existing `year` / `month` columns are overwritten, so running this twice
/// is harmless as long as `column` is still text.
pub fn split_date(batch: &RecordBatch, column: &str) -> Result<RecordBatch> {
    let schema = batch.schema();
    let source_field = schema
        .field_with_name(column)
        .with_context(|| format!("column `{}` not in table", column))?
        .clone();
    let arr = batch
        .column_by_name(column)
        .with_context(|| format!("column `{}` not in table", column))?;
    let sarr = arr
        .as_any()
        .downcast_ref::<StringArray>()
        .with_context(|| format!("column `{}` is {}, expected text", column, arr.data_type()))?;

    // 1) drop every literal 'M'
    let stripped: StringArray = sarr.iter().map(|opt| opt.map(|s| s.replace('M', ""))).collect();

    // 2) + 3) extract and convert
    let mut years = Int64Builder::with_capacity(stripped.len());
    let mut months = Int64Builder::with_capacity(stripped.len());
    let mut unmatched = 0usize;
    for opt in stripped.iter() {
        match opt.and_then(year_month) {
            Some((y, m)) => {
                years.append_value(y);
                months.append_value(m);
            }
            None => {
                years.append_null();
                months.append_null();
                unmatched += 1;
            }
        }
    }
    if unmatched > 0 {
        debug!(column, unmatched, "values without a YYYYMM part");
    }

    let out = replace_or_append(
        batch,
        vec![
            (source_field, Arc::new(stripped) as ArrayRef),
            (
                Field::new(YEAR_COLUMN, DataType::Int64, true),
                Arc::new(years.finish()) as ArrayRef,
            ),
            (
                Field::new(MONTH_COLUMN, DataType::Int64, true),
                Arc::new(months.finish()) as ArrayRef,
            ),
        ],
    )
    .with_context(|| format!("splitting `{}` into year and month", column))?;

    info!(column, rows = out.num_rows(), "split date column into year and month");
    Ok(out)
}

fn year_month(s: &str) -> Option<(i64, i64)> {
    let caps = YEAR_MONTH.captures(s)?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
}
