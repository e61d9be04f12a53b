// src/process/utils.rs

use anyhow::{Context, Result};
use arrow::{
    array::ArrayRef,
    datatypes::{Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;

/// Whether `batch` has a column called `name`.
pub fn has_column(batch: &RecordBatch, name: &str) -> bool {
    batch.schema().column_with_name(name).is_some()
}

pub fn column_names(batch: &RecordBatch) -> Vec<String> {
    batch
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect()
}

/// Rebuild `batch` with each `(field, array)` swapped in by name, or
/// appended at the end if no column has that name yet.
pub fn replace_or_append(
    batch: &RecordBatch,
    updates: Vec<(Field, ArrayRef)>,
) -> Result<RecordBatch> {
    let schema = batch.schema();
    let mut fields: Vec<Field> = schema.fields().iter().map(|f| f.as_ref().clone()).collect();
    let mut cols: Vec<ArrayRef> = batch.columns().to_vec();

    for (field, arr) in updates {
        match fields.iter().position(|f| f.name() == field.name()) {
            Some(i) => {
                fields[i] = field;
                cols[i] = arr;
            }
            None => {
                fields.push(field);
                cols.push(arr);
            }
        }
    }

    let schema = Schema::new(fields).with_metadata(schema.metadata().clone());
    RecordBatch::try_new(Arc::new(schema), cols).context("rebuilding table")
}
